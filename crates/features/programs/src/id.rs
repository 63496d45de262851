//! Deterministic program identifiers.
//!
//! An identifier is the SHA-256 digest of an explicitly ordered byte concatenation, rendered in
//! base58 like any Solana address. Nothing else from the project configuration participates.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramId([u8; 32]);

impl ProgramId {
    /// `sha256(symbol || project_name)`.
    #[must_use]
    pub fn derive(symbol: &str, project_name: &str) -> Self {
        Self::digest(&[symbol.as_bytes(), project_name.as_bytes()])
    }

    /// `sha256(symbol || project_name || scope)`, for companion programs such as staking.
    #[must_use]
    pub fn derive_scoped(symbol: &str, project_name: &str, scope: &str) -> Self {
        Self::digest(&[symbol.as_bytes(), project_name.as_bytes(), scope.as_bytes()])
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    fn digest(parts: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl Serialize for ProgramId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
