use forge_domain::files::FileSet;
use forge_domain::tiers::TierName;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// The only message a caller ever sees for an internal fault.
pub const GENERIC_FAILURE: &str = "Internal compilation failure: compilation failed";

/// Outcome of [`crate::Compiler::compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompilationResult {
    Compiled(CompiledPackage),
    /// The configuration failed validation; nothing was generated.
    Rejected { errors: Vec<String> },
    /// Generation or packaging failed; carries [`GENERIC_FAILURE`] only.
    Failed { errors: Vec<String> },
}

impl CompilationResult {
    pub(crate) fn failed() -> Self {
        Self::Failed { errors: vec![GENERIC_FAILURE.to_owned()] }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Compiled(_))
    }

    /// Validation or failure messages; empty on success.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Compiled(_) => &[],
            Self::Rejected { errors } | Self::Failed { errors } => errors,
        }
    }

    #[must_use]
    pub fn archive(&self) -> Option<&[u8]> {
        self.package().map(|package| package.archive.as_slice())
    }

    #[must_use]
    pub fn file_count(&self) -> Option<usize> {
        self.package().map(|package| package.file_count)
    }

    #[must_use]
    pub fn manifest(&self) -> Option<&CompilationManifest> {
        self.package().map(|package| &package.manifest)
    }

    #[must_use]
    pub const fn package(&self) -> Option<&CompiledPackage> {
        match self {
            Self::Compiled(package) => Some(package),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_package(self) -> Option<CompiledPackage> {
        match self {
            Self::Compiled(package) => Some(package),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPackage {
    pub archive: Vec<u8>,
    pub file_count: usize,
    pub manifest: CompilationManifest,
}

/// Describes a compiled package without its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationManifest {
    pub project: String,
    pub tier: TierName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staking_program: Option<String>,
    /// SHA-256 of the archive bytes.
    pub archive_sha256: String,
    pub archive_bytes: usize,
    pub entries: Vec<ManifestEntry>,
}

/// One archive member, in archive order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub path: String,
    pub size: usize,
    pub sha256: String,
}

impl ManifestEntry {
    pub(crate) fn list(files: &FileSet) -> Vec<Self> {
        files
            .iter()
            .map(|(path, content)| Self {
                path: path.to_owned(),
                size: content.len(),
                sha256: sha256_hex(content.as_bytes()),
            })
            .collect()
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_variant() {
        let rejected = CompilationResult::Rejected { errors: vec!["Unknown tier 'x'".to_owned()] };
        assert!(!rejected.is_success());
        assert_eq!(rejected.errors().len(), 1);
        assert!(rejected.archive().is_none());
        assert!(rejected.file_count().is_none());

        let failed = CompilationResult::failed();
        assert_eq!(failed.errors(), [GENERIC_FAILURE]);
    }

    #[test]
    fn entries_hash_content() {
        let mut files = FileSet::new();
        files.insert("a.txt", "abc").unwrap();
        let entries = ManifestEntry::list(&files);
        assert_eq!(entries[0].size, 3);
        assert_eq!(
            entries[0].sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
