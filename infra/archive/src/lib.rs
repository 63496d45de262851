//! Reproducible archive packaging.
//!
//! - **Deterministic Output**: members keep file-set order, every entry carries the same DOS
//!   timestamp (1980-01-01 00:00) and `0o644` permissions, and Deflate always runs at level 9.
//!   Identical file sets therefore produce byte-identical archives.
//! - **Atomic Persistence**: [`persist`] uses the "atomic swap" pattern (unique temp write +
//!   `fsync` + `rename`) under a wall-clock budget.
//!
//! # Examples
//!
//! ```rust
//! use forge_archive::{ArchiveError, Packager};
//! use forge_domain::files::FileSet;
//!
//! # fn main() -> Result<(), ArchiveError> {
//! let mut files = FileSet::new();
//! files.insert("README.md", "# Acme\n").unwrap();
//!
//! let archive = Packager::default().pack(&files)?;
//! assert_eq!(archive.member_count, 1);
//! assert_eq!(archive, Packager::default().pack(&files)?);
//! # Ok(())
//! # }
//! ```

mod error;
mod packer;
mod persist;

pub use crate::error::{ArchiveError, ArchiveErrorExt};
pub use crate::packer::{PackedArchive, Packager};
pub use crate::persist::persist;
