use crate::error::{ArchiveError, ArchiveErrorExt};
use forge_domain::files::FileSet;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Maximum Deflate level.
pub const COMPRESSION_LEVEL: i64 = 9;
/// Unix mode recorded for every member.
pub const MEMBER_PERMISSIONS: u32 = 0o644;

/// Archive bytes and the number of members written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedArchive {
    pub bytes: Vec<u8>,
    pub member_count: usize,
}

impl PackedArchive {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Encodes a [`FileSet`] as a reproducible ZIP archive.
#[derive(Debug, Default, Clone, Copy)]
pub struct Packager;

impl Packager {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Writes every file of `files`, in insertion order, into an in-memory ZIP archive.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Zip`] or [`ArchiveError::Io`] if the encoder fails.
    pub fn pack(&self, files: &FileSet) -> Result<PackedArchive, ArchiveError> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(COMPRESSION_LEVEL))
            .last_modified_time(DateTime::default())
            .unix_permissions(MEMBER_PERMISSIONS);

        let mut writer = ZipWriter::new(Cursor::new(Vec::with_capacity(files.total_bytes() / 2)));
        for (path, content) in files.iter() {
            writer.start_file(path, options).context(format!("Member header failed: {path}"))?;
            writer.write_all(content.as_bytes()).context(format!("Member body failed: {path}"))?;
        }
        let bytes = writer.finish().context("Central directory failed")?.into_inner();

        debug!(members = files.len(), bytes = bytes.len(), "Archive packed");
        Ok(PackedArchive { bytes, member_count: files.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_a_valid_archive() {
        let archive = Packager::new().pack(&FileSet::new()).unwrap();
        assert_eq!(archive.member_count, 0);
        let reader = zip::ZipArchive::new(Cursor::new(archive.bytes)).unwrap();
        assert_eq!(reader.len(), 0);
    }

    #[test]
    fn content_changes_the_bytes() {
        let mut a = FileSet::new();
        a.insert("a.txt", "one").unwrap();
        let mut b = FileSet::new();
        b.insert("a.txt", "two").unwrap();
        assert_ne!(Packager::new().pack(&a).unwrap(), Packager::new().pack(&b).unwrap());
    }
}
