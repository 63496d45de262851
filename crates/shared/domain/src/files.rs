//! Ordered in-memory file tree produced by the generators.

use crate::error::DomainError;
use fxhash::FxHashMap;

/// Relative path -> text content, kept in insertion order.
///
/// Insertion order is the archive member order. A path can be written once: repeating an
/// identical write is a no-op, a differing write is a [`DomainError::PathConflict`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileSet {
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

/// Outcome of a successful [`FileSet::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inserted {
    New,
    Unchanged,
}

impl FileSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file.
    ///
    /// # Errors
    /// * [`DomainError::InvalidPath`] for empty, absolute, backslashed or `..` paths.
    /// * [`DomainError::PathConflict`] if the path already holds different content.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Inserted, DomainError> {
        let path = path.into();
        let content = content.into();
        check_path(&path)?;

        if let Some(&at) = self.index.get(&path) {
            return if self.entries[at].1 == content {
                Ok(Inserted::Unchanged)
            } else {
                Err(DomainError::PathConflict { path, context: None })
            };
        }

        self.index.insert(path.clone(), self.entries.len());
        self.entries.push((path, content));
        Ok(Inserted::New)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.index.get(path).map(|&at| self.entries[at].1.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(path, content)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries.iter().map(|(path, content)| (path.as_str(), content.as_str()))
    }

    pub fn paths(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|(_, content)| content.len()).sum()
    }
}

fn check_path(path: &str) -> Result<(), DomainError> {
    let reason = if path.is_empty() {
        Some("path is empty")
    } else if path.starts_with('/') {
        Some("path must be relative")
    } else if path.contains('\\') {
        Some("path must use '/' separators")
    } else if path.split('/').any(|segment| segment == ".." || segment.is_empty()) {
        Some("path must not contain '..' or empty segments")
    } else {
        None
    };

    reason.map_or(Ok(()), |reason| {
        Err(DomainError::InvalidPath { path: path.to_owned(), reason, context: None })
    })
}
