//! The virtual-to-real mapping table.
//!
//! Each collected file contributes one entry associating the path the
//! producing process used (possibly through symlinks) with the location of
//! the staged copy. The table is held in memory; serializing it into an
//! overlay description is the job of an external consumer, which is why
//! [`VfsEntry`] derives the serde traits.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One (virtual path, real path) association.
///
/// Equality is structural over the two path fields, so entries can be
/// compared and searched for in tests and by consumers.
///
/// # Examples
///
/// ```
/// use filestage::VfsEntry;
/// use std::path::PathBuf;
///
/// let entry = VfsEntry::new(
///     PathBuf::from("/src/bar/ddd"),
///     PathBuf::from("/stage/src/foo/ddd"),
/// );
/// assert_eq!(entry.virtual_path, PathBuf::from("/src/bar/ddd"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VfsEntry {
    /// The path as originally referenced by the producing process,
    /// absolute and lexically dot-free, symlinks preserved.
    pub virtual_path: PathBuf,
    /// The staged copy's location under the collection root.
    pub real_path: PathBuf,
}

impl VfsEntry {
    /// Create a new mapping entry.
    #[must_use]
    pub fn new(virtual_path: PathBuf, real_path: PathBuf) -> Self {
        Self {
            virtual_path,
            real_path,
        }
    }
}

/// Append-only accumulator of mapping entries.
///
/// Entries keep insertion order. Inserting an entry identical to one
/// already present is a no-op, which keeps repeated `copy_files` batches
/// idempotent; two *different* virtual paths mapping to the same real copy
/// still produce two entries.
///
/// # Examples
///
/// ```
/// use filestage::{MappingTable, VfsEntry};
/// use std::path::PathBuf;
///
/// let mut table = MappingTable::new();
/// let entry = VfsEntry::new(PathBuf::from("/a"), PathBuf::from("/stage/a"));
///
/// table.insert(entry.clone());
/// table.insert(entry.clone());
/// assert_eq!(table.len(), 1);
/// assert!(table.contains(&entry));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<VfsEntry>,
}

impl MappingTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless an identical one is already present.
    pub fn insert(&mut self, entry: VfsEntry) {
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Read-only view of the accumulated entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[VfsEntry] {
        &self.entries
    }

    /// Whether an identical entry has been recorded.
    #[must_use]
    pub fn contains(&self, entry: &VfsEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(v: &str, r: &str) -> VfsEntry {
        VfsEntry::new(PathBuf::from(v), PathBuf::from(r))
    }

    #[test]
    fn test_entry_structural_equality() {
        let a = entry("/src/aaa", "/stage/src/aaa");
        let b = entry("/src/aaa", "/stage/src/aaa");
        let c = entry("/src/aaa", "/stage/src/bbb");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut table = MappingTable::new();
        table.insert(entry("/b", "/stage/b"));
        table.insert(entry("/a", "/stage/a"));

        let paths: Vec<_> = table
            .entries()
            .iter()
            .map(|e| e.virtual_path.clone())
            .collect();
        assert_eq!(paths, vec![PathBuf::from("/b"), PathBuf::from("/a")]);
    }

    #[test]
    fn test_insert_exact_duplicate_is_noop() {
        let mut table = MappingTable::new();
        table.insert(entry("/a", "/stage/a"));
        table.insert(entry("/a", "/stage/a"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_two_virtual_paths_same_real_copy() {
        // Two symlinked spellings of one file each get an entry.
        let mut table = MappingTable::new();
        table.insert(entry("/src/bar/ddd", "/stage/src/foo/ddd"));
        table.insert(entry("/src/foo/ddd", "/stage/src/foo/ddd"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = MappingTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.entries().is_empty());
    }

    #[test]
    fn test_entry_serializes() {
        let e = entry("/src/aaa", "/stage/src/aaa");
        let yaml = serde_yaml::to_string(&e).unwrap();
        assert!(yaml.contains("virtual_path"));
        assert!(yaml.contains("real_path"));

        let back: VfsEntry = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, e);
    }
}
