//! The file collection session.
//!
//! A `FileCollector` accumulates submitted paths and, on demand, copies
//! every one of them into the staging root while building the mapping
//! table. Submission (`add_file`) is pure bookkeeping; all filesystem work
//! happens inside `copy_files`.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dest::stage_path;
use crate::error::{Error, Result};
use crate::mapping::{MappingTable, VfsEntry};
use crate::path::PathResolver;

/// Collects the files an external process touched into a staging tree.
///
/// The collector owns all session state: the staging root, the set of
/// submitted paths, the symlink resolution cache, and the mapping table.
/// One collector instance corresponds to one snapshot session; it is not
/// synchronized, so a multi-threaded caller must serialize access
/// externally. The staging root is assumed to be exclusively owned by the
/// collector for the duration of its use.
///
/// # Examples
///
/// ```no_run
/// use filestage::FileCollector;
/// use std::path::PathBuf;
///
/// let root = PathBuf::from("/tmp/reproducer");
/// let mut collector = FileCollector::new(root.clone(), root).unwrap();
///
/// collector.add_file("/project/src/main.c");
/// collector.add_file("/project/src/main.c"); // exact repeat: no-op
///
/// collector.copy_files(true).unwrap();
/// assert_eq!(collector.mappings().len(), 1);
/// ```
#[derive(Debug)]
pub struct FileCollector {
    /// Staging directory all copies land under.
    root: PathBuf,
    /// Submitted paths, exactly as given by the caller. Keyed by the raw
    /// string so membership is textual, not semantic: `Path` equality
    /// would collapse `.` components and repeated separators.
    seen: BTreeSet<OsString>,
    /// Virtual/real resolution with the session's symlink cache.
    resolver: PathResolver,
    /// Accumulated (virtual, real) associations.
    mapping: MappingTable,
    /// Failures swallowed by the most recent continue-on-error batch.
    skipped: Vec<(PathBuf, Error)>,
}

impl FileCollector {
    /// Create a collector staging into `root`, anchoring relative
    /// submissions at `base`.
    ///
    /// The root is created lazily on the first `copy_files` call, so it
    /// only needs to be creatable, not existing.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` or `base` is not absolute.
    pub fn new(root: PathBuf, base: PathBuf) -> Result<Self> {
        if !root.is_absolute() {
            return Err(Error::InvalidPath {
                path: root,
                reason: "Staging root must be absolute".to_string(),
            });
        }
        Ok(Self {
            root,
            seen: BTreeSet::new(),
            resolver: PathResolver::new(base)?,
            mapping: MappingTable::new(),
            skipped: Vec::new(),
        })
    }

    /// The staging root all copies are placed under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Submit a path for collection.
    ///
    /// Records the path exactly as given; no filesystem access happens and
    /// the call never fails. Submitting a path that does not exist is
    /// legal and only surfaces as an error at copy time. Repeated
    /// submissions of the same string are no-ops.
    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        self.seen.insert(path.as_ref().as_os_str().to_os_string());
    }

    /// Whether this exact path string has been submitted.
    ///
    /// Membership is by exact string, not by semantic path: two different
    /// spellings of the same file count as two distinct submissions.
    #[must_use]
    pub fn has_seen(&self, path: impl AsRef<Path>) -> bool {
        self.seen.contains(path.as_ref().as_os_str())
    }

    /// Read-only snapshot of the mapping table.
    #[must_use]
    pub fn mappings(&self) -> &[VfsEntry] {
        self.mapping.entries()
    }

    /// Number of directories held in the symlink resolution cache.
    #[must_use]
    pub fn cached_dirs(&self) -> usize {
        self.resolver.cached_dirs()
    }

    /// Submissions the most recent continue-on-error batch failed to
    /// collect, with the error each one hit.
    ///
    /// Cleared at the start of every `copy_files` call, so a successful
    /// retry leaves the list empty. Always empty after a strict batch,
    /// which surfaces its first failure through the return value instead.
    #[must_use]
    pub fn skipped(&self) -> &[(PathBuf, Error)] {
        &self.skipped
    }

    /// Copy every submitted path into the staging root and record its
    /// mapping entry.
    ///
    /// Per file: the submitted path is resolved to its virtual and real
    /// forms, the destination mirroring the real path is computed, missing
    /// intermediate directories are created, and the bytes are copied. A
    /// destination that already exists (from an earlier batch) is left in
    /// place but still yields its mapping entry, so re-running a batch is
    /// idempotent. Submitted paths that are directories are materialized
    /// as directories instead of being byte-copied.
    ///
    /// # Errors
    ///
    /// With `stop_on_error` set, the first per-file failure aborts the
    /// batch and is returned; files not yet processed stay uncollected.
    /// Without it, per-file failures are recorded in [`Self::skipped`]
    /// (and logged at debug level), no mapping entry is recorded for them,
    /// and the batch reports success. A later `copy_files` call retries
    /// every submitted path, so transient failures can be recovered after
    /// an external fix.
    pub fn copy_files(&mut self, stop_on_error: bool) -> Result<()> {
        self.skipped.clear();

        fs::create_dir_all(&self.root).map_err(|source| Error::CreateDirFailed {
            path: self.root.clone(),
            source,
        })?;

        let pending: Vec<PathBuf> = self.seen.iter().cloned().map(PathBuf::from).collect();
        for submitted in pending {
            match self.stage_one(&submitted) {
                Ok(entry) => self.mapping.insert(entry),
                Err(err) if stop_on_error => return Err(err),
                Err(err) => {
                    log::debug!("skipping {}: {err}", submitted.display());
                    self.skipped.push((submitted, err));
                }
            }
        }
        Ok(())
    }

    /// Resolve, copy, and map one submitted path.
    fn stage_one(&mut self, submitted: &Path) -> Result<VfsEntry> {
        let virtual_path = self.resolver.virtual_path(submitted)?;
        let source = self.resolver.real_path(submitted)?;

        let metadata = fs::metadata(&source).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::PathNotFound {
                path: source.clone(),
            },
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: source.clone(),
            },
            _ => Error::Io(e),
        })?;

        let dest = stage_path(&self.root, &source);

        if metadata.is_dir() {
            // A bare directory entry materializes as a directory.
            fs::create_dir_all(&dest).map_err(|e| Error::CreateDirFailed {
                path: dest.clone(),
                source: e,
            })?;
        } else if !dest.exists() {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::CreateDirFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            // fs::copy carries the source permissions over to the copy.
            fs::copy(&source, &dest).map_err(|e| Error::CopyFailed {
                from: source.clone(),
                to: dest.clone(),
                source: e,
            })?;
        }

        Ok(VfsEntry::new(virtual_path, dest))
    }
}
