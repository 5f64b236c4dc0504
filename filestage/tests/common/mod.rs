//! Common test utilities for integration tests.
//!
//! Provides a small fixture builder for source trees, working around the
//! fact that temp directories often sit behind symlinks (`/tmp` on macOS):
//! all paths handed out are pre-canonicalized so tests can compare them
//! against the collector's real-path output.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory whose reported path is fully canonical.
pub struct RealDir {
    // Held for cleanup on drop.
    _guard: TempDir,
    path: PathBuf,
}

impl RealDir {
    /// Create a fresh canonical temp directory.
    pub fn new() -> Self {
        let guard = tempfile::tempdir().expect("create temp dir");
        let path = fs::canonicalize(guard.path()).expect("canonicalize temp dir");
        Self {
            _guard: guard,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a file with the given relative path and content.
    #[allow(dead_code)]
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }

    /// Create a subdirectory with the given relative path.
    #[allow(dead_code)]
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path.join(rel);
        fs::create_dir_all(&path).expect("create fixture dir");
        path
    }

    /// Create a symlink at `rel` pointing to `target`.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn symlink(&self, target: &Path, rel: &str) -> PathBuf {
        let path = self.path.join(rel);
        std::os::unix::fs::symlink(target, &path).expect("create fixture symlink");
        path
    }
}

/// Build a collector whose staging root and base are the same directory.
#[allow(dead_code)]
pub fn collector_for(root: &RealDir) -> filestage::FileCollector {
    filestage::FileCollector::new(root.path().to_path_buf(), root.path().to_path_buf())
        .expect("construct collector")
}
