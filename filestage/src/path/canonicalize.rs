//! Symlink-resolving path canonicalization.
//!
//! Thin wrapper over `std::fs::canonicalize` (POSIX `realpath` semantics)
//! that maps the interesting `io::ErrorKind`s onto the library's error
//! variants so callers can distinguish "does not exist" from "cannot
//! access" without inspecting raw I/O errors.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve a path to its absolute, symlink-free form.
///
/// Every component of the path must exist; `..` components are collapsed
/// against the real (post-symlink) parent, exactly as `realpath` does.
///
/// # Errors
///
/// Returns an error if:
/// - Any component of the path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Another I/O error occurs (including symlink loops)
///
/// # Examples
///
/// ```no_run
/// use filestage::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}
