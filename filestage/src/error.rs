//! Error types for the filestage library.
//!
//! Two kinds of failures can occur while collecting files: a submitted path
//! (or an intermediate directory on its way to canonical form) cannot be
//! resolved, or the resolved source cannot be copied into the staging tree.
//! Both are per-file conditions surfaced through the batch result of
//! [`crate::FileCollector::copy_files`].

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a filestage error.
///
/// # Examples
///
/// ```
/// use filestage::{Error, Result};
///
/// fn example_operation() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the filestage library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path, or a directory on its way to canonical form, does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A source file could not be copied to its staged destination.
    #[error("cannot copy {} to {}: {source}", from.display(), to.display())]
    CopyFailed {
        /// The resolved source path.
        from: PathBuf,
        /// The destination path under the staging root.
        to: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory inside the staging tree could not be created.
    #[error("cannot create staging directory {}: {source}", path.display())]
    CreateDirFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use filestage::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use filestage::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error occurred while writing into the staging tree.
    #[must_use]
    pub fn is_copy_error(&self) -> bool {
        matches!(self, Self::CopyFailed { .. } | Self::CreateDirFailed { .. })
    }
}
