//! Utility functions for CLI operations.

use crate::error::CliError;
use filestage::path::normalize;
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Resolve a path argument, defaulting to the current directory.
///
/// Paths are made absolute (with tilde expansion and lexical dot removal)
/// but not canonicalized; the collector resolves symlinks itself.
pub fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let path_to_resolve = match path {
        Some(p) => p,
        None => env::current_dir()?,
    };

    normalize_path(&path_to_resolve)
}

/// Normalize a path (make absolute, expand ~) without following symlinks.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize::normalize(path).map_err(CliError::from)
}
