//! Lexical path normalization.
//!
//! The functions here never touch the filesystem. They expand a leading
//! tilde, anchor relative paths to a base directory, and remove `.`/`..`
//! components by pure component manipulation. Symlink-aware resolution
//! lives in [`super::canonicalize`] and [`super::resolver`].

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading tilde (`~`) to the home directory.
///
/// Handles `~` and `~/path`; the `~user` form is rejected. Paths that do
/// not start with a tilde are returned unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax
///
/// # Examples
///
/// ```
/// use filestage::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// assert_eq!(
///     expand_tilde(Path::new("/absolute")).unwrap(),
///     Path::new("/absolute")
/// );
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Anchor a path to a base directory, leaving `.` and `..` intact.
///
/// Tilde-expands the path, then joins it onto `base` if it is relative.
/// Dot components are deliberately preserved: the collector resolves `..`
/// through the *real* parent directory later, which a lexical rewrite here
/// would defeat.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or `base` is not absolute.
///
/// # Examples
///
/// ```
/// use filestage::path::normalize::absolutize;
/// use std::path::{Path, PathBuf};
///
/// let abs = absolutize(Path::new("foo/../bar"), Path::new("/work")).unwrap();
/// assert_eq!(abs, PathBuf::from("/work/foo/../bar"));
///
/// let abs = absolutize(Path::new("/etc/hosts"), Path::new("/work")).unwrap();
/// assert_eq!(abs, PathBuf::from("/etc/hosts"));
/// ```
pub fn absolutize(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    if !base.is_absolute() {
        return Err(Error::InvalidPath {
            path: base.to_path_buf(),
            reason: "Base directory must be absolute".to_string(),
        });
    }

    Ok(base.join(expanded))
}

/// Remove `.` and `..` components from an absolute path, lexically.
///
/// `..` pops the preceding component without consulting the filesystem,
/// and at the root it is absorbed, as `realpath` does: `/../etc` is
/// `/etc`. This is the right operation for computing a *virtual* path
/// key, where symlinks must stay visible; it is the wrong one for
/// locating the file on disk (see
/// [`super::resolver::PathResolver::real_path`]).
///
/// # Errors
///
/// Returns an error if a *relative* path climbs above its own start;
/// absolute paths always resolve.
///
/// # Examples
///
/// ```
/// use filestage::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/../etc/hosts")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/etc/hosts"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {
                // "." never changes the path
            }
            Component::ParentDir => {
                // The root is its own parent, so ".." there is a no-op.
                if !result.pop() && !has_root {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Too many '..' components for a relative path".to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Normalize a path against the current working directory.
///
/// Convenience used by CLI wrappers where no explicit base exists:
/// tilde-expands, anchors to the current directory, and removes dot
/// components lexically.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or any
/// of the steps above fails.
///
/// # Examples
///
/// ```no_run
/// use filestage::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./staging")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;

    let absolute = absolutize(path, &cwd)?;
    resolve_components(&absolute)
}
