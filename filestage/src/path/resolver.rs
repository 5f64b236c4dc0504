//! Cached virtual/real path resolution.
//!
//! This module provides the `PathResolver` type, which turns submitted
//! paths into their two forms: the virtual mapping key and the real source
//! location. Directory-level `realpath` results are memoized so that many
//! entries sharing a symlinked prefix hit the filesystem only once.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::{canonicalize, normalize};

/// Resolves submitted paths relative to a fixed base directory.
///
/// The resolver owns two pieces of state for a collection session:
///
/// - the *base* directory against which relative submissions are anchored;
/// - the *symlink resolution cache*, a map from an input directory path to
///   its resolved real directory. The cache is append-only and is never
///   invalidated; the session assumes a stable filesystem.
///
/// # Examples
///
/// ```no_run
/// use filestage::path::PathResolver;
/// use std::path::{Path, PathBuf};
///
/// let mut resolver = PathResolver::new(PathBuf::from("/work")).unwrap();
///
/// let vpath = resolver.virtual_path(Path::new("src/../README")).unwrap();
/// assert_eq!(vpath, PathBuf::from("/work/README"));
///
/// // Hits the filesystem; repeated lookups under /work/src are cached.
/// let rpath = resolver.real_path(Path::new("src/main.c")).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Base directory for anchoring relative submissions.
    base: PathBuf,
    /// Resolved real directory per input directory path.
    dir_cache: HashMap<PathBuf, PathBuf>,
}

impl PathResolver {
    /// Create a resolver anchored at `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not absolute.
    pub fn new(base: PathBuf) -> Result<Self> {
        if !base.is_absolute() {
            return Err(Error::InvalidPath {
                path: base,
                reason: "Canonicalization base must be absolute".to_string(),
            });
        }
        Ok(Self {
            base,
            dir_cache: HashMap::new(),
        })
    }

    /// The base directory relative submissions are anchored to.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Number of directories currently held in the symlink cache.
    #[must_use]
    pub fn cached_dirs(&self) -> usize {
        self.dir_cache.len()
    }

    /// Compute the virtual form of a submitted path.
    ///
    /// The result is absolute and lexically free of `.`/`..` components,
    /// with symlinks preserved. This is a pure computation; the path need
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be anchored (invalid UTF-8 in a
    /// tilde path); `..` at the root is absorbed rather than rejected.
    pub fn virtual_path(&self, path: &Path) -> Result<PathBuf> {
        let absolute = normalize::absolutize(path, &self.base)?;
        normalize::resolve_components(&absolute)
    }

    /// Resolve a submitted path to its real source location.
    ///
    /// The parent directory of the anchored path is resolved to its real
    /// form (through the cache), and the final component is re-appended.
    /// `..` components therefore collapse against the real parent, so
    /// `dir/symlink/../sibling` lands where `symlink`'s target dictates.
    /// A final component that is itself a symlink is left unresolved; the
    /// copy engine reads through it.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory on the way to the real parent
    /// does not exist or cannot be accessed.
    pub fn real_path(&mut self, path: &Path) -> Result<PathBuf> {
        let absolute = normalize::absolutize(path, &self.base)?;

        let (parent, name) = match (absolute.parent(), absolute.file_name()) {
            (Some(parent), Some(name)) => (parent.to_path_buf(), name.to_os_string()),
            // Root, or a path ending in "..": no usable split, resolve whole.
            _ => return canonicalize::canonicalize(&absolute),
        };

        let real_parent = self.real_dir(&parent)?;
        Ok(real_parent.join(name))
    }

    /// Resolve a directory through the cache, keyed by the input path.
    fn real_dir(&mut self, dir: &Path) -> Result<PathBuf> {
        if let Some(cached) = self.dir_cache.get(dir) {
            return Ok(cached.clone());
        }

        let resolved = canonicalize::canonicalize(dir)?;
        self.dir_cache.insert(dir.to_path_buf(), resolved.clone());
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn real_tempdir() -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let real = fs::canonicalize(dir.path()).unwrap();
        (dir, real)
    }

    #[test]
    fn test_new_rejects_relative_base() {
        let result = PathResolver::new(PathBuf::from("relative/base"));
        assert!(result.is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_virtual_path_anchors_relative() {
        let resolver = PathResolver::new(PathBuf::from("/work")).unwrap();
        let vpath = resolver.virtual_path(Path::new("src/lib.rs")).unwrap();
        assert_eq!(vpath, PathBuf::from("/work/src/lib.rs"));
    }

    #[test]
    #[cfg(unix)]
    fn test_virtual_path_removes_dots_lexically() {
        let resolver = PathResolver::new(PathBuf::from("/work")).unwrap();
        let vpath = resolver.virtual_path(Path::new("/a/b/../c/./d")).unwrap();
        assert_eq!(vpath, PathBuf::from("/a/c/d"));
    }

    #[test]
    #[cfg(unix)]
    fn test_virtual_path_absorbs_dotdot_at_root() {
        let resolver = PathResolver::new(PathBuf::from("/work")).unwrap();
        let vpath = resolver.virtual_path(Path::new("/../etc/hosts")).unwrap();
        assert_eq!(vpath, PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn test_real_path_existing_file() {
        let (_guard, root) = real_tempdir();
        let file = root.join("aaa");
        fs::write(&file, "aaa").unwrap();

        let mut resolver = PathResolver::new(root.clone()).unwrap();
        let rpath = resolver.real_path(&file).unwrap();
        assert_eq!(rpath, file);
    }

    #[test]
    fn test_real_path_missing_parent() {
        let mut resolver = PathResolver::new(PathBuf::from("/")).unwrap();
        let result = resolver.real_path(Path::new("/some/bogus/file"));
        assert!(result.is_err());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_real_path_caches_parent_dir() {
        let (_guard, root) = real_tempdir();
        fs::write(root.join("aaa"), "a").unwrap();
        fs::write(root.join("bbb"), "b").unwrap();

        let mut resolver = PathResolver::new(root.clone()).unwrap();
        resolver.real_path(&root.join("aaa")).unwrap();
        assert_eq!(resolver.cached_dirs(), 1);

        // Same parent directory: no new cache entry.
        resolver.real_path(&root.join("bbb")).unwrap();
        assert_eq!(resolver.cached_dirs(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_real_path_resolves_symlinked_parent() {
        use std::os::unix::fs::symlink;

        let (_guard, root) = real_tempdir();
        let foo = root.join("foo");
        let bar = root.join("bar");
        fs::create_dir(&foo).unwrap();
        fs::write(foo.join("ddd"), "d").unwrap();
        symlink(&foo, &bar).unwrap();

        let mut resolver = PathResolver::new(root.clone()).unwrap();
        let rpath = resolver.real_path(&bar.join("ddd")).unwrap();
        assert_eq!(rpath, foo.join("ddd"));

        // Cache key is the input directory, not the resolved one.
        assert_eq!(resolver.cached_dirs(), 1);
        let rpath_again = resolver.real_path(&bar.join("ddd")).unwrap();
        assert_eq!(rpath_again, foo.join("ddd"));
        assert_eq!(resolver.cached_dirs(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_real_path_dotdot_uses_real_parent() {
        use std::os::unix::fs::symlink;

        let (_guard, root) = real_tempdir();
        let foo = root.join("foo");
        fs::create_dir(&foo).unwrap();
        fs::write(root.join("eee"), "e").unwrap();
        symlink(&foo, root.join("bar")).unwrap();

        let mut resolver = PathResolver::new(root.clone()).unwrap();

        // foo/../eee collapses against the real parent of foo.
        let rpath = resolver.real_path(&root.join("foo/../eee")).unwrap();
        assert_eq!(rpath, root.join("eee"));

        // bar/../eee goes through the symlink target's parent, which is
        // the same directory here.
        let rpath = resolver.real_path(&root.join("bar/../eee")).unwrap();
        assert_eq!(rpath, root.join("eee"));
    }

    #[cfg(unix)]
    #[test]
    fn test_real_path_keeps_file_symlink_name() {
        use std::os::unix::fs::symlink;

        let (_guard, root) = real_tempdir();
        let target = root.join("target");
        let link = root.join("link");
        fs::write(&target, "t").unwrap();
        symlink(&target, &link).unwrap();

        // Only the parent directory is resolved; the final component is
        // re-appended as submitted.
        let mut resolver = PathResolver::new(root.clone()).unwrap();
        let rpath = resolver.real_path(&link).unwrap();
        assert_eq!(rpath, link);
    }
}
