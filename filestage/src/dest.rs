//! Destination mapping inside the staging root.
//!
//! The staged copy of a file lives at `root + canonical source path`: the
//! source's absolute path, stripped of its root separator (and drive
//! designator on Windows), is appended to the staging root as a relative
//! suffix. The mapping is a pure function of its two inputs, so distinct
//! canonical sources never collide and recomputing it is idempotent.

use std::path::{Component, Path, PathBuf};

/// Compute the staged destination for a canonical source path.
///
/// # Examples
///
/// ```
/// use filestage::stage_path;
/// use std::path::{Path, PathBuf};
///
/// let dest = stage_path(Path::new("/stage"), Path::new("/usr/include/stdio.h"));
/// assert_eq!(dest, PathBuf::from("/stage/usr/include/stdio.h"));
/// ```
#[must_use]
pub fn stage_path(root: &Path, canonical: &Path) -> PathBuf {
    let mut dest = root.to_path_buf();
    for component in canonical.components() {
        match component {
            // Drop the leading separator and any drive designator so the
            // source hierarchy nests under the root.
            Component::RootDir | Component::Prefix(_) => {}
            _ => dest.push(component),
        }
    }
    dest
}
