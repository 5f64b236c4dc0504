//! Path handling: normalization, canonicalization, and cached resolution.
//!
//! Every path submitted to a collector exists in two forms:
//!
//! - The **virtual path** is the path as the producing process referenced
//!   it: made absolute and lexically stripped of `.`/`..` components, but
//!   with symlinks preserved. This is the key under which the file appears
//!   in the mapping table.
//! - The **real path** is the symlink-free location of the file on the
//!   underlying filesystem, obtained with POSIX `realpath` semantics. The
//!   staged copy mirrors this path, so two virtual spellings of the same
//!   file always share one copy.
//!
//! The distinction matters for `..`: `dir/symlink/../sibling` must resolve
//! according to `symlink`'s real target, not lexically, so the real form is
//! computed by resolving the *real parent* of each entry
//! ([`resolver::PathResolver::real_path`]) rather than by component
//! shuffling.
//!
//! # Examples
//!
//! ```no_run
//! use filestage::path::PathResolver;
//! use std::path::{Path, PathBuf};
//!
//! let mut resolver = PathResolver::new(PathBuf::from("/work")).unwrap();
//!
//! // Virtual form: absolute and dot-free, symlinks untouched.
//! let vpath = resolver.virtual_path(Path::new("include/../lib/libc.so")).unwrap();
//! assert_eq!(vpath, PathBuf::from("/work/lib/libc.so"));
//!
//! // Real form: parent directory resolved through the symlink cache.
//! let rpath = resolver.real_path(Path::new("lib/libc.so")).unwrap();
//! assert!(rpath.is_absolute());
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::PathResolver;
