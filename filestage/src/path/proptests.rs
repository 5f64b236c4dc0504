//! Property-based tests for path handling.
//!
//! Note: dest.rs carries its own property tests for the destination
//! mapping. This module focuses on lexical normalization and the virtual
//! path computation.

use super::normalize::resolve_components;
use super::resolver::PathResolver;
use proptest::prelude::*;
use std::path::{Path, PathBuf};

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

// Paths that may contain "." and ".." segments mixed in
fn dotty_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(
        prop_oneof![
            path_component_strategy(),
            Just(".".to_string()),
            Just("..".to_string()),
        ],
        1..8,
    )
    .prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Component resolution is idempotent, and never fails on an
    // absolute path (".." at the root is absorbed)
    #[test]
    fn resolve_components_idempotent(path in dotty_path_strategy()) {
        let once = resolve_components(&path).unwrap();
        let twice = resolve_components(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Resolved paths never contain "." or ".." components
    #[test]
    fn resolved_paths_are_dot_free(path in dotty_path_strategy()) {
        let resolved = resolve_components(&path).unwrap();
        for component in resolved.components() {
            let c = component.as_os_str();
            prop_assert!(c != "." && c != "..");
        }
    }

    // Resolution of an already-clean path changes nothing
    #[test]
    fn resolve_components_preserves_clean_paths(path in absolute_path_strategy()) {
        prop_assert_eq!(resolve_components(&path).unwrap(), path);
    }

    // Virtual paths are always absolute and dot-free, regardless of input
    #[test]
    fn virtual_paths_absolute_and_dot_free(path in dotty_path_strategy()) {
        let resolver = PathResolver::new(PathBuf::from("/base")).unwrap();
        let vpath = resolver.virtual_path(&path).unwrap();
        prop_assert!(vpath.is_absolute());
        for component in vpath.components() {
            let c = component.as_os_str();
            prop_assert!(c != "." && c != "..");
        }
    }

    // The virtual path computation is pure: same input, same output
    #[test]
    fn virtual_path_deterministic(path in dotty_path_strategy()) {
        let resolver = PathResolver::new(PathBuf::from("/base")).unwrap();
        let a = resolver.virtual_path(&path);
        let b = resolver.virtual_path(&path);
        match (a, b) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "determinism violated"),
        }
    }

    // Relative submissions always land under the base
    #[test]
    fn relative_virtual_paths_start_with_base(parts in prop::collection::vec(path_component_strategy(), 1..6)) {
        let resolver = PathResolver::new(PathBuf::from("/base")).unwrap();
        let rel: PathBuf = parts.iter().collect();
        let vpath = resolver.virtual_path(Path::new(&rel)).unwrap();
        prop_assert!(vpath.starts_with("/base"));
    }
}
