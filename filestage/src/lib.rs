#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # filestage
//!
//! A library for collecting the files an external process touched into a
//! minimal, self-contained staging tree.
//!
//! A [`FileCollector`] accumulates submitted paths cheaply via
//! [`FileCollector::add_file`], then a single [`FileCollector::copy_files`]
//! call resolves each path to its real filesystem location (collapsing
//! symlinks and `..` components), copies it under the staging root while
//! mirroring its original directory hierarchy, and records a
//! (virtual path, staged path) entry in the mapping table. A later consumer
//! can serialize the mapping and re-run the process elsewhere against the
//! copies alone.
//!
//! ## Core Types
//!
//! - [`FileCollector`]: the collection session orchestrator
//! - [`VfsEntry`] and [`MappingTable`]: virtual-to-real path mapping
//! - [`PathResolver`]: symlink-aware path resolution with a directory cache
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use filestage::FileCollector;
//! use std::path::PathBuf;
//!
//! let root = PathBuf::from("/tmp/reproducer");
//! let mut collector = FileCollector::new(root.clone(), root).unwrap();
//!
//! // Cheap bookkeeping; no I/O happens here.
//! collector.add_file("/usr/include/stdio.h");
//! collector.add_file("/usr/include/stdlib.h");
//!
//! // Resolve, copy, and build the mapping table in one pass.
//! collector.copy_files(true).unwrap();
//!
//! for entry in collector.mappings() {
//!     println!("{} -> {}", entry.virtual_path.display(), entry.real_path.display());
//! }
//! ```

pub mod collector;
pub mod dest;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod path;

// Re-export key types at crate root for convenience
pub use collector::FileCollector;
pub use dest::stage_path;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use mapping::{MappingTable, VfsEntry};
pub use path::PathResolver;
