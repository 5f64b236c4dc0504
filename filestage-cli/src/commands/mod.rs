//! CLI command implementations.
//!
//! - `collect`: copy files into a staging root and emit the mapping table
//! - `completions`: generate shell completion scripts

pub mod collect;
pub mod completions;

pub use collect::CollectCommand;
pub use completions::CompletionsCommand;
