//! Command to collect files into a staging root.
//!
//! This is the serialization collaborator of the core: it feeds submitted
//! paths into a `FileCollector`, runs the copy batch, and emits the
//! resulting mapping table as YAML or JSON.

use crate::error::CliError;
use crate::utils::{normalize_path, resolve_path, GlobalOptions};
use clap::{Args, ValueEnum};
use filestage::{init_logger, FileCollector};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Serialization format for the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MappingFormat {
    /// YAML overlay description (default).
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Copy files into a staging root and print the mapping.
#[derive(Args)]
pub struct CollectCommand {
    /// Staging root the copies are placed under
    #[arg(long, value_name = "DIR", env = "FILESTAGE_ROOT")]
    pub root: PathBuf,

    /// Base directory for anchoring relative paths (defaults to the
    /// current directory)
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Files to collect
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Read additional newline-separated paths from a file ("-" for stdin)
    #[arg(long, value_name = "LIST")]
    pub from_file: Option<PathBuf>,

    /// Continue past per-file failures instead of aborting the batch
    #[arg(long)]
    pub keep_going: bool,

    /// Output format for the mapping table
    #[arg(long, value_enum, default_value_t = MappingFormat::Yaml)]
    pub format: MappingFormat,

    /// Write the mapping to a file instead of stdout
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CollectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let root = normalize_path(&self.root)?;
        let base = resolve_path(self.base.clone())?;

        let mut collector = FileCollector::new(root, base)?;

        let listed = self.read_list_file()?;
        if self.files.is_empty() && listed.is_empty() {
            return Err(CliError::InvalidArguments(
                "no files to collect (pass FILE arguments or --from-file)".to_string(),
            ));
        }

        for file in &self.files {
            collector.add_file(file);
        }
        for file in listed {
            collector.add_file(file);
        }

        collector.copy_files(!self.keep_going)?;

        for (path, err) in collector.skipped() {
            logger.warn(&format!("skipped {}: {err}", path.display()));
        }

        let serialized = match self.format {
            MappingFormat::Yaml => serde_yaml::to_string(collector.mappings())
                .map_err(|e| CliError::Serialize(e.to_string()))?,
            MappingFormat::Json => serde_json::to_string_pretty(collector.mappings())
                .map_err(|e| CliError::Serialize(e.to_string()))?,
        };

        match &self.output {
            Some(path) => fs::write(path, serialized)?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(serialized.as_bytes())?;
                if !serialized.ends_with('\n') {
                    writeln!(stdout)?;
                }
            }
        }

        Ok(())
    }

    /// Read the optional newline-separated path list ("-" means stdin).
    fn read_list_file(&self) -> Result<Vec<PathBuf>, CliError> {
        let list = match &self.from_file {
            Some(list) => list,
            None => return Ok(Vec::new()),
        };

        let contents = if list.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(list)?
        };

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}
