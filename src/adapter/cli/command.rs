//! Command-line interface definitions.
//!
//! Defines the CLI structure for create-database using `clap`.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{LoggingConfig, LOG_FORMATS};

/// Create the file table database and verify it with an insert/delete self-test
#[derive(Parser, Debug)]
#[command(name = "create-database")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Generated database name
    #[arg(long = "db-name", value_name = "PATH")]
    pub db_name: PathBuf,

    /// Directory where to put a copy of the database
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to a TOML configuration file with a [logging] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_parser = LOG_FORMATS)]
    pub log_format: Option<String>,

    /// Decrease log verbosity to errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merge logging flags over a configured base.
    #[must_use]
    pub fn logging(&self, base: LoggingConfig) -> LoggingConfig {
        let mut logging = base.with_verbosity(self.verbose, self.quiet);
        if let Some(format) = &self.log_format {
            logging.format.clone_from(format);
        }
        logging
    }
}
