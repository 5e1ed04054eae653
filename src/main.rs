use std::process::ExitCode;

use clap::Parser;
use create_database::adapter::cli::command::Cli;
use create_database::app::Initializer;
use create_database::config::Config;
use tracing::{error, info};

/// Exit code for any failure after arguments were parsed.
const EXIT_FAILURE: u8 = 3;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                return ExitCode::from(EXIT_FAILURE);
            }
        },
        None => Config::default(),
    };

    let dispatch = cli.logging(config.logging).dispatch();
    let _log_guard = tracing::dispatcher::set_default(&dispatch);

    match Initializer::new(&cli.db_name, &cli.output_dir).run() {
        Ok(report) => {
            info!(database = %report.database.display(), "Database created");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Error while creating database");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
