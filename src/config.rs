//! Configuration loading and logging setup.
//!
//! Configuration is optional: every field has a default, a TOML file may
//! override them, and command-line flags override the file. `RUST_LOG`
//! takes precedence over the configured log level.

use serde::Deserialize;
use std::path::Path;
use tracing::Dispatch;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Log output formats accepted in `logging.format`.
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("unknown format '{}'", self.logging.format),
            }
            .into());
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: e.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl LoggingConfig {
    /// Apply `-v`/`-q` flags. Zero verbosity without quiet keeps the configured level.
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => "error",
            (false, 0) => return self,
            (false, 1) => "debug",
            (false, _) => "trace",
        };
        self.level = level.into();
        self
    }

    /// Build the subscriber for this configuration.
    ///
    /// The caller decides its scope, typically with
    /// [`tracing::dispatcher::set_default`] held for the life of `main`.
    #[must_use]
    pub fn dispatch(&self) -> Dispatch {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => Dispatch::new(fmt().json().with_env_filter(filter).finish()),
            _ => Dispatch::new(fmt().with_env_filter(filter).finish()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
