//! create-database - builds the file table SQLite database.
//!
//! The crate creates a single-table database (`filetable`) that maps the MD5
//! hash of a file path to the path, an entropy value and a set of flags. A
//! run recreates the database file, creates the schema, inserts and deletes a
//! fixture row to verify the table works, and optionally copies the file to an
//! output directory.
//!
//! # Modules
//!
//! - [`domain`] - File records, their flag set and path digests
//! - [`port`] - The [`port::FileStore`] persistence trait
//! - [`adapter`] - SQLite store (Diesel) and CLI definitions (clap)
//! - [`app`] - The initialization sequence
//! - [`config`] - Configuration loading and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use create_database::app::Initializer;
//!
//! let report = Initializer::new("eraser.db", "/tmp/out").run()?;
//! assert!(report.copy.is_some());
//! # Ok::<(), create_database::error::Error>(())
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
