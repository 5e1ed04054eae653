//! SQLite persistence for the file table.
//!
//! Provides connection management, the Diesel schema and model types, and
//! the [`store::SqliteFileStore`] implementation of the file store port.

pub mod connection;
pub mod model;
pub mod schema;
pub mod store;
