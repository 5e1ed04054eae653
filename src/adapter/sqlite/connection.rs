//! Database connection management using Diesel ORM.
//!
//! Opens single SQLite connections and creates the file table schema.
//! There is no migration support: the schema is created idempotently.

use std::path::{Component, Path};

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::error::{Error, Result};

/// Schema of the file table.
pub const CREATE_FILE_TABLE: &str = "CREATE TABLE IF NOT EXISTS filetable(\
    hash TEXT PRIMARY KEY,\
    filename TEXT NOT NULL,\
    entropy REAL NOT NULL,\
    flags INT8 NOT NULL)";

/// Database URL for a file path, as accepted by [`establish`].
///
/// SQLite is opened with URI filenames enabled, so a bare relative name
/// such as `file:x.db` is anchored at `./` to keep it a literal filename.
///
/// # Errors
/// Returns an error if the path is not valid UTF-8.
pub fn database_url(path: &Path) -> Result<String> {
    let anchored = match path.components().next() {
        Some(Component::Normal(_)) => Path::new(".").join(path),
        _ => path.to_path_buf(),
    };
    anchored
        .into_os_string()
        .into_string()
        .map_err(|_| Error::Connection(format!("database path is not UTF-8: {path:?}")))
}

/// Open a connection, creating the database file if absent.
///
/// # Errors
/// Returns an error if SQLite cannot open the database.
pub fn establish(database_url: &str) -> Result<SqliteConnection> {
    SqliteConnection::establish(database_url).map_err(|e| Error::Connection(e.to_string()))
}

/// Configure SQLite connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000").execute(conn)?;
    Ok(())
}

/// Create the file table if it does not exist.
///
/// # Errors
/// Returns an error if the statement fails.
pub fn create_schema(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query(CREATE_FILE_TABLE).execute(conn)?;
    Ok(())
}
