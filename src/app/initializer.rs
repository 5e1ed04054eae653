//! Database initialization sequence.
//!
//! [`Initializer::run`] recreates the database file, creates the file
//! table, runs an insert/delete self-test against it and optionally copies
//! the result to an output directory. Any failure aborts the remaining
//! steps; the connection is closed before returning on every path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::adapter::sqlite::connection::{
    configure_sqlite_connection, create_schema, database_url, establish,
};
use crate::adapter::sqlite::store::SqliteFileStore;
use crate::domain::file::{FileProperties, FileRecord};
use crate::error::{Error, Result};
use crate::port::FileStore;

/// Path hashed and inserted by the self-test.
pub const SELF_TEST_PATH: &str = "C:/Temp/my.dll";
pub const SELF_TEST_ENTROPY: f64 = 6.14;
pub const SELF_TEST_FLAGS: i64 = 0;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub database: PathBuf,
    /// Location of the copy, if one was made.
    pub copy: Option<PathBuf>,
}

/// Creates a fresh file table database.
#[derive(Debug, Clone)]
pub struct Initializer {
    db_name: PathBuf,
    output_dir: PathBuf,
}

impl Initializer {
    pub fn new(db_name: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_name: db_name.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Run the full sequence.
    ///
    /// # Errors
    /// Returns the first filesystem, database or verification error.
    pub fn run(&self) -> Result<InitReport> {
        if self.db_name.is_file() {
            info!(path = %self.db_name.display(), "Previous database present, deleting file");
            fs::remove_file(&self.db_name)?;
        }

        self.create()?;

        let copy = match copy_target(&self.db_name, &self.output_dir)? {
            Some(target) => {
                fs::copy(&self.db_name, &target)?;
                info!(
                    output_dir = %self.output_dir.display(),
                    "Database file copied"
                );
                Some(target)
            }
            None => None,
        };

        Ok(InitReport {
            database: self.db_name.clone(),
            copy,
        })
    }

    fn create(&self) -> Result<()> {
        let mut conn = establish(&database_url(&self.db_name)?)?;
        configure_sqlite_connection(&mut conn)?;
        info!(path = %self.db_name.display(), "Connected to database");

        create_schema(&mut conn)?;
        info!("Created table");

        let mut store = SqliteFileStore::new(conn);
        self_test(&mut store)
    }
}

/// Insert the fixture record, check it landed, delete it and check the
/// table is empty again.
///
/// # Errors
/// Returns [`Error::Verification`] if a row count is off.
pub fn self_test<S: FileStore>(store: &mut S) -> Result<()> {
    let record = FileRecord::new(
        SELF_TEST_PATH,
        SELF_TEST_ENTROPY,
        FileProperties::from_bits(SELF_TEST_FLAGS),
    );
    info!(hash = %record.hash, "Hash computed");

    store.insert(&record)?;
    verify_count(store, "INSERT", 1)?;
    info!("INSERT tested");

    store.remove(&record.hash)?;
    verify_count(store, "DELETE", 0)?;
    info!("DELETE tested");

    Ok(())
}

fn verify_count<S: FileStore>(store: &mut S, stage: &'static str, expected: usize) -> Result<()> {
    let actual = store.count()?;
    debug!(stage, actual, "Checked table");
    if actual != expected {
        return Err(Error::Verification {
            stage,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Where to copy `db_name`, or `None` if `output_dir` is the current
/// directory or the directory the database already lives in.
fn copy_target(db_name: &Path, output_dir: &Path) -> Result<Option<PathBuf>> {
    if output_dir == Path::new(".") {
        return Ok(None);
    }

    let target_dir = output_dir.canonicalize()?;
    let source_dir = match db_name.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.canonicalize()?,
        _ => std::env::current_dir()?.canonicalize()?,
    };
    if target_dir == std::env::current_dir()?.canonicalize()? || target_dir == source_dir {
        info!(
            output_dir = %output_dir.display(),
            "Output directory holds the database, skipping copy"
        );
        return Ok(None);
    }

    let file_name = db_name.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("database path has no file name: {}", db_name.display()),
        )
    })?;
    Ok(Some(output_dir.join(file_name)))
}
