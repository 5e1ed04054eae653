//! Persistence port for the file table.

use crate::domain::file::FileRecord;
use crate::error::Result;

/// Storage operations for tracked files, keyed by path hash.
///
/// Every mutating call commits before returning.
pub trait FileStore {
    /// Insert a record. Fails if a record with the same hash exists.
    fn insert(&mut self, record: &FileRecord) -> Result<()>;

    /// Delete a record by hash. Returns whether a row was removed.
    fn remove(&mut self, hash: &str) -> Result<bool>;

    /// Overwrite the entropy of a record. Returns whether a row was updated.
    fn update_entropy(&mut self, hash: &str, entropy: f64) -> Result<bool>;

    /// Read every record in the table.
    fn list(&mut self) -> Result<Vec<FileRecord>>;

    /// Number of records, counted from a full read of the table.
    fn count(&mut self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    /// Delete records the user added (flags `0` or `2`). Returns count deleted.
    fn clean_user_files(&mut self) -> Result<usize>;

    /// Drop the table with all records.
    fn drop_table(&mut self) -> Result<()>;
}
