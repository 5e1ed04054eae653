//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::filetable;
use crate::domain::file::{FileProperties, FileRecord};

/// Database row for a tracked file.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = filetable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FileRow {
    pub hash: String,
    pub filename: String,
    pub entropy: f64,
    pub flags: i64,
}

impl From<&FileRecord> for FileRow {
    fn from(record: &FileRecord) -> Self {
        Self {
            hash: record.hash.clone(),
            filename: record.filename.clone(),
            entropy: record.entropy,
            flags: record.properties.bits(),
        }
    }
}

impl From<FileRow> for FileRecord {
    fn from(row: FileRow) -> Self {
        Self {
            hash: row.hash,
            filename: row.filename,
            entropy: row.entropy,
            properties: FileProperties::from_bits(row.flags),
        }
    }
}
