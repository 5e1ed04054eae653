//! SQLite file table store.
//!
//! Provides persistent storage for tracked files using SQLite and Diesel ORM.
//! All statements bind their values; nothing is formatted into SQL text.

use diesel::prelude::*;
use diesel::SqliteConnection;

use super::model::FileRow;
use super::schema::filetable;
use crate::domain::file::FileRecord;
use crate::error::{Error, Result};
use crate::port::FileStore;

/// SQLite-backed file store.
///
/// Owns its connection; dropping the store closes the database.
pub struct SqliteFileStore {
    conn: SqliteConnection,
}

impl SqliteFileStore {
    /// Wrap a connection whose schema has already been created.
    #[must_use]
    pub fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }
}

impl FileStore for SqliteFileStore {
    fn insert(&mut self, record: &FileRecord) -> Result<()> {
        let row = FileRow::from(record);
        self.conn.transaction::<_, Error, _>(|conn| {
            diesel::insert_into(filetable::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
    }

    fn remove(&mut self, hash: &str) -> Result<bool> {
        let removed = self.conn.transaction::<_, Error, _>(|conn| {
            let target = filetable::table.filter(filetable::hash.eq(hash));
            Ok(diesel::delete(target).execute(conn)?)
        })?;
        Ok(removed > 0)
    }

    fn update_entropy(&mut self, hash: &str, entropy: f64) -> Result<bool> {
        let updated = diesel::update(filetable::table.filter(filetable::hash.eq(hash)))
            .set(filetable::entropy.eq(entropy))
            .execute(&mut self.conn)?;
        Ok(updated > 0)
    }

    fn list(&mut self) -> Result<Vec<FileRecord>> {
        let rows: Vec<FileRow> = filetable::table
            .select(FileRow::as_select())
            .order(filetable::hash.asc())
            .load(&mut self.conn)?;
        Ok(rows.into_iter().map(FileRecord::from).collect())
    }

    fn clean_user_files(&mut self) -> Result<usize> {
        // User-added files never carry SYSTEM_ADDED.
        let user_added = filetable::table.filter(filetable::flags.eq_any(vec![0_i64, 2]));
        Ok(diesel::delete(user_added).execute(&mut self.conn)?)
    }

    fn drop_table(&mut self) -> Result<()> {
        diesel::sql_query("DROP TABLE filetable").execute(&mut self.conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::sqlite::connection::{create_schema, establish};
    use crate::domain::file::FileProperties;

    fn setup_store() -> SqliteFileStore {
        let mut conn = establish(":memory:").unwrap();
        create_schema(&mut conn).unwrap();
        SqliteFileStore::new(conn)
    }

    fn record(path: &str, flags: i64) -> FileRecord {
        FileRecord::new(path, -1.0, FileProperties::from_bits(flags))
    }

    #[test]
    fn insert_then_list_returns_record() {
        let mut store = setup_store();
        let rec = FileRecord::new("C:/Temp/my.dll", 6.14, FileProperties::default());

        store.insert(&rec).unwrap();

        assert_eq!(store.list().unwrap(), vec![rec]);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn flags_wider_than_a_byte_round_trip() {
        let mut store = setup_store();
        let rec = record("/tmp/wide", 0x1_0000_0102);

        store.insert(&rec).unwrap();

        assert_eq!(store.list().unwrap()[0].properties.bits(), 0x1_0000_0102);
    }

    #[test]
    fn insert_duplicate_hash_fails() {
        let mut store = setup_store();
        let rec = record("/home/user/a.txt", 0);

        store.insert(&rec).unwrap();
        let err = store.insert(&rec).unwrap_err();

        assert!(matches!(err, Error::Database(_)));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn quotes_in_values_are_stored_verbatim() {
        let mut store = setup_store();
        let rec = record("C:/Users/O'Brien/it's \"here\".txt", 0);

        store.insert(&rec).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed[0].filename, "C:/Users/O'Brien/it's \"here\".txt");
        assert!(store.remove(&rec.hash).unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn remove_reports_whether_row_existed() {
        let mut store = setup_store();
        let rec = record("/tmp/b", 0);
        store.insert(&rec).unwrap();

        assert!(store.remove(&rec.hash).unwrap());
        assert!(!store.remove(&rec.hash).unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn remove_with_injection_text_touches_nothing() {
        let mut store = setup_store();
        store.insert(&record("/tmp/c", 0)).unwrap();

        assert!(!store.remove("' OR '1'='1").unwrap());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn update_entropy_changes_only_target() {
        let mut store = setup_store();
        let a = record("/tmp/a", 0);
        let b = record("/tmp/b", 0);
        store.insert(&a).unwrap();
        store.insert(&b).unwrap();

        assert!(store.update_entropy(&a.hash, 7.5).unwrap());
        assert!(!store.update_entropy("missing", 1.0).unwrap());

        let listed = store.list().unwrap();
        let entropy_of = |hash: &str| {
            listed
                .iter()
                .find(|r| r.hash == hash)
                .map(|r| r.entropy)
                .unwrap()
        };
        assert_eq!(entropy_of(&a.hash), 7.5);
        assert_eq!(entropy_of(&b.hash), -1.0);
    }

    #[test]
    fn clean_user_files_keeps_system_added() {
        let mut store = setup_store();
        store.insert(&record("/user/plain", 0)).unwrap();
        store
            .insert(&record("/user/file", FileProperties::IS_FILE))
            .unwrap();
        store
            .insert(&record("/sys/plain", FileProperties::SYSTEM_ADDED))
            .unwrap();
        store
            .insert(&record(
                "/sys/file",
                FileProperties::SYSTEM_ADDED | FileProperties::IS_FILE,
            ))
            .unwrap();

        assert_eq!(store.clean_user_files().unwrap(), 2);

        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|r| r.properties.is_system_added()));
    }

    #[test]
    fn drop_table_removes_schema() {
        let mut store = setup_store();
        store.insert(&record("/tmp/d", 0)).unwrap();

        store.drop_table().unwrap();

        assert!(matches!(store.list(), Err(Error::Database(_))));
    }
}
