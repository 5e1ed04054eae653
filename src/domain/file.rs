//! File table entity types.
//!
//! - [`FileRecord`] - One row of the file table: path, its hash, entropy and flags
//! - [`FileProperties`] - Bit set describing how the file entered the table
//!
//! # Examples
//!
//! ```
//! use create_database::domain::file::{FileProperties, FileRecord};
//!
//! let mut props = FileProperties::default();
//! props.set_is_file(true);
//!
//! let record = FileRecord::new("/tmp/report.pdf", 7.2, props);
//! assert_eq!(record.hash.len(), 32);
//! assert!(record.properties.is_file());
//! assert!(!record.properties.is_system_added());
//! ```

use super::digest::path_hash;

/// Binary flags for a tracked file, stored as a 64-bit integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FileProperties(i64);

impl FileProperties {
    /// The file was added by an application or the OS, not by the user.
    pub const SYSTEM_ADDED: i64 = 0x01;
    /// The entry is a regular file (not a directory, symlink etc).
    pub const IS_FILE: i64 = 0x02;
    pub const RESERVED_1: i64 = 0x04;
    pub const RESERVED_2: i64 = 0x08;

    /// Wraps raw flags read from storage. Unknown bits are kept.
    #[must_use]
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    /// Raw flags for writing to storage.
    #[must_use]
    pub const fn bits(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_file(self) -> bool {
        self.0 & Self::IS_FILE != 0
    }

    #[must_use]
    pub const fn is_system_added(self) -> bool {
        self.0 & Self::SYSTEM_ADDED != 0
    }

    pub fn set_is_file(&mut self, is_file: bool) {
        self.set(Self::IS_FILE, is_file);
    }

    pub fn set_system_added(&mut self, system_added: bool) {
        self.set(Self::SYSTEM_ADDED, system_added);
    }

    fn set(&mut self, flag: i64, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }
}

/// A file tracked in the file table, keyed by the MD5 hash of its path.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Hex MD5 digest of `filename`.
    pub hash: String,
    pub filename: String,
    pub entropy: f64,
    pub properties: FileProperties,
}

impl FileRecord {
    /// Creates a record for `filename`, deriving the hash from the path.
    pub fn new(filename: impl Into<String>, entropy: f64, properties: FileProperties) -> Self {
        let filename = filename.into();
        Self {
            hash: path_hash(&filename),
            filename,
            entropy,
            properties,
        }
    }
}
