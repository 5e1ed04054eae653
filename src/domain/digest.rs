//! Path digests used as file table keys.

use md5::{Digest, Md5};

/// Lowercase hex MD5 digest of the UTF-8 bytes of `path`.
///
/// ```
/// use create_database::domain::digest::path_hash;
///
/// assert_eq!(path_hash("C:/Temp/my.dll"), "3e9bece9e035444dadd4b13839a29e53");
/// ```
#[must_use]
pub fn path_hash(path: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize())
}
