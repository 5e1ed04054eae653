//! Storage-agnostic file table types.

pub mod digest;
pub mod file;
