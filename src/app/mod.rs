//! Application layer - the database initialization sequence.

pub mod initializer;

pub use initializer::{InitReport, Initializer};
