//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! - [`FileStore`] - Persistence for the file table

mod store;

pub use store::FileStore;
