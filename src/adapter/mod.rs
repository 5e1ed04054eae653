//! Implementations of ports (hexagonal adapters) and the CLI surface.

pub mod cli;
pub mod sqlite;
