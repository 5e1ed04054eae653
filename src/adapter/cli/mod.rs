//! CLI module graph.

pub mod command;
