//! CLI interface for libstralg
//!
//! Provides command-line access to the search and distance dispatchers and
//! the integer helpers.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::execute;
