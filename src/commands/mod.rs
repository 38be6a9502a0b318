//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod volume;

pub use volume::{run_cli, run_volume};
