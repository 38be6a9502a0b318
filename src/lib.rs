//! vol - system output volume library
//!
//! This library reads and adjusts the system audio output volume by running
//! a platform scripting bridge (`osascript` by default).
//!
//! # Modules
//!
//! - [`bridge`]: Scripting bridge abstraction layer
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`services`]: Volume arithmetic and bridge calls

pub mod bridge;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
