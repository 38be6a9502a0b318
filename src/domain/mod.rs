//! Domain models for vol
//!
//! Types are validated on construction (fail-fast pattern).

pub mod command;
pub mod volume;

pub use command::Command;
pub use volume::{Step, Volume, VolumePolicy, DEFAULT_STEP, MAX_VOLUME, MIN_VOLUME};
