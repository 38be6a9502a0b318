//! Scripting bridge abstraction layer
//!
//! Provides trait-based abstractions over the external volume script for
//! testability.

pub mod script;
pub mod traits;

pub use script::{parse_volume_output, ScriptBridge};
pub use traits::VolumeBridge;
