//! Trait definitions for volume operations
//!
//! These traits abstract over the scripting bridge to enable testing with mocks.

use crate::domain::Volume;
use crate::error::BridgeError;

/// Trait for reading and writing the system output volume
///
/// The real implementation shells out to a scripting bridge; tests use an
/// in-memory double.
pub trait VolumeBridge: Send + Sync {
    /// Read the current output volume
    ///
    /// The value is returned as reported, even if it lies outside 0-100.
    fn query(&self) -> Result<i64, BridgeError>;

    /// Set the output volume
    fn apply(&mut self, volume: Volume) -> Result<(), BridgeError>;

    /// Short name of the backend, used in log lines
    fn name(&self) -> &str;
}
