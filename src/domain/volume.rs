//! Volume domain types
//!
//! Provides the validated output volume percentage and the policy used to
//! turn an arbitrary target into one the bridge will accept.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest output volume
pub const MIN_VOLUME: u8 = 0;

/// Highest output volume
pub const MAX_VOLUME: u8 = 100;

/// Step used by bare `+` / `-` and by quantization
pub const DEFAULT_STEP: u8 = 5;

/// Output volume as a percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Volume(u8);

impl Volume {
    /// Silent
    pub const MUTED: Self = Self(MIN_VOLUME);
    /// Full output
    pub const FULL: Self = Self(MAX_VOLUME);

    /// Create a new volume with validation
    pub fn new(percent: u8) -> Result<Self, DomainError> {
        if percent > MAX_VOLUME {
            return Err(DomainError::InvalidVolume(percent));
        }
        Ok(Self(percent))
    }

    /// Create a volume from any integer, saturating at the range ends
    pub fn saturating_from(raw: i64) -> Self {
        Self(raw.clamp(MIN_VOLUME as i64, MAX_VOLUME as i64) as u8)
    }

    /// Round down to the nearest multiple of `step`
    pub fn quantize(self, step: Step) -> Self {
        let step = step.get();
        Self(self.0 / step * step)
    }

    /// Get the volume as a percentage
    #[inline]
    pub const fn as_percentage(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Volume {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl From<Volume> for i64 {
    fn from(volume: Volume) -> Self {
        volume.0 as i64
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed adjustment step (1-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Step(u8);

impl Step {
    /// Create a new step with validation
    pub fn new(step: u8) -> Result<Self, DomainError> {
        if step == 0 || step > MAX_VOLUME {
            return Err(DomainError::InvalidStep(step));
        }
        Ok(Self(step))
    }

    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self(DEFAULT_STEP)
    }
}

impl TryFrom<u8> for Step {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.0
    }
}

/// How a requested target is turned into the volume that gets applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumePolicy {
    /// Step for bare `+` / `-` and quantization granularity
    pub step: Step,
    /// Round targets down to a multiple of `step`
    pub quantize: bool,
}

impl VolumePolicy {
    pub fn new(step: Step, quantize: bool) -> Self {
        Self { step, quantize }
    }

    /// Resolve a raw target into the volume to apply
    pub fn resolve(&self, target: i64) -> Resolved {
        let clamped = Volume::saturating_from(target);
        let volume = if self.quantize {
            clamped.quantize(self.step)
        } else {
            clamped
        };

        Resolved {
            requested: target,
            clamped,
            volume,
        }
    }
}

/// Result of applying a [`VolumePolicy`] to a raw target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Target as computed from the command
    pub requested: i64,
    /// Target after clamping to 0-100
    pub clamped: Volume,
    /// Final volume after optional quantization
    pub volume: Volume,
}

impl Resolved {
    /// True if the requested target was outside 0-100
    pub fn was_clamped(&self) -> bool {
        i64::from(self.clamped) != self.requested
    }

    /// True if quantization lowered the clamped value
    pub fn was_rounded(&self) -> bool {
        self.volume != self.clamped
    }
}
