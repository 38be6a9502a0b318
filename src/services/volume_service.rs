//! Volume service
//!
//! Reads the current volume and applies new targets through a bridge,
//! clamping and quantizing on the way.

use crate::bridge::VolumeBridge;
use crate::domain::{Command, Volume, VolumePolicy, MAX_VOLUME, MIN_VOLUME};
use crate::error::BridgeError;

/// What a command did to the volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeChange {
    /// Volume read before the change
    pub previous: i64,
    /// Volume that was (or in dry-run mode would have been) applied
    pub volume: Volume,
}

/// Service for reading and changing the output volume
pub struct VolumeService {
    policy: VolumePolicy,
    dry_run: bool,
}

impl VolumeService {
    /// Create a new volume service
    pub fn new(policy: VolumePolicy, dry_run: bool) -> Self {
        Self { policy, dry_run }
    }

    /// Read the current volume
    pub fn current<B: VolumeBridge>(&self, bridge: &B) -> Result<i64, BridgeError> {
        let current = bridge.query()?;
        log::debug!("current volume from {}: {}", bridge.name(), current);
        Ok(current)
    }

    /// Clamp, optionally quantize, and apply a target volume
    pub fn set<B: VolumeBridge>(&self, bridge: &mut B, target: i64) -> Result<Volume, BridgeError> {
        let resolved = self.policy.resolve(target);

        if resolved.was_clamped() {
            let bound = if target < MIN_VOLUME as i64 {
                MIN_VOLUME
            } else {
                MAX_VOLUME
            };
            log::warn!(
                "volume {} out of range {}-{}, adjusting to {}",
                target,
                MIN_VOLUME,
                MAX_VOLUME,
                bound
            );
        }

        if resolved.was_rounded() {
            log::warn!(
                "volume {} is not a multiple of {}, rounding down to {}",
                resolved.clamped,
                self.policy.step.get(),
                resolved.volume
            );
        }

        let volume = resolved.volume;

        if self.dry_run {
            log::info!("DRY RUN: would set volume to {}", volume);
            return Ok(volume);
        }

        log::info!("setting volume to {}", volume);
        bridge.apply(volume)?;

        Ok(volume)
    }

    /// Run a mutating command: read the current volume, then apply the target
    ///
    /// Returns `Ok(None)` for [`Command::ShowCurrent`].
    pub fn execute<B: VolumeBridge>(
        &self,
        bridge: &mut B,
        command: Command,
    ) -> Result<Option<VolumeChange>, BridgeError> {
        if !command.is_mutation() {
            return Ok(None);
        }

        let previous = self.current(bridge)?;
        let Some(target) = command.target(previous) else {
            return Ok(None);
        };
        log::debug!("{}: {} => {}", command, previous, target);

        let volume = self.set(bridge, target)?;
        Ok(Some(VolumeChange { previous, volume }))
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}
