//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::domain::{Step, VolumePolicy, DEFAULT_STEP};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Volume arithmetic settings
    pub volume: VolumeConfig,
    /// Scripting bridge settings
    pub bridge: BridgeConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Dry run mode
    pub dry_run: bool,
}

/// Volume arithmetic configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Step for bare `+` / `-` and quantization
    pub step: u8,
    /// Round targets down to a multiple of `step`
    pub quantize: bool,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            quantize: false,
        }
    }
}

impl VolumeConfig {
    /// Convert to a VolumePolicy domain object
    pub fn to_policy(&self) -> Result<VolumePolicy, DomainError> {
        Ok(VolumePolicy::new(Step::new(self.step)?, self.quantize))
    }
}

/// Scripting bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Program to run
    pub program: String,
    /// Arguments placed before the script
    pub args: Vec<String>,
    /// Script printing the current output volume
    pub query_script: String,
    /// Script setting the output volume; `{volume}` is replaced by the target
    pub set_script: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            program: "osascript".to_string(),
            args: vec!["-e".to_string()],
            query_script: "output volume of (get volume settings)".to_string(),
            set_script: "set volume output volume {volume}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.general.verbose);
        assert_eq!(config.volume.step, 5);
        assert!(!config.volume.quantize);
        assert_eq!(config.bridge.program, "osascript");
    }

    #[test]
    fn test_volume_config_to_policy() {
        let config = VolumeConfig {
            step: 10,
            quantize: true,
        };
        let policy = config.to_policy().unwrap();
        assert_eq!(policy.step.get(), 10);
        assert!(policy.quantize);

        let bad = VolumeConfig {
            step: 0,
            quantize: false,
        };
        assert_eq!(bad.to_policy(), Err(DomainError::InvalidStep(0)));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [volume]
            quantize = true

            [bridge]
            program = "/usr/bin/osascript"
            "#,
        )
        .unwrap();

        assert!(config.volume.quantize);
        assert_eq!(config.volume.step, 5);
        assert_eq!(config.bridge.program, "/usr/bin/osascript");
        assert_eq!(config.bridge.args, vec!["-e".to_string()]);
    }
}
