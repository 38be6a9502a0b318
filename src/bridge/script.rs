//! Script bridge implementation
//!
//! Runs the configured scripting program (`osascript -e <script>` by default)
//! as a blocking subprocess for each query or update.

use crate::bridge::traits::VolumeBridge;
use crate::config::BridgeConfig;
use crate::domain::Volume;
use crate::error::BridgeError;

use std::process::Command;

/// Placeholder replaced by the target volume in the set script
pub const VOLUME_PLACEHOLDER: &str = "{volume}";

/// Volume bridge backed by an external scripting program
#[derive(Debug, Clone)]
pub struct ScriptBridge {
    program: String,
    args: Vec<String>,
    query_script: String,
    set_script: String,
}

impl ScriptBridge {
    /// Create a bridge from configuration
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            query_script: config.query_script.clone(),
            set_script: config.set_script.clone(),
        }
    }

    /// Render the set script for a volume
    pub fn set_script_for(&self, volume: Volume) -> String {
        self.set_script
            .replace(VOLUME_PLACEHOLDER, &volume.to_string())
    }

    /// Run one script and return its standard output
    fn run(&self, script: &str) -> Result<String, BridgeError> {
        log::debug!("executing {} `{}`", self.program, script);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(script)
            .output()
            .map_err(|source| BridgeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BridgeError::Exited {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for ScriptBridge {
    fn default() -> Self {
        Self::new(&BridgeConfig::default())
    }
}

impl VolumeBridge for ScriptBridge {
    fn query(&self) -> Result<i64, BridgeError> {
        let out = self.run(&self.query_script)?;
        parse_volume_output(&out)
    }

    fn apply(&mut self, volume: Volume) -> Result<(), BridgeError> {
        let script = self.set_script_for(volume);
        self.run(&script)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// Parse the first integer token of the query output
///
/// Leading whitespace is skipped, an optional sign is accepted, and anything
/// after the digits is ignored.
pub fn parse_volume_output(output: &str) -> Result<i64, BridgeError> {
    let trimmed = output.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let sign_len = trimmed.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();

    if digits == 0 {
        return Err(BridgeError::Parse(output.trim().to_string()));
    }

    trimmed[..sign_len + digits]
        .parse()
        .map_err(|_| BridgeError::Parse(output.trim().to_string()))
}
