//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// locations are searched and a missing file is not an error.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI dry-run flag
    pub fn with_dry_run(mut self, dry_run: Option<bool>) -> Self {
        if let Some(d) = dry_run {
            self.config.general.dry_run = d;
        }
        self
    }

    /// Override with CLI step
    pub fn with_step(mut self, step: Option<u8>) -> Self {
        if let Some(s) = step {
            self.config.volume.step = s;
        }
        self
    }

    /// Override with CLI quantize flag
    pub fn with_quantize(mut self, quantize: Option<bool>) -> Self {
        if let Some(q) = quantize {
            self.config.volume.quantize = q;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Err(e) = self.config.volume.to_policy() {
            return Err(ConfigError::InvalidValue {
                key: "volume.step".to_string(),
                message: e.to_string(),
            });
        }
        if self.config.bridge.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "bridge.program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
