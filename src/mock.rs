//! Mock implementations for testing
//!
//! Provides an in-memory volume bridge for unit testing without a real
//! scripting bridge.

use crate::bridge::{parse_volume_output, VolumeBridge};
use crate::domain::Volume;
use crate::error::BridgeError;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock volume bridge for testing
#[derive(Debug)]
pub struct MockBridge {
    volume: i64,
    output: Option<String>,
    fail_apply: bool,
    queries: AtomicUsize,
    applied: Vec<u8>,
}

impl MockBridge {
    /// Create a new mock bridge reporting `volume`
    pub fn new(volume: i64) -> Self {
        Self {
            volume,
            output: None,
            fail_apply: false,
            queries: AtomicUsize::new(0),
            applied: Vec::new(),
        }
    }

    /// Builder: answer queries with raw script output instead of the stored volume
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Builder: make every apply fail as if the script exited non-zero
    pub fn failing_apply(mut self) -> Self {
        self.fail_apply = true;
        self
    }

    /// Currently stored volume
    pub fn volume(&self) -> i64 {
        self.volume
    }

    /// Volumes passed to `apply`, in order
    pub fn applied(&self) -> Vec<u8> {
        self.applied.clone()
    }

    /// Number of `query` calls so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl VolumeBridge for MockBridge {
    fn query(&self) -> Result<i64, BridgeError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match &self.output {
            Some(out) => parse_volume_output(out),
            None => Ok(self.volume),
        }
    }

    fn apply(&mut self, volume: Volume) -> Result<(), BridgeError> {
        if self.fail_apply {
            return Err(BridgeError::Exited {
                program: "mock".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "mock failure".to_string(),
            });
        }
        self.volume = volume.into();
        self.applied.push(volume.as_percentage());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
