//! Output formatting utilities
//!
//! Provides plain and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::services::VolumeChange;
use serde::Serialize;
use std::io::{self, Write};

/// Format and write output based on the selected format
pub fn write_output<W, T>(out: &mut W, data: &T, format: OutputFormat) -> io::Result<()>
where
    W: Write,
    T: Serialize + PlainDisplay,
{
    match format {
        OutputFormat::Plain => {
            if let Some(text) = data.to_plain() {
                writeln!(out, "{}", text)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(data).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}

/// Trait for types with a plain-text rendering
pub trait PlainDisplay {
    /// Plain text, or `None` to print nothing
    fn to_plain(&self) -> Option<String>;
}

/// Current volume report
#[derive(Debug, Clone, Serialize)]
pub struct CurrentVolume {
    pub volume: i64,
}

impl PlainDisplay for CurrentVolume {
    fn to_plain(&self) -> Option<String> {
        Some(self.volume.to_string())
    }
}

/// Result of a set or adjust command
#[derive(Debug, Clone, Serialize)]
pub struct ChangeReport {
    pub volume: u8,
    pub previous: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,
}

impl ChangeReport {
    pub fn new(change: VolumeChange, dry_run: bool) -> Self {
        Self {
            volume: change.volume.as_percentage(),
            previous: change.previous,
            dry_run,
        }
    }
}

// Changes are reported through the log in plain mode.
impl PlainDisplay for ChangeReport {
    fn to_plain(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Volume;

    fn render<T: Serialize + PlainDisplay>(data: &T, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_output(&mut buf, data, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_current_plain() {
        let data = CurrentVolume { volume: 48 };
        assert_eq!(render(&data, OutputFormat::Plain), "48\n");
    }

    #[test]
    fn test_current_json() {
        let data = CurrentVolume { volume: 48 };
        assert_eq!(render(&data, OutputFormat::Json), "{\"volume\":48}\n");
    }

    #[test]
    fn test_change_plain_is_silent() {
        let change = VolumeChange {
            previous: 48,
            volume: Volume::new(50).unwrap(),
        };
        assert_eq!(render(&ChangeReport::new(change, false), OutputFormat::Plain), "");
    }

    #[test]
    fn test_change_json() {
        let change = VolumeChange {
            previous: 30,
            volume: Volume::MUTED,
        };
        assert_eq!(
            render(&ChangeReport::new(change, false), OutputFormat::Json),
            "{\"volume\":0,\"previous\":30}\n"
        );
        assert_eq!(
            render(&ChangeReport::new(change, true), OutputFormat::Json),
            "{\"volume\":0,\"previous\":30,\"dry_run\":true}\n"
        );
    }
}
