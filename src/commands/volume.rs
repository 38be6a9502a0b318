//! Volume command implementation
//!
//! Dispatches the interpreted command to the volume service and writes the
//! result.

use crate::bridge::VolumeBridge;
use crate::cli::args::{Cli, OutputFormat};
use crate::cli::output::{write_output, ChangeReport, CurrentVolume};
use crate::config::Config;
use crate::domain::Command;
use crate::error::Result;
use crate::services::VolumeService;

use std::io::Write;

/// Interpret the CLI token, then run it against a bridge built from `config`
///
/// The bridge is only constructed once the token has been accepted, so a
/// usage error never reaches the scripting program.
pub fn run_cli<B, F, W>(cli: &Cli, config: &Config, make_bridge: F, out: &mut W) -> Result<()>
where
    B: VolumeBridge,
    F: FnOnce(&Config) -> B,
    W: Write,
{
    let policy = config.volume.to_policy()?;
    let command = Command::interpret(cli.volume.as_deref(), policy.step)?;
    log::debug!("command: {}", command);

    let service = VolumeService::new(policy, config.general.dry_run);
    let mut bridge = make_bridge(config);

    run_volume(&mut bridge, command, &service, cli.format, out)
}

/// Execute a volume command against a bridge
pub fn run_volume<B: VolumeBridge, W: Write>(
    bridge: &mut B,
    command: Command,
    service: &VolumeService,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::ShowCurrent => {
            let volume = service.current(bridge)?;
            write_output(out, &CurrentVolume { volume }, format)?;
        }
        Command::SetAbsolute(_) | Command::Adjust(_) => {
            if let Some(change) = service.execute(bridge, command)? {
                let report = ChangeReport::new(change, service.is_dry_run());
                write_output(out, &report, format)?;
            }
        }
    }

    Ok(())
}
