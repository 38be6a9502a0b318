//! CLI argument definitions using clap derive

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;

/// Read or change the system output volume
///
/// With no VOLUME, prints the current volume. `N` sets it, `+N` / `-N`
/// adjust it, and a bare `+` / `-` moves it by the step.
#[derive(Parser, Debug)]
#[command(name = "vol")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "VOL_CONFIG")]
    pub config: Option<String>,

    /// Step used by bare + and - and by --quantize
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub step: Option<u8>,

    /// Round targets down to a multiple of the step
    #[arg(long)]
    pub quantize: bool,

    /// Dry run mode - don't actually apply changes
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// N, +N, -N, + or -
    #[arg(value_name = "VOLUME", allow_negative_numbers = true)]
    pub volume: Option<String>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare integers, nothing printed for changes
    #[default]
    Plain,
    /// JSON format for machine parsing
    Json,
}

/// One-line usage text
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
