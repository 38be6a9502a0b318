//! vol - read or change the system output volume
//!
//! A command-line tool that queries and sets the output volume through a
//! scripting bridge.

use clap::error::ErrorKind;
use clap::Parser;
use vol::bridge::ScriptBridge;
use vol::cli::args::{generate_completions, usage, Cli};
use vol::commands::run_cli;
use vol::config::{Config, ConfigBuilder};
use vol::error::{AppError, BridgeError};

/// Exit status for a rejected command line
const EXIT_USAGE: i32 = 1;

/// Exit status for a failed query or update
const EXIT_FAILURE: i32 = 1;

fn main() {
    // Parse CLI arguments; anything clap rejects is a usage error
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_USAGE);
        }
    };

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    // The logger needs the merged verbosity, so it is built after the config
    let config = build_config(&cli);
    let verbose = match &config {
        Ok(config) => config.general.verbose,
        Err(_) => cli.verbose,
    };
    init_logging(verbose);

    let result = config.and_then(|config| run(&cli, &config));

    if let Err(e) = result {
        match &e {
            AppError::Usage(usage_err) => log::debug!("{}", usage_err),
            _ => log::error!("{}", e),
        }
        eprintln!("{}", error_message(&e));
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_cli(cli, config, |config| ScriptBridge::new(&config.bridge), &mut out)
}

fn build_config(cli: &Cli) -> Result<Config, AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_dry_run(cli.dry_run.then_some(true))
        .with_step(cli.step)
        .with_quantize(cli.quantize.then_some(true))
        .build()?;
    Ok(config)
}

/// Default log filter; `RUST_LOG` still takes precedence
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .format_timestamp(None)
        .init();
}

fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Usage(_) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

/// Text printed on stderr for a failed run
fn error_message(err: &AppError) -> String {
    if let AppError::Usage(_) = err {
        return usage().trim_end().to_string();
    }

    let mut message = format!("Error: {}", err);

    // Append helpful hints for common errors
    match err {
        AppError::Bridge(bridge_err) if bridge_err.is_not_found() => {
            message.push_str("\n\nHint: The scripting bridge program was not found.");
            message.push_str("\n      Set [bridge] program in ~/.config/vol/config.toml.");
        }
        AppError::Bridge(BridgeError::Parse(_)) => {
            message.push_str(
                "\n\nHint: Check that the query script prints the volume as an integer.",
            );
        }
        _ => {}
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;
    use std::io::Write;
    use vol::error::UsageError;

    fn filter_level(verbose: bool) -> LevelFilter {
        env_logger::Builder::new()
            .parse_filters(log_filter(verbose))
            .build()
            .filter()
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    fn config_for(args: &[&str], file: &tempfile::NamedTempFile) -> Config {
        let path = file.path().to_str().unwrap();
        let mut argv = vec!["vol", "-c", path];
        argv.extend_from_slice(args);
        build_config(&Cli::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(filter_level(false), LevelFilter::Info);
        assert_eq!(filter_level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_verbose_flag_enables_debug() {
        let file = config_file("");
        let config = config_for(&["-v", "45"], &file);
        assert!(config.general.verbose);
        assert_eq!(filter_level(config.general.verbose), LevelFilter::Debug);

        let config = config_for(&["45"], &file);
        assert_eq!(filter_level(config.general.verbose), LevelFilter::Info);
    }

    #[test]
    fn test_verbose_from_config_file() {
        let file = config_file("[general]\nverbose = true\n");
        let config = config_for(&[], &file);
        assert_eq!(filter_level(config.general.verbose), LevelFilter::Debug);
    }

    #[test]
    fn test_usage_error_prints_usage_and_exits_one() {
        let err = AppError::Usage(UsageError("abc".to_string()));
        assert_eq!(exit_code(&err), 1);

        let message = error_message(&err);
        assert_eq!(message, usage().trim_end());
        assert!(message.contains("vol"));
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn test_bridge_error_message_and_exit() {
        let err = AppError::Bridge(BridgeError::Spawn {
            program: "osascript".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(exit_code(&err), 1);

        let message = error_message(&err);
        assert!(message.starts_with("Error: Bridge error:"));
        assert!(message.contains("Hint:"));
    }

    #[test]
    fn test_parse_error_hint() {
        let err = AppError::Bridge(BridgeError::Parse("missing value".to_string()));
        assert!(error_message(&err).contains("integer"));
    }
}
