//! AutoReport CLI.

use std::fs;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::info;
use tracing::level_filters::LevelFilter;

use autoreport_cli::logging::{LogConfig, LogFormat, init_logging};
use autoreport_cli::pipeline::{AnalysisOptions, analyze_path_with};
use autoreport_cli::summary::render_summary;
use autoreport_profile::ProfileOptions;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let options = AnalysisOptions {
        profile: ProfileOptions::default().with_max_categorical_columns(cli.max_categorical),
        ..AnalysisOptions::default()
    };
    let record = analyze_path_with(&cli.file, &options)
        .with_context(|| format!("analyze {}", cli.file.display()))?;

    let rendered = match cli.format {
        OutputFormatArg::Json => {
            let mut json = serde_json::to_string_pretty(&record).context("serialize record")?;
            json.push('\n');
            json
        }
        OutputFormatArg::Summary => render_summary(&record),
    };

    match &cli.out {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    }
    .with_timestamps(cli.log_timestamps)
    .with_target(cli.log_target);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_flags_reach_the_config() {
        let cli = Cli::parse_from([
            "autoreport",
            "data.csv",
            "--log-level",
            "debug",
            "--log-timestamps",
            "--log-target",
            "--log-format",
            "json",
        ]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn log_lines_are_plain_by_default() {
        let cli = Cli::parse_from(["autoreport", "data.csv"]);
        let config = log_config_from_cli(&cli);
        assert!(config.use_env_filter);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }
}
