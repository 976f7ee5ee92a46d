//! Command-line arguments for `autoreport`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "autoreport",
    version,
    about = "Profile a data file and derive insights",
    long_about = "Read a CSV, TSV, Excel, JSON, text or PDF file, profile its columns \
                  or text, and print the analysis record.\n\n\
                  Unknown extensions are attempted as CSV."
)]
pub struct Cli {
    /// File to analyze.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "summary")]
    pub format: OutputFormatArg,

    /// Write the output to a file instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Maximum number of categorical columns to profile.
    #[arg(long = "max-categorical", value_name = "N", default_value_t = 20)]
    pub max_categorical: usize,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Pretty-printed analysis record.
    Json,
    /// Terminal tables.
    Summary,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_summary() {
        let cli = Cli::parse_from(["autoreport", "data.csv"]);
        assert_eq!(cli.file, PathBuf::from("data.csv"));
        assert_eq!(cli.format, OutputFormatArg::Summary);
        assert_eq!(cli.max_categorical, 20);
        assert!(cli.out.is_none());
    }

    #[test]
    fn parses_json_output_flags() {
        let cli = Cli::parse_from([
            "autoreport",
            "data.csv",
            "--format",
            "json",
            "--out",
            "report.json",
            "--log-format",
            "compact",
        ]);
        assert_eq!(cli.format, OutputFormatArg::Json);
        assert_eq!(cli.out, Some(PathBuf::from("report.json")));
        assert!(!cli.log_timestamps);
    }

    #[test]
    fn parses_log_line_flags() {
        let cli = Cli::parse_from(["autoreport", "data.csv", "--log-timestamps", "--log-target"]);
        assert!(cli.log_timestamps);
        assert!(cli.log_target);
    }
}
