//! CLI argument definitions for bizmerge.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bizmerge",
    version,
    about = "Merge business listings from two providers on a normalized company name",
    long_about = "Normalize two business datasets, merge them on the cleaned company name,\n\
                  and check the merged output for row counts and missing addresses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize both datasets and write the merged CSV.
    Merge(MergeArgs),

    /// Report row count, distinct companies, and missing addresses of a merged CSV.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct MergeArgs {
    /// TOML configuration file; flags below override its values.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Employee-bearing dataset whose rows lead the output (default: google_dataset.csv).
    #[arg(long = "primary", value_name = "PATH")]
    pub primary: Option<PathBuf>,

    /// Dataset merged into the primary rows (default: facebook_dataset.csv).
    #[arg(long = "secondary", value_name = "PATH")]
    pub secondary: Option<PathBuf>,

    /// Column prefix for the primary dataset (default: google).
    #[arg(long = "primary-prefix", value_name = "PREFIX")]
    pub primary_prefix: Option<String>,

    /// Column prefix for the secondary dataset (default: facebook).
    #[arg(long = "secondary-prefix", value_name = "PREFIX")]
    pub secondary_prefix: Option<String>,

    /// Merged output file (default: merged_dataset.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// TOML configuration file; flags below override its values.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Merged CSV to check (default: the configured merge output).
    #[arg(long = "input", short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Column whose distinct values are counted (default: <primary prefix>_name).
    #[arg(long = "key-column", value_name = "COLUMN")]
    pub key_column: Option<String>,

    /// Column that must be non-empty (default: <primary prefix>_address).
    #[arg(long = "address-column", value_name = "COLUMN")]
    pub address_column: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_accepts_input_flag() {
        let cli = Cli::try_parse_from([
            "bizmerge",
            "check",
            "--input",
            "x.csv",
            "--key-column",
            "google_name",
        ])
        .expect("parse check");
        let Command::Check(args) = cli.command else {
            panic!("expected check subcommand");
        };
        assert_eq!(args.input, Some(PathBuf::from("x.csv")));
        assert_eq!(args.key_column.as_deref(), Some("google_name"));
        assert_eq!(args.address_column, None);
    }

    #[test]
    fn check_rejects_positional_input() {
        assert!(Cli::try_parse_from(["bizmerge", "check", "x.csv"]).is_err());
    }

    #[test]
    fn merge_accepts_source_and_output_flags() {
        let cli = Cli::try_parse_from([
            "bizmerge",
            "--log-format",
            "json",
            "merge",
            "--primary",
            "g.csv",
            "--secondary-prefix",
            "fb",
            "-o",
            "out.csv",
        ])
        .expect("parse merge");
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        let Command::Merge(args) = cli.command else {
            panic!("expected merge subcommand");
        };
        assert_eq!(args.primary, Some(PathBuf::from("g.csv")));
        assert_eq!(args.secondary, None);
        assert_eq!(args.secondary_prefix.as_deref(), Some("fb"));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["bizmerge", "check", "--log-level", "debug"])
            .expect("parse global flag");
        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
    }
}
