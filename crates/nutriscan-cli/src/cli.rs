//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NutriScan CLI - Turn generated product reports into structured analyses.
#[derive(Debug, Parser)]
#[command(name = "nutriscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Parser configuration file (TOML)
    #[arg(short, long, global = true, env = "NUTRISCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable report (default)
    Table,
    /// JSON analysis record
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a saved report into an analysis
    Parse(ParseArgs),

    /// Print the effective parser configuration as TOML
    Config,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Report text file, or `-` for stdin
    pub report: String,

    /// JSON file holding the citation array
    #[arg(long)]
    pub citations: Option<PathBuf>,

    /// Product query, used when the report names no product
    #[arg(short, long)]
    pub query: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_args() {
        let cli = Cli::try_parse_from([
            "nutriscan",
            "parse",
            "report.txt",
            "--citations",
            "cites.json",
            "-q",
            "maggi",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, CliFormat::Json);
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.report, "report.txt");
                assert_eq!(args.citations, Some(PathBuf::from("cites.json")));
                assert_eq!(args.query.as_deref(), Some("maggi"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_default_format_is_table() {
        let cli = Cli::try_parse_from(["nutriscan", "config"]).unwrap();
        assert_eq!(cli.format, CliFormat::Table);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["nutriscan"]).is_err());
    }
}
