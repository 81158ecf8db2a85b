//! NutriScan CLI - Command-line interface for the NutriScan report parser.

use clap::Parser;
use nutriscan_cli::commands;
use nutriscan_cli::{load_parser_config, Cli, Command, Formatter};
use nutriscan_extractor::ReportParser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let formatter = Formatter::new(cli.format, !cli.no_color);
    if let Err(e) = run(cli, &formatter) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli, formatter: &Formatter) -> nutriscan_cli::Result<()> {
    let config = load_parser_config(cli.config.as_deref())?;

    match cli.command {
        Command::Config => commands::execute_config(&config)?,
        Command::Parse(args) => {
            let parser = ReportParser::new(config)?;
            commands::execute_parse(args, &parser, formatter)?;
        }
    }

    Ok(())
}
