//! CLI entry point: initializes logging, parses arguments, and dispatches
//! to exactly one query-façade operation.

mod cli;
mod commands;
mod frontend;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();
    init_logging(&cli);

    match commands::run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logging(cli: &cli::Cli) {
    let default_level = if cli.debug {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
