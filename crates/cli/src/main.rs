mod cli;
mod error;
mod fetch;
mod sample;
mod view;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pcbdash_vis::range::today;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cli.verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let result = match cli.command {
        Commands::View(args) => view::view(args),
        Commands::Sample(args) => sample::sample(args),
        Commands::Range { range } => {
            println!("{}", range.describe(today()));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
