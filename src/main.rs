//! slink CLI
//!
//! Usage: slink <COMMAND>
//!
//! Commands:
//!   watch   Mirror source changes into the local install until Ctrl+C
//!   link    Replace the local install's files with links to the source

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use slink::config::{Config, Verbosity};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("*** {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::resolve(&cwd, cli.config.as_deref())?;

    init_tracing(cli.verbose, config.output.verbosity);

    for warning in &warnings {
        eprintln!("Warning: {warning}");
    }

    let ui = UiContext::new(cli.color.map(Into::into), &config);

    match cli.command {
        Commands::Watch { packages } => commands::watch::cmd_watch(&cwd, &packages, &config, ui),
        Commands::Link { package } => commands::link::cmd_link(&cwd, &package, &config, ui),
    }
}

fn init_tracing(verbose: u8, verbosity: Verbosity) {
    let level = match verbose {
        0 if verbosity == Verbosity::Verbose => "info",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
