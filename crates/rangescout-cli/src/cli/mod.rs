//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands, SweepArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::CredentialStore;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Credentials file location
    let config_path = match cli.config {
        Some(path) => path,
        None => CredentialStore::default_path()?,
    };

    // Create context for commands
    let ctx = commands::Context {
        shodan_key: cli.shodan_key,
        hunter_key: cli.hunter_key,
        config_path,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command, or run an interactive sweep if none given
    match cli.command {
        Some(Commands::Sweep(args)) => commands::sweep::execute(ctx, args).await,
        Some(Commands::Config(args)) => commands::config::execute(ctx, args),
        None => commands::sweep::execute(ctx, SweepArgs::interactive()).await,
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "rangescout=debug,rangescout_client=debug,rangescout_recon=debug,rangescout_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .init();
}
