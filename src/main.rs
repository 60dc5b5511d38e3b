mod cli;
mod client;
mod commands;
mod config;
mod error;
mod names;
mod output;
mod pipeline;
mod search;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, UserCommands};
use client::CatalogClient;
use config::Config;
use error::Result;
use pipeline::UserCatalog;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

/// RUST_LOG wins over the verbosity-derived default
fn init_logging(verbose: bool) {
    let default = if verbose { "userdir=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userdir", &mut io::stdout());
        }
        command => {
            let config = Config::load()?;
            let endpoint = config.endpoint(cli.endpoint.as_deref())?;
            let catalog = UserCatalog::new(CatalogClient::new(endpoint));

            match command {
                Commands::Users(args) => {
                    commands::users::list(&catalog, args).await?;
                }
                Commands::User { action } => match action {
                    UserCommands::List(args) => {
                        commands::users::list(&catalog, args).await?;
                    }
                    UserCommands::View(args) => {
                        commands::users::view(&catalog, args).await?;
                    }
                },
                Commands::Completions { .. } => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
