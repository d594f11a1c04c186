//! `stillage` -- CLI front end for the container-inventory service.

mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match run(cli).await {
        Ok(()) => {}
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(code);
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let global = cli.global;

    match cli.command {
        // No backend needed for these.
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "stillage", &mut std::io::stdout());
            Ok(())
        }
        Command::Config(args) => commands::config_cmd::handle(args, &global),

        // Everything else talks to the service.
        command => {
            let (mut inv, profile_name) = config::build_inventory(&global)?;

            let result = match command {
                Command::Containers(args) => {
                    commands::containers::handle(&mut inv, args, &global).await
                }
                Command::ContainerTypes(args) => {
                    commands::container_types::handle(&mut inv, args, &global).await
                }
                Command::Products(args) => {
                    commands::products::handle(&mut inv, args, &global).await
                }
                Command::ProductTypes(args) => {
                    commands::product_types::handle(&mut inv, args, &global).await
                }
                Command::Units(args) => commands::units::handle(&mut inv, args, &global).await,
                Command::Users(args) => commands::users::handle(&mut inv, args, &global).await,
                Command::Roles(args) => commands::roles::handle(&mut inv, args, &global).await,
                Command::History(args) => {
                    commands::history::handle(&mut inv, args, &global).await
                }
                Command::Auth(args) => {
                    commands::auth_cmd::handle(&mut inv, args, &global, &profile_name).await
                }
                Command::Completions(_) | Command::Config(_) => unreachable!("handled above"),
            };

            // A 401 invalidates the persisted token too -- the session
            // store already dropped the in-process copy.
            if matches!(result, Err(CliError::Unauthorized)) {
                config::clear_token(&profile_name);
            }

            result
        }
    }
}
