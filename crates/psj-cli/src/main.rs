//! psj - mypsj portal shell
//!
//! Each invocation is one application load: the previously persisted session
//! is rehydrated from disk, one user action runs, and the process exits.
//!
//! # Examples
//!
//! ```bash
//! # Sign in with a demo account
//! psj login --email admin@mypsj.com --password password123
//!
//! # Check the restored session
//! psj whoami --pretty
//!
//! # Evaluate the access gate for a guarded route
//! psj open /ngo-portal
//!
//! # Sign out
//! psj logout
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod portal_commands;
mod routes;
mod session_commands;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::Result as CliErrorResult;

use psj_auth::{DemoBackend, FileStorage, SessionStore};
use psj_config::Config;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_dir = match cli.config_dir.clone() {
        Some(dir) => dir,
        None => match Config::config_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("psj: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let config = match Config::load_from(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("psj: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.logging.level, std::io::stderr().is_terminal()) {
        eprintln!("psj: {e}");
        return ExitCode::FAILURE;
    }

    let backend = Arc::new(DemoBackend::seeded().with_latency(config.auth.latency()));
    let storage = Arc::new(FileStorage::new(config.session_dir(&config_dir)));
    let store = SessionStore::with_key(backend, storage, &config.session.key);

    match run(cli, &store).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("psj: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, store: &SessionStore) -> CliErrorResult<ExitCode> {
    match cli.command {
        Commands::Login {
            email,
            password,
            from,
        } => session_commands::login(store, &email, &password, from.as_deref(), cli.pretty).await,
        Commands::Register(args) => session_commands::register(store, args, cli.pretty).await,
        Commands::Logout => session_commands::logout(store),
        Commands::Whoami => session_commands::whoami(store, cli.pretty),
        Commands::Open { route } => portal_commands::open(store, &route),
    }
}

#[cfg(test)]
mod tests;
