//! rtimeclock library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cli, cfg),
        Commands::In { .. } | Commands::Out { .. } => {
            cli::commands::clock::handle(&cli.command, cli, cfg)
        }
        Commands::Break { .. } => cli::commands::brk::handle(&cli.command, cli, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cli, cfg),
        Commands::Today { .. } => cli::commands::today::handle(&cli.command, cli, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; the --state override takes precedence over it.
    let mut cfg = Config::load();
    if let Some(custom_state) = &cli.state {
        cfg.state_file = custom_state.clone();
    }

    dispatch(&cli, &cfg)
}
