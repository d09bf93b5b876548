use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod domain;
mod services;
mod upgrade;

pub use cli::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::app_catalog::{add_app, unique_id};
pub use services::output::{print_one, print_out};
pub use services::session::{connect, disconnect, status_of};
pub use services::spo_client::{HttpTransport, StoredTokenProvider};
pub use services::storage::{load_config, load_session};
pub use upgrade::{default_rules, load_project, upgrade};

fn init_tracing(cli: &Cli) {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    tracing::debug!("executing {}", cli.command.name());
    let config = load_config()?;

    if commands::handle_spo_commands(&cli, &config)? {
        return Ok(());
    }
    commands::handle_spfx_commands(&cli)?;
    Ok(())
}
