use anyhow::Result;
use clap::Parser;
use log::info;

use hockey_sim_tui::cli::commands::{self, config::config_command, snapshot::snapshot_command, tui::tui_command};
use hockey_sim_tui::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = commands::resolve_config(&cli)?;

    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.logging.file)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Starting hockey-sim-tui");

    match cli.command {
        None | Some(Commands::Tui) => tui_command(&config).await,
        Some(Commands::Snapshot(args)) => snapshot_command(args, &config).await,
        Some(Commands::Config(args)) => config_command(args, cli.config.as_deref(), &config),
    }
}
