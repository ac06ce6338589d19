use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::config::ConfigCommands;
use super::commands::snapshot::SnapshotArgs;

#[derive(Parser)]
#[command(name = "hockey-sim-tui")]
#[command(about = "Terminal front end for the hockey management simulation")]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of a running simulation engine
    #[arg(long, global = true)]
    pub engine_url: Option<String>,

    /// Serve a frozen world from a JSON fixture instead of a live engine
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Colour theme (mocha or latte)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive TUI (default)
    Tui,
    /// Render one screen to stdout and exit
    Snapshot(SnapshotArgs),
    /// Configuration management
    Config(ConfigCommands),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["hockey-sim-tui", "--fixture", "world.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.fixture, Some(PathBuf::from("world.json")));
    }

    #[test]
    fn test_snapshot_arguments() {
        let cli = Cli::try_parse_from(["hockey-sim-tui", "snapshot", "comp", "1", "--width", "100"]).unwrap();
        match cli.command {
            Some(Commands::Snapshot(args)) => {
                assert_eq!(args.id, Some(1));
                assert_eq!(args.width, 100);
                assert_eq!(args.height, 40);
            }
            _ => panic!("expected snapshot"),
        }
    }
}
