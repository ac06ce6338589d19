use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
}

/// `config_path` is the `--config` override, if given.
pub fn config_command(args: ConfigCommands, config_path: Option<&Path>, config: &Config) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => Config::get_config_path()?,
    };

    match args.command {
        ConfigSubcommands::Show => {
            println!("{} {}", "Config file:".bold(), path.display());
            let engine = match (&config.engine.fixture, &config.engine.url) {
                (Some(fixture), _) => format!("fixture {}", fixture.display()).green(),
                (None, Some(url)) => url.as_str().green(),
                (None, None) => "not configured".red(),
            };
            println!("{} {}", "Engine:".bold(), engine);
            println!();
            print!("{}", config.to_toml()?);
        }
        ConfigSubcommands::Path => println!("{}", path.display()),
        ConfigSubcommands::Init => {
            if path.exists() {
                println!("{} {}", "Already exists:".yellow(), path.display());
            } else {
                Config::default().save_to(&path)?;
                println!("{} {}", "Created".green(), path.display());
            }
        }
    }
    Ok(())
}
