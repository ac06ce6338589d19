pub mod config;
pub mod snapshot;
pub mod tui;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::engine::{FixtureEngine, HttpEngine, SharedEngine};
use crate::tui::Theme;

/// Configuration after file, environment and command line have been merged.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_from(&Config::get_config_path()?)?,
    };
    config.apply_env();
    config.apply_overrides(cli.engine_url.clone(), cli.fixture.clone());
    if let Some(theme) = &cli.theme {
        config.ui.theme = theme.parse()?;
    }
    Ok(config)
}

/// Build the engine the config points at. A fixture wins over a URL.
pub fn connect(config: &Config) -> Result<SharedEngine> {
    if let Some(path) = &config.engine.fixture {
        info!("Using fixture world {:?}", path);
        return Ok(Arc::new(FixtureEngine::load(path)?));
    }

    let url = config.engine.url.as_deref().context(
        "No engine configured. Set [engine] url or fixture in the config file, \
         HOCKEY_SIM_ENGINE_URL, or pass --engine-url / --fixture",
    )?;
    info!("Using engine at {}", url);
    Ok(Arc::new(HttpEngine::new(url)?))
}

pub fn theme(config: &Config) -> Theme {
    Theme::new(config.ui.theme)
}
