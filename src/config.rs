use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::DEFAULT_SKIP_DAYS;
use crate::tui::ThemeVariant;

pub const ENGINE_URL_ENV: &str = "HOCKEY_SIM_ENGINE_URL";
pub const FIXTURE_ENV: &str = "HOCKEY_SIM_FIXTURE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the simulation engine lives. A fixture file wins over a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeVariant,
    /// Milliseconds between frames.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    #[serde(default = "default_skip_days")]
    pub skip_days: u16,
}

fn default_frame_ms() -> u64 {
    16
}

fn default_skip_days() -> u16 {
    DEFAULT_SKIP_DAYS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            frame_ms: default_frame_ms(),
            skip_days: default_skip_days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("hockey-sim-tui.log")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("hockey-sim-tui")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".hockey-sim-tui")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env();
        Ok(config)
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&config_content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).with_context(|| format!("Failed to create config directory: {:?}", dir))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        let config_content = self.to_toml()?;
        fs::write(path, config_content).with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    /// Override engine settings from `HOCKEY_SIM_ENGINE_URL` and `HOCKEY_SIM_FIXTURE`.
    pub fn apply_env(&mut self) {
        self.apply_overrides(std::env::var(ENGINE_URL_ENV).ok(), std::env::var(FIXTURE_ENV).ok().map(PathBuf::from));
    }

    /// Non-empty overrides replace the configured values.
    pub fn apply_overrides(&mut self, url: Option<String>, fixture: Option<PathBuf>) {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            debug!("Engine URL overridden: {}", url);
            self.engine.url = Some(url);
        }
        if let Some(fixture) = fixture.filter(|f| !f.as_os_str().is_empty()) {
            debug!("Fixture overridden: {:?}", fixture);
            self.engine.fixture = Some(fixture);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ui.frame_ms, 16);
        assert_eq!(config.ui.skip_days, 7);
        assert_eq!(config.logging.file, PathBuf::from("hockey-sim-tui.log"));
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
            [engine]
            url = "http://localhost:8080"

            [ui]
            theme = "latte"
            skip_days = 14
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.ui.theme, ThemeVariant::Latte);
        assert_eq!(config.ui.skip_days, 14);
        assert_eq!(config.ui.frame_ms, 16);
    }

    #[test]
    fn test_overrides_ignore_empty_values() {
        let mut config = Config::default();
        config.engine.url = Some("http://a".into());
        config.apply_overrides(Some(String::new()), Some(PathBuf::from("world.json")));
        assert_eq!(config.engine.url.as_deref(), Some("http://a"));
        assert_eq!(config.engine.fixture, Some(PathBuf::from("world.json")));
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let mut config = Config::default();
        config.engine.fixture = Some(PathBuf::from("tests/fixtures/world.json"));
        let text = config.to_toml().unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("hockey-sim-tui-missing").join("config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
