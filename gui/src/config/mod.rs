// GUI configuration module
pub mod fonts;
pub mod theme;

use anyhow::Context;
use engine::config::settings::ChartSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use theme::Theme;

/// Environment variable naming a user config file that replaces the embedded default.
pub const CONFIG_ENV_VAR: &str = "HOURS_CHART_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub fonts: FontSettings,
    #[serde(default)]
    pub chart: ChartSettings,
    pub shortcuts: Shortcuts,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub theme: Theme,
    pub window_width: u32,
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FontSettings {
    pub family: String,
    /// TrueType file replacing the bundled face.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Shortcuts {
    pub command_palette: String,
    pub home: String,
}

/// A parsed `Ctrl+K` style binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: String,
}

impl Shortcut {
    pub fn parse(binding: &str) -> Option<Self> {
        let mut shortcut = Shortcut {
            ctrl: false,
            shift: false,
            alt: false,
            key: String::new(),
        };
        for part in binding.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" => shortcut.ctrl = true,
                "shift" => shortcut.shift = true,
                "alt" | "option" => shortcut.alt = true,
                "" => return None,
                key if shortcut.key.is_empty() => shortcut.key = key.to_string(),
                _ => return None,
            }
        }
        if shortcut.key.is_empty() {
            None
        } else {
            Some(shortcut)
        }
    }

    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.ctrl == ctrl && self.shift == shift && self.alt == alt && self.key.eq_ignore_ascii_case(key)
    }
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        Self::from_json(DEFAULT_CONFIG).context("embedded default configuration is invalid")
    }

    pub fn from_json(json: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.chart.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// User file from `HOURS_CHART_CONFIG` if it loads, the embedded default otherwise.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::load_with_override(std::env::var_os(CONFIG_ENV_VAR).as_deref().map(Path::new))
    }

    pub fn load_with_override(user_path: Option<&Path>) -> Result<Self, anyhow::Error> {
        if let Some(path) = user_path {
            match Self::load_from_path(path) {
                Ok(config) => {
                    tracing::info!("Loaded user configuration from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!("Ignoring user configuration: {:#}. Using defaults.", e);
                }
            }
        }
        Self::load_default()
    }

    pub fn palette_shortcut(&self) -> Option<Shortcut> {
        Shortcut::parse(&self.shortcuts.command_palette)
    }

    pub fn home_shortcut(&self) -> Option<Shortcut> {
        Shortcut::parse(&self.shortcuts.home)
    }
}
