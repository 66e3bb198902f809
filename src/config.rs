use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::i18n::DEFAULT_LANG;

pub static CONFIG_PATH: Lazy<&'static Path> = Lazy::new(|| {
    Path::new(
        option_env!("FACESTYLE_CONFIG_PATH").unwrap_or("/usr/local/etc/facestyle/config.toml"),
    )
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    /// Directory of `<lang>.json` tables; bundled tables are used when unset.
    pub locale_dir: Option<PathBuf>,
    pub analysis_delay_ms: u64,
    /// Fixed seed for reproducible draws.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LANG.to_string(),
            locale_dir: None,
            analysis_delay_ms: 2500,
            seed: None,
        }
    }
}

impl Config {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or(&CONFIG_PATH);
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config at {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or(&CONFIG_PATH);
    let data = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, data).with_context(|| format!("writing config {}", path.display()))
}

/// Write `cfg` to `path` unless a config file already exists there.
/// Returns whether a file was written.
pub fn write_if_missing(cfg: &Config, path: Option<&Path>) -> Result<bool> {
    let target = path.unwrap_or(&CONFIG_PATH);
    if target.exists() {
        return Ok(false);
    }
    save_config(cfg, Some(target))?;
    log::info!("Wrote default config to {}", target.display());
    Ok(true)
}
