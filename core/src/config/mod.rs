use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::constants::default_constants::{GENERATE_LENGTH, LOG_LEVEL, MAX_GENERATE_LENGTH};
use crate::generator::Sampling;
use crate::util::log::parse_log_level;

#[derive(Debug, Serialize, Deserialize, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct AlphagenConfig {
    #[serde(default = "GeneratorConfig::default")]
    pub generator_config: GeneratorConfig,
    #[serde(default = "LogConfig::default")]
    pub log_config: LogConfig,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    pub sampling: Sampling,
    pub max_length: usize,
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { length: GENERATE_LENGTH, sampling: Sampling::default(), max_length: MAX_GENERATE_LENGTH }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: LOG_LEVEL.into() }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        Ok(parse_log_level(&self.level)?)
    }
}

/// `None` when the platform has no config directory; callers fall back to defaults.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("alphagen").join("config.toml"))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AlphagenConfig> {
    let content = fs::read_to_string(path)?;
    let config: AlphagenConfig = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(config: &AlphagenConfig, path: P) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    fs::write(path, toml_str)?;
    Ok(())
}
