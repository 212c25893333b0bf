use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{provider::SimulatedLatency, resolver::OverlapPolicy};

/// City shown when the interactive front end starts.
pub const DEFAULT_CITY: &str = "Mumbai";

/// Simulated round-trip delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub city_ms: u64,
    pub location_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        let latency = SimulatedLatency::default();
        Self {
            city_ms: latency.city.as_millis() as u64,
            location_ms: latency.location.as_millis() as u64,
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "Mumbai"
/// overlap_policy = "last_write_wins"
///
/// [latency]
/// city_ms = 800
/// location_ms = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City loaded on startup; empty starts with an empty card.
    pub default_city: String,
    pub overlap_policy: OverlapPolicy,
    pub latency: LatencyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: DEFAULT_CITY.to_string(),
            overlap_policy: OverlapPolicy::default(),
            latency: LatencyConfig::default(),
        }
    }
}

impl Config {
    pub fn simulated_latency(&self) -> SimulatedLatency {
        SimulatedLatency {
            city: Duration::from_millis(self.latency.city_ms),
            location: Duration::from_millis(self.latency.location_ms),
        }
    }

    /// Default city, ignoring blank values.
    pub fn default_city(&self) -> Option<&str> {
        Some(self.default_city.trim()).filter(|c| !c.is_empty())
    }

    pub fn set_default_city(&mut self, city: &str) {
        self.default_city = city.trim().to_string();
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skyscope", "skyscope")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
