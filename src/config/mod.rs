//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/park-radar/config.toml

pub mod defaults;

use crate::candidate::wire::SlotPolicy;
use crate::candidate::CandidateKind;
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Result sizes and data-integrity policy
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Collaborator query parameters
    #[serde(default)]
    pub search: SearchConfig,

    /// Collaborator endpoints
    #[serde(default)]
    pub services: ServicesConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Ranking settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Nearest hotspots kept around a reference point
    #[serde(default = "default_hotspot_limit")]
    pub hotspot_limit: usize,

    /// Nearest listings kept around a reference point
    #[serde(default = "default_listing_limit")]
    pub listing_limit: usize,

    /// Handling of listings whose available slots exceed capacity
    #[serde(default)]
    pub slot_policy: SlotPolicy,
}

/// Search settings sent to collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_listing_radius")]
    pub listing_radius_meters: f64,

    #[serde(default = "default_hotspot_radius")]
    pub hotspot_radius_meters: f64,

    #[serde(default = "default_price_min")]
    pub price_min: f64,

    #[serde(default = "default_price_max")]
    pub price_max: f64,
}

/// Collaborator endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Listings backend base URL
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Prediction service base URL
    #[serde(default = "default_prediction_url")]
    pub prediction_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

// Default value functions for serde
fn default_hotspot_limit() -> usize {
    DEFAULT_HOTSPOT_LIMIT
}
fn default_listing_limit() -> usize {
    DEFAULT_LISTING_LIMIT
}
fn default_listing_radius() -> f64 {
    DEFAULT_LISTING_RADIUS_METERS
}
fn default_hotspot_radius() -> f64 {
    DEFAULT_HOTSPOT_RADIUS_METERS
}
fn default_price_min() -> f64 {
    DEFAULT_PRICE_MIN
}
fn default_price_max() -> f64 {
    DEFAULT_PRICE_MAX
}
fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}
fn default_prediction_url() -> String {
    DEFAULT_PREDICTION_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            hotspot_limit: default_hotspot_limit(),
            listing_limit: default_listing_limit(),
            slot_policy: SlotPolicy::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            listing_radius_meters: default_listing_radius(),
            hotspot_radius_meters: default_hotspot_radius(),
            price_min: default_price_min(),
            price_max: default_price_max(),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            prediction_url: default_prediction_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {}: {}", key, value)))
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["ranking", "hotspot_limit"] => Some(self.ranking.hotspot_limit.to_string()),
            ["ranking", "listing_limit"] => Some(self.ranking.listing_limit.to_string()),
            ["ranking", "slot_policy"] => Some(self.ranking.slot_policy.to_string()),

            ["search", "listing_radius_meters"] => {
                Some(self.search.listing_radius_meters.to_string())
            }
            ["search", "hotspot_radius_meters"] => {
                Some(self.search.hotspot_radius_meters.to_string())
            }
            ["search", "price_min"] => Some(self.search.price_min.to_string()),
            ["search", "price_max"] => Some(self.search.price_max.to_string()),

            ["services", "backend_url"] => Some(self.services.backend_url.clone()),
            ["services", "prediction_url"] => Some(self.services.prediction_url.clone()),
            ["services", "timeout_secs"] => Some(self.services.timeout_secs.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["output", "format"] => Some(self.output.format.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["ranking", "hotspot_limit"] => self.ranking.hotspot_limit = parse_value(key, value)?,
            ["ranking", "listing_limit"] => self.ranking.listing_limit = parse_value(key, value)?,
            ["ranking", "slot_policy"] => {
                self.ranking.slot_policy = SlotPolicy::from_str(value).map_err(Error::Config)?;
            }

            ["search", "listing_radius_meters"] => {
                self.search.listing_radius_meters = parse_positive(key, value)?;
            }
            ["search", "hotspot_radius_meters"] => {
                self.search.hotspot_radius_meters = parse_positive(key, value)?;
            }
            ["search", "price_min"] => self.search.price_min = parse_value(key, value)?,
            ["search", "price_max"] => self.search.price_max = parse_value(key, value)?,

            ["services", "backend_url"] => self.services.backend_url = value.to_string(),
            ["services", "prediction_url"] => self.services.prediction_url = value.to_string(),
            ["services", "timeout_secs"] => self.services.timeout_secs = parse_value(key, value)?,

            ["server", "host"] => self.server.host = value.to_string(),
            ["server", "port"] => self.server.port = parse_value(key, value)?,

            ["output", "format"] => self.output.format = value.to_string(),

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "ranking.hotspot_limit",
            "ranking.listing_limit",
            "ranking.slot_policy",
            "search.listing_radius_meters",
            "search.hotspot_radius_meters",
            "search.price_min",
            "search.price_max",
            "services.backend_url",
            "services.prediction_url",
            "services.timeout_secs",
            "server.host",
            "server.port",
            "output.format",
        ]
    }

    /// Configured result size for a candidate kind
    pub fn limit_for(&self, kind: CandidateKind) -> usize {
        match kind {
            CandidateKind::Free => self.ranking.hotspot_limit,
            CandidateKind::Paid => self.ranking.listing_limit,
        }
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64> {
    let v: f64 = parse_value(key, value)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(Error::InvalidRadius(format!("{} must be positive: {}", key, value)))
    }
}
