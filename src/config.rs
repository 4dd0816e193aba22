//! Configuration file loading with CLI and environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::adapters::live::http::DEFAULT_DOWNLOAD_TIMEOUT;
use crate::adapters::live::openai::OPENAI_API_BASE;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default request parameters (used when CLI flags are absent).
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// API endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Download settings.
    #[serde(default)]
    pub download: DownloadConfig,
}

/// Default request parameters from the config file.
#[derive(Debug, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Model name or alias.
    pub model: Option<String>,
    /// Image size, e.g. `1792x1024`.
    pub size: Option<String>,
    /// Quality: `standard` or `hd`.
    pub quality: Option<String>,
    /// Number of images.
    pub count: Option<u32>,
    /// Prefix for downloaded file names.
    pub output_prefix: Option<String>,
}

/// API endpoint settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root; `/images/generations` is appended.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: OPENAI_API_BASE.to_string() }
    }
}

/// Download settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Per-download timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self { timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT.as_secs() }
    }
}

impl DownloadConfig {
    /// The timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or holds
    /// a zero download timeout.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
        config.validate().map_err(|e| format!("Invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.download.timeout_secs == 0 {
            return Err("[download] timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// Get the API key. Only the process environment is consulted.
    #[must_use]
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `DALLE_DEMO_CONFIG` environment variable
/// 3. `~/.config/dalle-demo/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("DALLE_DEMO_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/dalle-demo/config.toml")
    } else {
        PathBuf::from("dalle-demo.toml")
    }
}
