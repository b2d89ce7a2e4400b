use crate::global;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Environment variable names for the Zoom credentials.
pub mod env_keys {
    pub const API_KEY: &str = "ZOOM_API_KEY";
    pub const API_SECRET: &str = "ZOOM_API_SECRET";
    pub const USER_EMAIL: &str = "ZOOM_USER_EMAIL";
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub zoom: ZoomConfig,
    pub monitor: MonitorConfig,
    pub light: LightConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Base URL of the Zoom REST API.
    pub base_url: String,
    /// Lifetime of each signed API token, in seconds.
    pub token_ttl_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Seconds between presence polls.
    pub poll_interval_seconds: u64,
    /// Seconds the startup self-test holds the light on.
    pub self_test_hold_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub pixel_count: u16,
    /// 0.0–1.0, applied to every channel.
    pub brightness: f32,
    /// Steady on-air color as [r, g, b].
    pub color: [u8; 3],
    pub flash_times: u32,
    pub flash_delay_ms: u64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.zoom.us/v2".to_string(),
            token_ttl_seconds: 90,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: 10,
            self_test_hold_seconds: 2,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            pixel_count: 16,
            brightness: 1.0,
            color: [255, 255, 255],
            flash_times: 10,
            flash_delay_ms: 300,
        }
    }
}

impl LightConfig {
    pub fn color(&self) -> (u8, u8, u8) {
        (self.color[0], self.color[1], self.color[2])
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

/// Zoom credentials and the monitored account, resolved once at startup.
///
/// All three values are required; a missing one is a fatal configuration
/// fault and the monitor loop never starts.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub user_email: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require_env(env_keys::API_KEY)?,
            api_secret: require_env(env_keys::API_SECRET)?,
            user_email: require_env(env_keys::USER_EMAIL)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("{key} is not set; it is required to reach the Zoom API"))?;
    if value.trim().is_empty() {
        bail!("{key} is set but empty");
    }
    Ok(value)
}
