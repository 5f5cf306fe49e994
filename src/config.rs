use crate::api::constants::{DEFAULT_QUESTIONNAIRE_ID, DEFAULT_TIMEOUT_SECS};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const BASE_URL_ENV: &str = "QUESTIONNAIRE_BASE_URL";
pub const TOKEN_ENV: &str = "QUESTIONNAIRE_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
    /// Persisted bearer token; takes precedence over the environment
    #[serde(default)]
    pub authorization: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_questionnaire_id")]
    pub default_questionnaire_id: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_questionnaire_id() -> String {
    DEFAULT_QUESTIONNAIRE_ID.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            authorization: None,
            timeout_secs: default_timeout_secs(),
            default_questionnaire_id: default_questionnaire_id(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("questionnaire-cli")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".questionnaire-cli")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Base URL from the config file, falling back to the environment
    pub fn resolve_base_url(&self) -> Result<String> {
        self.base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|url| !url.trim().is_empty()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No backend URL configured. Run `questionnaire-cli config set-base-url <url>` or set {}",
                    BASE_URL_ENV
                )
            })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let parsed = reqwest::Url::parse(&url).with_context(|| format!("Invalid URL: {}", url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Unsupported URL scheme: {}", parsed.scheme());
        }
        self.base_url = Some(url);
        Ok(())
    }
}
