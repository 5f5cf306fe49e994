use crate::config::{Config, TOKEN_ENV};
use anyhow::Result;
use log::{debug, info};
use std::path::Path;

/// Where a bearer token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    ConfigFile,
    Environment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub source: TokenSource,
}

impl Credentials {
    /// Resolve the bearer token: persisted token first, then `QUESTIONNAIRE_TOKEN`
    pub fn resolve(config: &Config) -> Option<Credentials> {
        Self::resolve_with(config, std::env::var(TOKEN_ENV).ok())
    }

    fn resolve_with(config: &Config, env_token: Option<String>) -> Option<Credentials> {
        if let Some(token) = non_blank(config.authorization.clone()) {
            debug!("Using token from config file");
            return Some(Credentials {
                token,
                source: TokenSource::ConfigFile,
            });
        }

        non_blank(env_token).map(|token| {
            debug!("Using token from {}", TOKEN_ENV);
            Credentials {
                token,
                source: TokenSource::Environment,
            }
        })
    }

    /// Load a `.env` file into the process environment before resolving
    pub fn load_env_file(path: &str) -> Result<()> {
        info!("Importing from .env file: {}", path);

        if !Path::new(path).exists() {
            anyhow::bail!("Environment file not found: {}", path);
        }

        dotenvy::from_path(path)
            .map_err(|e| anyhow::anyhow!("Failed to load .env file '{}': {}", path, e))?;
        Ok(())
    }

    /// Token with everything but the last four characters masked
    pub fn masked(&self) -> String {
        let visible: String = self
            .token
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("****{}", visible)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_token_wins_over_environment() {
        let config = Config {
            authorization: Some("stored".to_string()),
            ..Config::default()
        };
        let creds = Credentials::resolve_with(&config, Some("env".to_string())).unwrap();
        assert_eq!(creds.token, "stored");
        assert_eq!(creds.source, TokenSource::ConfigFile);
    }

    #[test]
    fn test_environment_token_is_fallback() {
        let config = Config {
            authorization: Some(" ".to_string()),
            ..Config::default()
        };
        let creds = Credentials::resolve_with(&config, Some("env".to_string())).unwrap();
        assert_eq!(creds.token, "env");
        assert_eq!(creds.source, TokenSource::Environment);

        assert!(Credentials::resolve_with(&Config::default(), None).is_none());
    }

    #[test]
    fn test_masked_token() {
        let creds = Credentials {
            token: "abcdef123456".to_string(),
            source: TokenSource::Environment,
        };
        assert_eq!(creds.masked(), "****3456");
    }
}
