mod models;

pub use models::{Config, DEFAULT_API_BASE_URL, DEFAULT_IP_SERVICE_URL, DEFAULT_TIMEOUT_SECS};

use anyhow::{Context, Result};
use std::{fs, path::Path};
use validator::Validate;

/// Environment variable holding the Cloudflare API token.
pub const API_TOKEN_ENV: &str = "CLOUDFLARE_API_KEY";

impl Config {
    /// Loads the configuration once at startup. The YAML file is optional;
    /// `CLOUDFLARE_API_KEY` takes precedence over any token it contains.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let token = std::env::var(API_TOKEN_ENV).ok();
        Self::resolve(path, token)
    }

    pub(crate) fn resolve(path: Option<&Path>, token_override: Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(token) = token_override.filter(|t| !t.is_empty()) {
            config.api_token = token;
        }

        config
            .validate()
            .with_context(|| format!("Invalid configuration (set {} or api_token)", API_TOKEN_ENV))?;

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
