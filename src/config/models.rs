use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_IP_SERVICE_URL: &str = "https://ifconfig.me";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    #[serde(default)]
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: String,

    #[serde(default = "default_api_base_url")]
    #[validate(url(message = "API base URL must be a valid URL"))]
    pub api_base_url: String,

    #[serde(default = "default_ip_service_url")]
    #[validate(url(message = "IP service URL must be a valid URL"))]
    pub ip_service_url: String,

    /// Per-request timeout. Defaults to 60 seconds; there is no retry.
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, message = "Timeout must be greater than 0"))]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            api_base_url: default_api_base_url(),
            ip_service_url: default_ip_service_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// The token must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<REDACTED>")
            .field("api_base_url", &self.api_base_url)
            .field("ip_service_url", &self.ip_service_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_ip_service_url() -> String {
    DEFAULT_IP_SERVICE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
