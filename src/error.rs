use thiserror::Error;

pub type Result<T> = std::result::Result<T, DdnsError>;

#[derive(Error, Debug)]
pub enum DdnsError {
    /// The request never produced a response (connect failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Cloudflare API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("No A record named {name} in zone {zone}")]
    RecordNotFound { zone: String, name: String },

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to discover public IP: {0}")]
    IpLookup(String),
}

impl DdnsError {
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }
}
