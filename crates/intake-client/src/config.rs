use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the persistence and tracking endpoints live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `INTAKE_API_BASE_URL`, falling back to the local dev server.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            env::var("INTAKE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::validated(base_url)
    }

    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        let config: ClientConfig = serde_json::from_str(json)?;
        Self::validated(config.base_url)
    }

    fn validated(base_url: String) -> Result<Self, ClientError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got '{base_url}'"
            )));
        }
        Ok(Self { base_url })
    }
}
