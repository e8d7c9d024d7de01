//! Runtime configuration loaded once at startup.
//!
//! The backend base URL is published by whoever serves the client as a small JSON
//! document at `/config.json`. The loader fetches it once, before the first screen is
//! drawn, and falls back to [`DEFAULT_API_BASE_URL`] on any failure. The resulting
//! [`RuntimeConfig`] is handed to every component that issues requests.

use crate::error::{LookupError, Result};
use serde::Deserialize;

/// Backend used when `config.json` cannot be fetched or parsed.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Well-known path of the configuration document, relative to the origin.
pub const CONFIG_PATH: &str = "/config.json";

/// Process-wide configuration, read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    api_base_url: String,
}

impl RuntimeConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let url: String = api_base_url.into();
        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Join an API path such as `/api/login` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Wire shape of `config.json`. Older deployments publish `API_URL`.
#[derive(Debug, Deserialize)]
struct ConfigDocument {
    #[serde(rename = "apiBaseUrl", alias = "API_URL")]
    api_base_url: Option<String>,
}

/// Fetches `config.json` from the origin that serves the client.
pub struct ConfigLoader {
    http: reqwest::Client,
    origin: String,
}

impl ConfigLoader {
    pub fn new(http: reqwest::Client, origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            http,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the configuration document.
    pub fn document_url(&self) -> String {
        format!("{}{}", self.origin, CONFIG_PATH)
    }

    /// Fetch and validate the configuration document.
    pub async fn fetch(&self) -> Result<RuntimeConfig> {
        let response = self.http.get(self.document_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::status(status.as_u16(), None));
        }

        let body = response.text().await?;
        let document: ConfigDocument =
            serde_json::from_str(&body).map_err(|e| LookupError::decode(e.to_string()))?;

        match document.api_base_url {
            Some(url) if !url.trim().is_empty() => Ok(RuntimeConfig::new(url.trim())),
            _ => Err(LookupError::config("apiBaseUrl missing from config.json")),
        }
    }

    /// Fetch the configuration, absorbing any failure into the default.
    pub async fn load(&self) -> RuntimeConfig {
        match self.fetch().await {
            Ok(config) => {
                log::info!(
                    "Loaded runtime config from {}: api base {}",
                    self.document_url(),
                    config.api_base_url()
                );
                config
            }
            Err(err) => {
                log::warn!(
                    "Falling back to {} ({} unavailable: {})",
                    DEFAULT_API_BASE_URL,
                    self.document_url(),
                    err
                );
                RuntimeConfig::default()
            }
        }
    }
}
