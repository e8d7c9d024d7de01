//! reqwest-backed implementation of [`BackendApi`].

use super::types::{
    ErrorBody, LoginRequest, LoginResponse, RegisterRequest, SearchQuery, SearchResponse,
};
use super::BackendApi;
use crate::config::RuntimeConfig;
use crate::error::{LookupError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const LOGIN_PATH: &str = "/api/login";
const REGISTER_PATH: &str = "/api/register";
const SEARCH_PATH: &str = "/api/search";

/// HTTP backend client.
///
/// The base URL comes from the [`RuntimeConfig`] produced at startup; there is no
/// other way to point it somewhere else.
pub struct HttpBackend {
    config: RuntimeConfig,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: RuntimeConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Turn a non-2xx response into a status error, keeping the backend reason
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .map(|body| body.error);
        Err(LookupError::status(status.as_u16(), reason))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::decode(e.to_string()))
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let response = self
            .http
            .post(self.config.endpoint(LOGIN_PATH))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let response = self
            .http
            .post(self.config.endpoint(REGISTER_PATH))
            .json(request)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn search(&self, token: &str, query: &SearchQuery) -> Result<SearchResponse> {
        let response = self
            .http
            .get(self.config.endpoint(SEARCH_PATH))
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }
}
