//! Backend API abstraction.
//!
//! The client talks to three backend endpoints (login, register, search). They are
//! exposed through the [`BackendApi`] trait so the request worker can be driven by the
//! real HTTP implementation or by an in-memory double in tests.

pub mod client;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;

pub use client::HttpBackend;
pub use types::{
    CompanyRecord, LoginRequest, LoginResponse, RegisterRequest, SearchQuery, SearchResponse,
};

/// Core trait for backend operations.
///
/// Every method performs exactly one request. Implementations never retry.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `POST /api/login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// `POST /api/register`. Any 2xx is success; the body is ignored.
    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    /// `GET /api/search` with a bearer token
    async fn search(&self, token: &str, query: &SearchQuery) -> Result<SearchResponse>;
}
