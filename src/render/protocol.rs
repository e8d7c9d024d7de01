//! Protocol definitions shared between the render coordinator and the request worker.

use crate::api::{LoginRequest, LoginResponse, RegisterRequest, SearchQuery, SearchResponse};
use crate::error::LookupError;

/// Identifier attached to each request so responses can be correlated in logs.
pub type RequestId = u64;

/// Commands sent from the render coordinator to the request worker.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    Login {
        request_id: RequestId,
        request: LoginRequest,
    },
    Register {
        request_id: RequestId,
        request: RegisterRequest,
    },
    Search {
        request_id: RequestId,
        token: String,
        query: SearchQuery,
    },
    Shutdown,
}

/// Responses emitted by the request worker back to the coordinator.
#[derive(Debug)]
pub enum ApiResponse {
    LoggedIn {
        request_id: RequestId,
        response: LoginResponse,
    },
    Registered {
        request_id: RequestId,
    },
    SearchCompleted {
        request_id: RequestId,
        response: SearchResponse,
    },
    Failed {
        request_id: RequestId,
        operation: Operation,
        error: LookupError,
    },
}

impl ApiResponse {
    pub fn request_id(&self) -> RequestId {
        match self {
            ApiResponse::LoggedIn { request_id, .. }
            | ApiResponse::Registered { request_id }
            | ApiResponse::SearchCompleted { request_id, .. }
            | ApiResponse::Failed { request_id, .. } => *request_id,
        }
    }
}

/// Which backend operation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    Search,
}
