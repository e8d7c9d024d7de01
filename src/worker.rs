//! Request worker.
//!
//! Receives [`ApiCommand`]s from the coordinator and performs each one on its own task,
//! so a slow request never holds back the ones submitted after it. Responses are sent
//! back in the order they resolve. The worker itself never cancels a request.

use crate::api::BackendApi;
use crate::render::protocol::{ApiCommand, ApiResponse, Operation};
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinSet;

/// Run the request worker until `Shutdown` or until the command channel closes.
///
/// When the loop stops on its own, requests still in flight are awaited before it
/// returns. A caller that aborts the worker task abandons them instead.
pub async fn api_worker_loop(
    mut rx: Receiver<ApiCommand>,
    tx: Sender<ApiResponse>,
    backend: Arc<dyn BackendApi>,
) {
    let mut in_flight = JoinSet::new();

    while let Some(cmd) = rx.recv().await {
        if matches!(cmd, ApiCommand::Shutdown) {
            break;
        }

        let backend = Arc::clone(&backend);
        let tx = tx.clone();
        in_flight.spawn(async move {
            let response = perform(backend.as_ref(), cmd).await;
            if let Some(response) = response {
                // The coordinator may already be gone; nothing left to notify.
                let _ = tx.send(response).await;
            }
        });

        // Reap finished tasks so the set does not grow without bound.
        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}
}

async fn perform(backend: &dyn BackendApi, cmd: ApiCommand) -> Option<ApiResponse> {
    let response = match cmd {
        ApiCommand::Login {
            request_id,
            request,
        } => {
            log::debug!("[{request_id}] login as {}", request.email);
            match backend.login(&request).await {
                Ok(response) => ApiResponse::LoggedIn {
                    request_id,
                    response,
                },
                Err(error) => ApiResponse::Failed {
                    request_id,
                    operation: Operation::Login,
                    error,
                },
            }
        }
        ApiCommand::Register {
            request_id,
            request,
        } => {
            log::debug!("[{request_id}] register {}", request.username);
            match backend.register(&request).await {
                Ok(()) => ApiResponse::Registered { request_id },
                Err(error) => ApiResponse::Failed {
                    request_id,
                    operation: Operation::Register,
                    error,
                },
            }
        }
        ApiCommand::Search {
            request_id,
            token,
            query,
        } => {
            log::debug!("[{request_id}] search domain={:?}", query.domain);
            match backend.search(&token, &query).await {
                Ok(response) => ApiResponse::SearchCompleted {
                    request_id,
                    response,
                },
                Err(error) => ApiResponse::Failed {
                    request_id,
                    operation: Operation::Search,
                    error,
                },
            }
        }
        ApiCommand::Shutdown => return None,
    };
    Some(response)
}
