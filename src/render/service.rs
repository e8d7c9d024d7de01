//! Render coordination.
//!
//! Mediates between input actions, API commands and view updates. Input actions edit
//! the active screen or submit it; submitting turns into one [`ApiCommand`] for the
//! request worker. Worker responses are folded back into the session and the screens
//! as they arrive.

use crate::error::{LookupError, Result};
use crate::input::InputAction;
use crate::render::protocol::{ApiCommand, ApiResponse, Operation, RequestId};
use crate::render::ui::ViewState;
use crate::session::{Transition, ViewMode};
use tokio::sync::mpsc;

/// Tracks coordinator state that must persist across input actions and worker responses.
#[derive(Debug)]
pub struct RenderLoopState {
    next_request_id: RequestId,
}

impl Default for RenderLoopState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoopState {
    pub fn new() -> Self {
        Self { next_request_id: 1 }
    }

    /// Apply one input action. Returns false when the application should quit.
    pub async fn process_action(
        &mut self,
        action: InputAction,
        view_state: &mut ViewState,
        api_tx: &mpsc::Sender<ApiCommand>,
    ) -> Result<bool> {
        let active = view_state.active_view();

        match action {
            InputAction::Quit => return Ok(false),
            InputAction::InsertChar(ch) => view_state.screens.form_mut(active).insert_char(ch),
            InputAction::DeleteChar => view_state.screens.form_mut(active).delete_char(),
            InputAction::FocusNext => view_state.screens.form_mut(active).focus_next(),
            InputAction::FocusPrevious => view_state.screens.form_mut(active).focus_previous(),
            InputAction::SwitchScreen => {
                let target = match active {
                    ViewMode::Login => ViewMode::Register,
                    ViewMode::Register | ViewMode::Search => ViewMode::Login,
                };
                let transition = view_state.session.switch_view(target);
                Self::enter(transition, view_state);
            }
            InputAction::Submit => {
                let command = self.submit(active, view_state);
                if let Some(command) = command {
                    api_tx
                        .send(command)
                        .await
                        .map_err(|_| LookupError::WorkerUnavailable)?;
                }
            }
            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
            }
            InputAction::NoAction | InputAction::InvalidInput => {}
        }

        Ok(true)
    }

    /// Fold one worker response into the session and screens.
    pub fn handle_response(&mut self, response: ApiResponse, view_state: &mut ViewState) {
        match response {
            ApiResponse::LoggedIn {
                request_id,
                response,
            } => {
                log::info!("[{request_id}] logged in as {}", response.username);
                let transition = view_state
                    .session
                    .on_login_success(response.token, response.username);
                Self::enter(transition, view_state);
            }
            ApiResponse::Registered { request_id } => {
                log::info!("[{request_id}] registration accepted");
                let transition = view_state.session.switch_view(ViewMode::Login);
                Self::enter(transition, view_state);
            }
            ApiResponse::SearchCompleted {
                request_id,
                response,
            } => {
                log::debug!(
                    "[{request_id}] search returned {} results for {:?}",
                    response.results.len(),
                    response.name
                );
                view_state.screens.search.on_results(response);
            }
            ApiResponse::Failed {
                request_id,
                operation,
                error,
            } => Self::handle_failure(request_id, operation, error, view_state),
        }
    }

    fn handle_failure(
        request_id: RequestId,
        operation: Operation,
        error: LookupError,
        view_state: &mut ViewState,
    ) {
        let active = view_state.active_view();
        match operation {
            Operation::Login => {
                log::debug!("[{request_id}] login failed: {error}");
                if active == ViewMode::Login {
                    view_state.screens.login.on_failure();
                }
            }
            Operation::Register => {
                log::debug!("[{request_id}] registration failed: {error}");
                if active == ViewMode::Register {
                    view_state.screens.register.on_failure();
                }
            }
            Operation::Search => {
                log::warn!("[{request_id}] search failed: {error}");
                view_state.screens.search.on_failure();
            }
        }
    }

    fn submit(&mut self, active: ViewMode, view_state: &mut ViewState) -> Option<ApiCommand> {
        let request_id = self.next_request_id;

        let command = match active {
            ViewMode::Login => ApiCommand::Login {
                request_id,
                request: view_state.screens.login.submit(),
            },
            ViewMode::Register => ApiCommand::Register {
                request_id,
                request: view_state.screens.register.submit(),
            },
            ViewMode::Search => {
                let token = view_state.session.token()?.to_string();
                ApiCommand::Search {
                    request_id,
                    token,
                    query: view_state.screens.search.submit(),
                }
            }
        };

        self.next_request_id += 1;
        Some(command)
    }

    /// A screen that becomes active starts from blank local state
    fn enter(transition: Transition, view_state: &mut ViewState) {
        if let Transition::Entered { to, .. } = transition {
            view_state.screens.reset(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CompanyRecord, LoginResponse, SearchQuery, SearchResponse};

    fn setup() -> (
        RenderLoopState,
        ViewState,
        mpsc::Sender<ApiCommand>,
        mpsc::Receiver<ApiCommand>,
    ) {
        let (tx, rx) = mpsc::channel(8);
        (RenderLoopState::new(), ViewState::new(80, 24), tx, rx)
    }

    async fn type_text(
        state: &mut RenderLoopState,
        view: &mut ViewState,
        tx: &mpsc::Sender<ApiCommand>,
        text: &str,
    ) {
        for ch in text.chars() {
            state
                .process_action(InputAction::InsertChar(ch), view, tx)
                .await
                .unwrap();
        }
    }

    fn logged_in(request_id: RequestId, token: &str, username: &str) -> ApiResponse {
        ApiResponse::LoggedIn {
            request_id,
            response: LoginResponse {
                token: token.to_string(),
                username: username.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_login_submit_sends_credentials() {
        let (mut state, mut view, tx, mut rx) = setup();
        type_text(&mut state, &mut view, &tx, "a@b.com").await;
        state
            .process_action(InputAction::FocusNext, &mut view, &tx)
            .await
            .unwrap();
        type_text(&mut state, &mut view, &tx, "x").await;
        state
            .process_action(InputAction::Submit, &mut view, &tx)
            .await
            .unwrap();

        match rx.recv().await.unwrap() {
            ApiCommand::Login {
                request_id,
                request,
            } => {
                assert_eq!(request_id, 1);
                assert_eq!(request.email, "a@b.com");
                assert_eq!(request.password, "x");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_success_switches_to_search() {
        let (mut state, mut view, _tx, _rx) = setup();
        state.handle_response(logged_in(1, "T1", "Ann"), &mut view);

        assert_eq!(view.active_view(), ViewMode::Search);
        assert_eq!(view.session.token(), Some("T1"));
        assert_eq!(view.header(), "Welcome Ann");
    }

    #[tokio::test]
    async fn test_login_failure_sets_banner_without_touching_session() {
        let (mut state, mut view, _tx, _rx) = setup();
        state.handle_response(
            ApiResponse::Failed {
                request_id: 1,
                operation: Operation::Login,
                error: LookupError::status(401, None),
            },
            &mut view,
        );

        assert_eq!(view.active_view(), ViewMode::Login);
        assert_eq!(view.error_banner(), Some("Login failed"));
        assert!(view.session.token().is_none());
    }

    #[tokio::test]
    async fn test_register_failure_sets_banner_without_touching_session() {
        let (mut state, mut view, tx, _rx) = setup();
        state
            .process_action(InputAction::SwitchScreen, &mut view, &tx)
            .await
            .unwrap();
        state.handle_response(
            ApiResponse::Failed {
                request_id: 1,
                operation: Operation::Register,
                error: LookupError::status(409, Some("Email already registered".to_string())),
            },
            &mut view,
        );

        assert_eq!(view.active_view(), ViewMode::Register);
        assert_eq!(view.error_banner(), Some("Registration failed"));
        assert!(view.session.token().is_none());
        assert!(!view.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_late_login_failure_dropped_on_register_screen() {
        let (mut state, mut view, tx, _rx) = setup();
        state
            .process_action(InputAction::Submit, &mut view, &tx)
            .await
            .unwrap();
        state
            .process_action(InputAction::SwitchScreen, &mut view, &tx)
            .await
            .unwrap();
        state.handle_response(
            ApiResponse::Failed {
                request_id: 1,
                operation: Operation::Login,
                error: LookupError::status(401, None),
            },
            &mut view,
        );

        assert_eq!(view.active_view(), ViewMode::Register);
        assert!(view.error_banner().is_none());
        assert!(view.screens.login.error().is_none());
    }

    #[tokio::test]
    async fn test_search_failure_keeps_previous_results() {
        let (mut state, mut view, _tx, _rx) = setup();
        state.handle_response(logged_in(1, "T1", "Ann"), &mut view);
        state.handle_response(
            ApiResponse::SearchCompleted {
                request_id: 2,
                response: SearchResponse {
                    name: "ACME Corp".to_string(),
                    results: vec![CompanyRecord {
                        siren: "123".to_string(),
                        nom_raison_sociale: "Acme".to_string(),
                        score: 0.8,
                    }],
                },
            },
            &mut view,
        );
        state.handle_response(
            ApiResponse::Failed {
                request_id: 3,
                operation: Operation::Search,
                error: LookupError::status(500, None),
            },
            &mut view,
        );

        assert_eq!(view.active_view(), ViewMode::Search);
        assert_eq!(view.screens.search.name(), "ACME Corp");
        assert_eq!(
            view.screens.search.result_lines(),
            vec!["Acme - SIREN 123 - Score 0.80"]
        );
        assert!(view.error_banner().is_none());
        assert_eq!(view.session.token(), Some("T1"));
    }

    #[tokio::test]
    async fn test_switch_screen_resets_entered_form() {
        let (mut state, mut view, tx, _rx) = setup();
        state
            .process_action(InputAction::SwitchScreen, &mut view, &tx)
            .await
            .unwrap();
        assert_eq!(view.active_view(), ViewMode::Register);
        type_text(&mut state, &mut view, &tx, "ann").await;

        state
            .process_action(InputAction::SwitchScreen, &mut view, &tx)
            .await
            .unwrap();
        state
            .process_action(InputAction::SwitchScreen, &mut view, &tx)
            .await
            .unwrap();
        assert_eq!(view.active_view(), ViewMode::Register);
        assert_eq!(view.screens.register.form().field(0), "");
    }

    #[tokio::test]
    async fn test_register_success_returns_to_login() {
        let (mut state, mut view, tx, _rx) = setup();
        state
            .process_action(InputAction::SwitchScreen, &mut view, &tx)
            .await
            .unwrap();
        state.handle_response(ApiResponse::Registered { request_id: 1 }, &mut view);

        assert_eq!(view.active_view(), ViewMode::Login);
        assert!(view.error_banner().is_none());
        assert!(!view.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_switch_screen_ignored_once_authenticated() {
        let (mut state, mut view, tx, _rx) = setup();
        state.handle_response(logged_in(1, "T1", "Ann"), &mut view);
        state
            .process_action(InputAction::SwitchScreen, &mut view, &tx)
            .await
            .unwrap();
        assert_eq!(view.active_view(), ViewMode::Search);
    }

    #[tokio::test]
    async fn test_search_submit_attaches_token() {
        let (mut state, mut view, tx, mut rx) = setup();
        state.handle_response(logged_in(1, "T1", "Ann"), &mut view);
        type_text(&mut state, &mut view, &tx, "acme").await;
        state
            .process_action(InputAction::Submit, &mut view, &tx)
            .await
            .unwrap();

        match rx.recv().await.unwrap() {
            ApiCommand::Search { token, query, .. } => {
                assert_eq!(token, "T1");
                assert_eq!(query, SearchQuery::domain("acme"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_results_follow_resolution_order() {
        let (mut state, mut view, _tx, _rx) = setup();
        state.handle_response(logged_in(1, "T1", "Ann"), &mut view);

        let response = |name: &str, siren: &str| ApiResponse::SearchCompleted {
            request_id: 0,
            response: SearchResponse {
                name: name.to_string(),
                results: vec![CompanyRecord {
                    siren: siren.to_string(),
                    nom_raison_sociale: name.to_string(),
                    score: 0.5,
                }],
            },
        };

        // Request 3 resolves before request 2.
        state.handle_response(response("Later", "3"), &mut view);
        state.handle_response(response("Earlier", "2"), &mut view);

        assert_eq!(view.screens.search.name(), "Earlier");
        assert_eq!(
            view.screens.search.result_lines(),
            vec!["Earlier - SIREN 2 - Score 0.50"]
        );
    }

    #[tokio::test]
    async fn test_quit_stops_loop() {
        let (mut state, mut view, tx, _rx) = setup();
        let keep_running = state
            .process_action(InputAction::Quit, &mut view, &tx)
            .await
            .unwrap();
        assert!(!keep_running);
    }

    #[tokio::test]
    async fn test_submit_fails_when_worker_gone() {
        let (mut state, mut view, tx, rx) = setup();
        drop(rx);
        let result = state
            .process_action(InputAction::Submit, &mut view, &tx)
            .await;
        assert!(matches!(result, Err(LookupError::WorkerUnavailable)));
    }
}
