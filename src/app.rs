//! Application orchestration layer
//!
//! Wires the runtime configuration, request worker, input thread and renderer together
//! and runs the event loop. All view and session state lives on the loop; the worker
//! only ever sees commands and sends back responses.

use crate::api::{BackendApi, HttpBackend};
use crate::config::ConfigLoader;
use crate::error::Result;
use crate::input::{spawn_input_thread, InputAction};
use crate::render::protocol::{ApiCommand, ApiResponse};
use crate::render::ui::{UIRenderer, ViewState};
use crate::render::RenderLoopState;
use crate::settings::Settings;
use crate::worker::api_worker_loop;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
const CHANNEL_CAPACITY: usize = 32;

/// Application orchestrator
pub struct Application {
    backend: Arc<dyn BackendApi>,
    ui_renderer: Box<dyn UIRenderer>,
}

impl Application {
    /// Load the runtime configuration, then build the HTTP backend from it.
    ///
    /// Completes before anything is drawn. A missing or broken `config.json` is not an
    /// error here; the loader falls back to the default backend.
    pub async fn new(settings: &Settings, ui_renderer: Box<dyn UIRenderer>) -> Result<Self> {
        let http = settings.http_client()?;
        let config = ConfigLoader::new(http.clone(), &settings.origin)
            .load()
            .await;
        let backend: Arc<dyn BackendApi> = Arc::new(HttpBackend::new(config, http));
        Ok(Self::with_backend(backend, ui_renderer))
    }

    pub fn with_backend(backend: Arc<dyn BackendApi>, ui_renderer: Box<dyn UIRenderer>) -> Self {
        Self {
            backend,
            ui_renderer,
        }
    }

    /// Run against the real terminal until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread =
            spawn_input_thread(input_tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL);

        let outcome = self.run_with_input(input_rx).await;

        shutdown.store(true, Ordering::SeqCst);
        if input_thread.join().is_err() {
            log::error!("Input thread panicked");
        }

        outcome.map(|_| ())
    }

    /// Event loop fed by an arbitrary source of input actions.
    ///
    /// Returns the final view state once the input source asks to quit or closes.
    pub async fn run_with_input(
        &mut self,
        mut input_rx: mpsc::UnboundedReceiver<InputAction>,
    ) -> Result<ViewState> {
        self.ui_renderer.initialize()?;

        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(width, height);
        let mut loop_state = RenderLoopState::new();

        let (api_tx, api_rx) = mpsc::channel::<ApiCommand>(CHANNEL_CAPACITY);
        let (resp_tx, mut resp_rx) = mpsc::channel::<ApiResponse>(CHANNEL_CAPACITY);
        let worker = tokio::spawn(api_worker_loop(
            api_rx,
            resp_tx,
            Arc::clone(&self.backend),
        ));

        let outcome = self
            .event_loop(
                &mut input_rx,
                &mut resp_rx,
                &api_tx,
                &mut loop_state,
                &mut view_state,
            )
            .await;

        // Requests still in flight are abandoned; nobody is left to show them.
        worker.abort();

        self.ui_renderer.cleanup()?;
        outcome.map(|_| view_state)
    }

    async fn event_loop(
        &mut self,
        input_rx: &mut mpsc::UnboundedReceiver<InputAction>,
        resp_rx: &mut mpsc::Receiver<ApiResponse>,
        api_tx: &mpsc::Sender<ApiCommand>,
        loop_state: &mut RenderLoopState,
        view_state: &mut ViewState,
    ) -> Result<()> {
        self.ui_renderer.render(view_state)?;

        loop {
            tokio::select! {
                biased;

                Some(response) = resp_rx.recv() => {
                    loop_state.handle_response(response, view_state);
                }
                action = input_rx.recv() => {
                    let Some(action) = action else {
                        return Ok(());
                    };
                    if !loop_state.process_action(action, view_state, api_tx).await? {
                        return Ok(());
                    }
                }
            }

            self.ui_renderer.render(view_state)?;
        }
    }
}
