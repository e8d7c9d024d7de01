//! High-level input service.
//!
//! Consumes raw events, maps keys through the form key bindings, and yields
//! screen-independent `InputAction`s that the render coordinator consumes.

use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// High-level input actions emitted by the key map/service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    InsertChar(char),
    DeleteChar,
    FocusNext,
    FocusPrevious,
    Submit,
    /// Toggle between Login and Register
    SwitchScreen,
    Quit,
    Resize {
        width: u16,
        height: u16,
    },
    NoAction,
    InvalidInput,
}

/// Key bindings shared by every screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyMap;

impl KeyMap {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key_event.modifiers.contains(KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('c') if ctrl => InputAction::Quit,
            KeyCode::Char('r') if ctrl => InputAction::SwitchScreen,
            KeyCode::Esc => InputAction::Quit,
            KeyCode::F(2) => InputAction::SwitchScreen,
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Backspace => InputAction::DeleteChar,
            KeyCode::Tab | KeyCode::Down => InputAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => InputAction::FocusPrevious,
            KeyCode::Char(ch) if !ctrl && !alt && !ch.is_control() => InputAction::InsertChar(ch),
            _ => InputAction::InvalidInput,
        }
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    key_map: KeyMap,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            key_map: KeyMap::new(),
            raw_input: RawInputCollector::new(),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            actions.extend(self.process_raw_event(raw_event));

            while let Some(extra_event) = self.raw_input.pop_pending() {
                actions.extend(self.process_raw_event(extra_event));
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.pop_pending() {
            actions.extend(self.process_raw_event(raw_event));
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Vec<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.key_map.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Paste(text) => {
                return text
                    .chars()
                    .filter(|ch| !ch.is_control())
                    .map(InputAction::InsertChar)
                    .collect();
            }
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => Vec::new(),
            _ => vec![action],
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the event loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("Input thread error: {}", err);
                    break;
                }
            }
        }
    })
}
