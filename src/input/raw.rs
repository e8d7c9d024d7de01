//! Low-level input collection: crossterm polling, resize coalescing, and translation
//! into primitive events that the higher-level input service can consume.

use crate::error::Result;
use ratatui::crossterm::event::{self, Event, KeyEvent};
use std::collections::VecDeque;
use std::time::Duration;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    Paste(String),
}

/// Collector that polls crossterm for events.
///
/// Terminals emit bursts of resize events while a window is dragged; only the most
/// recent queued size is kept.
#[derive(Debug, Default)]
pub struct RawInputCollector {
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    pub fn new() -> Self {
        Self {
            pending_events: VecDeque::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Retrieve the next raw input event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.pop_pending() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));
        if !event::poll(poll_timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        self.enqueue_event(event);
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                if let Some(RawInputEvent::Resize { .. }) = self.pending_events.back() {
                    self.pending_events.pop_back();
                }
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            Event::Paste(text) => {
                self.pending_events.push_back(RawInputEvent::Paste(text));
            }
            _ => {}
        }
    }

    /// Pop the next pending raw event.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseEvent, MouseEventKind};

    fn key_press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn collapses_consecutive_resizes() {
        let mut collector = RawInputCollector::new();
        collector.process_event(Event::Resize(80, 24));
        collector.process_event(Event::Resize(100, 30));
        collector.process_event(Event::Resize(120, 40));

        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Resize {
                width: 120,
                height: 40
            })
        );
        assert!(collector.is_idle());
    }

    #[test]
    fn keeps_resize_separated_by_key() {
        let mut collector = RawInputCollector::new();
        collector.process_event(Event::Resize(80, 24));
        collector.process_event(key_press(KeyCode::Char('a')));
        collector.process_event(Event::Resize(100, 30));

        assert!(matches!(
            collector.pop_pending(),
            Some(RawInputEvent::Resize { width: 80, .. })
        ));
        assert!(matches!(
            collector.pop_pending(),
            Some(RawInputEvent::Key(_))
        ));
        assert!(matches!(
            collector.pop_pending(),
            Some(RawInputEvent::Resize { width: 100, .. })
        ));
    }

    #[test]
    fn ignores_mouse_events() {
        let mut collector = RawInputCollector::new();
        collector.process_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert!(collector.is_idle());
    }

    #[test]
    fn queues_paste() {
        let mut collector = RawInputCollector::new();
        collector.process_event(Event::Paste("acme.fr".to_string()));
        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Paste("acme.fr".to_string()))
        );
    }
}
