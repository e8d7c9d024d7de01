//! State read by the renderer on every frame.

use crate::session::{SessionController, ViewMode};
use crate::views::Screens;

/// Everything a frame needs: who is logged in, which screen, and each screen's fields
#[derive(Debug)]
pub struct ViewState {
    pub session: SessionController,
    pub screens: Screens,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    pub fn new(viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            session: SessionController::new(),
            screens: Screens::new(),
            viewport_width,
            viewport_height,
        }
    }

    pub fn active_view(&self) -> ViewMode {
        self.session.active_view()
    }

    /// `"Welcome {username}"` on the search screen
    pub fn header(&self) -> String {
        match self.active_view() {
            ViewMode::Search => format!("Welcome {}", self.session.username()),
            mode => mode.title().to_string(),
        }
    }

    /// Generic error banner of the active screen, if any
    pub fn error_banner(&self) -> Option<&'static str> {
        match self.active_view() {
            ViewMode::Login => self.screens.login.error(),
            ViewMode::Register => self.screens.register.error(),
            ViewMode::Search => None,
        }
    }

    /// Key hints for the footer
    pub fn hints(&self) -> &'static str {
        match self.active_view() {
            ViewMode::Login => "Enter login | Tab next field | F2 register | Esc quit",
            ViewMode::Register => "Enter register | Tab next field | F2 back to login | Esc quit",
            ViewMode::Search => "Enter search | Esc quit",
        }
    }

    /// Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_per_screen() {
        let mut state = ViewState::new(80, 24);
        assert_eq!(state.header(), "Login");

        state.session.switch_view(ViewMode::Register);
        assert_eq!(state.header(), "Register");

        state.session.on_login_success("T1", "Ann");
        assert_eq!(state.header(), "Welcome Ann");
    }

    #[test]
    fn test_error_banner_follows_active_screen() {
        let mut state = ViewState::new(80, 24);
        state.screens.register.on_failure();
        assert!(state.error_banner().is_none());

        state.session.switch_view(ViewMode::Register);
        assert_eq!(state.error_banner(), Some("Registration failed"));
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = ViewState::new(80, 24);
        assert!(!state.update_terminal_size(80, 24));
        assert!(state.update_terminal_size(120, 30));
        assert_eq!((state.viewport_width, state.viewport_height), (120, 30));
    }
}
