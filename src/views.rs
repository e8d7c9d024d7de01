//! Per-screen local state.
//!
//! Each screen owns its fields and its own failure flag. Entering a screen starts it
//! from a blank state, the way the forms behave when they are first shown.

pub mod form;
pub mod login;
pub mod register;
pub mod search;

pub use form::{Form, TextField};
pub use login::{LoginForm, LOGIN_FAILED};
pub use register::{RegisterForm, REGISTRATION_FAILED};
pub use search::SearchView;

use crate::session::ViewMode;

/// Local state of all three screens
#[derive(Debug, Clone, Default)]
pub struct Screens {
    pub login: LoginForm,
    pub register: RegisterForm,
    pub search: SearchView,
}

impl Screens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editable form of the given screen
    pub fn form_mut(&mut self, mode: ViewMode) -> &mut Form {
        match mode {
            ViewMode::Login => self.login.form_mut(),
            ViewMode::Register => self.register.form_mut(),
            ViewMode::Search => self.search.form_mut(),
        }
    }

    /// Discard the local state of a screen that is being entered
    pub fn reset(&mut self, mode: ViewMode) {
        match mode {
            ViewMode::Login => self.login = LoginForm::new(),
            ViewMode::Register => self.register = RegisterForm::new(),
            ViewMode::Search => self.search = SearchView::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_only_touches_target_screen() {
        let mut screens = Screens::new();
        screens.form_mut(ViewMode::Login).insert_char('a');
        screens.form_mut(ViewMode::Register).insert_char('b');

        screens.reset(ViewMode::Register);

        assert_eq!(screens.login.email(), "a");
        assert_eq!(screens.register.form().field(0), "");
    }
}
