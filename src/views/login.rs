//! Login screen state.

use super::form::{Form, TextField};
use crate::api::LoginRequest;

/// Message shown for every login failure
pub const LOGIN_FAILED: &str = "Login failed";

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    form: Form,
    failed: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![TextField::new("Email"), TextField::masked("Password")]),
            failed: false,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn email(&self) -> &str {
        self.form.field(EMAIL)
    }

    pub fn password(&self) -> &str {
        self.form.field(PASSWORD)
    }

    /// Generic error banner, if the last attempt failed
    pub fn error(&self) -> Option<&'static str> {
        self.failed.then_some(LOGIN_FAILED)
    }

    /// Clear the error flag and build the request for this attempt
    pub fn submit(&mut self) -> LoginRequest {
        self.failed = false;
        LoginRequest {
            email: self.email().to_string(),
            password: self.password().to_string(),
        }
    }

    pub fn on_failure(&mut self) {
        self.failed = true;
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}
