//! Registration screen state.

use super::form::{Form, TextField};
use crate::api::RegisterRequest;

/// Message shown for every registration failure
pub const REGISTRATION_FAILED: &str = "Registration failed";

const USERNAME: usize = 0;
const EMAIL: usize = 1;
const PASSWORD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    form: Form,
    failed: bool,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                TextField::new("Username"),
                TextField::new("Email"),
                TextField::masked("Password"),
            ]),
            failed: false,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn error(&self) -> Option<&'static str> {
        self.failed.then_some(REGISTRATION_FAILED)
    }

    pub fn submit(&mut self) -> RegisterRequest {
        self.failed = false;
        RegisterRequest {
            username: self.form.field(USERNAME).to_string(),
            email: self.form.field(EMAIL).to_string(),
            password: self.form.field(PASSWORD).to_string(),
        }
    }

    pub fn on_failure(&mut self) {
        self.failed = true;
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}
