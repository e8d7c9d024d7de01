//! Session controller: authentication state and screen selection.
//!
//! The controller is the single source of truth for the token, the username and
//! which screen is active. All changes go through [`SessionController::apply`]; the
//! public helpers are thin wrappers around it.
//!
//! The screen rule is simple: without a token the stored Login/Register mode is
//! shown; with a token the Search screen is shown no matter what mode is stored.
//! There is no way back once authenticated.

/// Screen selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Login,
    Register,
    Search,
}

impl ViewMode {
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Login => "Login",
            ViewMode::Register => "Register",
            ViewMode::Search => "Search",
        }
    }
}

/// In-memory authentication record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    username: String,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Inputs to the session state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoginSucceeded { token: String, username: String },
    SwitchView(ViewMode),
}

/// Outcome of applying a [`SessionEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The active screen changed from one mode to another
    Entered { from: ViewMode, to: ViewMode },
    /// State may have been updated but the active screen is the same
    Stayed(ViewMode),
    /// The event is not allowed in the current state
    Rejected(ViewMode),
}

impl Transition {
    /// Screen that is active after the transition
    pub fn active(&self) -> ViewMode {
        match *self {
            Transition::Entered { to, .. } => to,
            Transition::Stayed(mode) | Transition::Rejected(mode) => mode,
        }
    }

    pub fn changed(&self) -> bool {
        matches!(self, Transition::Entered { .. })
    }
}

/// Owner of `{ token, username, view mode }`
#[derive(Debug, Clone)]
pub struct SessionController {
    session: Session,
    mode: ViewMode,
}

impl SessionController {
    /// Unauthenticated, showing Login
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            mode: ViewMode::Login,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Bearer token for authenticated requests
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn username(&self) -> &str {
        self.session.username()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The screen to render
    pub fn active_view(&self) -> ViewMode {
        if self.session.is_authenticated() {
            ViewMode::Search
        } else {
            self.mode
        }
    }

    /// Store the login result and move to Search.
    pub fn on_login_success(
        &mut self,
        token: impl Into<String>,
        username: impl Into<String>,
    ) -> Transition {
        self.apply(SessionEvent::LoginSucceeded {
            token: token.into(),
            username: username.into(),
        })
    }

    /// Change between the unauthenticated screens.
    pub fn switch_view(&mut self, mode: ViewMode) -> Transition {
        self.apply(SessionEvent::SwitchView(mode))
    }

    /// The one transition function.
    pub fn apply(&mut self, event: SessionEvent) -> Transition {
        let before = self.active_view();

        match event {
            SessionEvent::LoginSucceeded { token, username } => {
                self.session.token = Some(token);
                self.session.username = username;
                self.mode = ViewMode::Search;
            }
            SessionEvent::SwitchView(target) => {
                if self.session.is_authenticated() || target == ViewMode::Search {
                    return Transition::Rejected(before);
                }
                self.mode = target;
            }
        }

        let after = self.active_view();
        if before == after {
            Transition::Stayed(after)
        } else {
            Transition::Entered {
                from: before,
                to: after,
            }
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
