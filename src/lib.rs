//! # siren-lookup - Terminal client for company lookups
//!
//! A keyboard-driven client for a backend that authenticates users and scores companies
//! (SIREN numbers) against a web domain.
//!
//! ## Features
//!
//! - **Runtime Configuration**: Backend address read from the serving origin's `config.json`
//! - **Session Flow**: Login, registration and search screens driven by one state machine
//! - **Concurrent Requests**: Every request runs on its own task; the UI never blocks on the network
//! - **Terminal UI**: Masked password fields, focus cycling and color themes
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Runtime configuration discovery
//! - [`api`] - Backend wire types and the HTTP client
//! - [`session`] - Session and view state machine
//! - [`views`] - Per-screen form state
//! - [`input`] - Terminal input collection and key bindings
//! - [`render`] - Worker protocol, state folding and terminal drawing
//! - [`worker`] - Request worker
//! - [`settings`] - Local settings file and command-line overrides
//! - [`app`] - Application core and component coordination

// Core modules
pub mod error;
pub mod config;
pub mod settings;

// Backend and state
pub mod api;
pub mod session;
pub mod views;

// Subsystems
pub mod input;
pub mod render;
pub mod worker;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{LookupError, Result};

// Public API surface for external usage
pub use api::{BackendApi, HttpBackend};
pub use app::Application;
pub use config::{ConfigLoader, RuntimeConfig};
pub use session::{SessionController, ViewMode};
pub use settings::Settings;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
