//! Rendering subsystem.
//!
//! `protocol` defines the messages exchanged with the request worker, `service` folds
//! input and responses into state, and `ui` draws that state.

pub mod protocol;
pub mod service;
pub mod ui;

pub use service::RenderLoopState;
