//! Terminal input subsystem.
//!
//! `raw` polls crossterm and queues primitive events; `service` maps them onto the
//! key bindings shared by the three screens.

pub mod raw;
pub mod service;

pub use service::{spawn_input_thread, InputAction, InputService, KeyMap};
