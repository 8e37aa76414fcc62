//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameIntent`] values and
//! tracks the held soft-drop key in terminals that never report key
//! releases.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, wants_pause, wants_restart};
