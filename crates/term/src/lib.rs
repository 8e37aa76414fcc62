//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and the renderer flushes framebuffers to the terminal with
//! diffed updates. No widget or layout framework sits in between.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Make every drawing decision testable against the framebuffer
//! - Control the board aspect ratio precisely (e.g. 2 columns per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
