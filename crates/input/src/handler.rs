//! Soft-drop hold tracking for terminal environments.
//!
//! Most terminals never emit key release events, so a held Down key arrives
//! as a stream of repeated presses. The handler latches soft drop on the
//! first press, lets every repeat refresh the latch, and synthesizes the
//! release once the presses stop for longer than a grace window.

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::map::handle_key_event;
use crate::types::{GameIntent, SOFT_DROP_GRACE_MS};

/// Tracks the held state of the soft-drop key.
#[derive(Debug, Clone)]
pub struct InputHandler {
    down_held: bool,
    last_down: Instant,
    release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            down_held: false,
            last_down: Instant::now(),
            release_timeout_ms: SOFT_DROP_GRACE_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.down_held
    }

    /// Map a key press to an intent, tracking the soft-drop latch.
    ///
    /// The engage intent is edge-triggered: the first Down press produces
    /// `SoftDrop(true)`, and terminal auto-repeat presses only refresh the
    /// latch without producing anything.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameIntent> {
        let intent = handle_key_event(key)?;

        if let GameIntent::SoftDrop(true) = intent {
            self.last_down = Instant::now();
            if self.down_held {
                return None;
            }
            self.down_held = true;
        }

        Some(intent)
    }

    /// Handle an explicit key release, for the rare terminal that reports
    /// them.
    pub fn handle_key_release(&mut self, key: KeyEvent) -> Option<GameIntent> {
        if let Some(GameIntent::SoftDrop(true)) = handle_key_event(key) {
            if self.down_held {
                self.down_held = false;
                return Some(GameIntent::SoftDrop(false));
            }
        }
        None
    }

    /// Call once per frame; synthesizes the release once the press stream
    /// has gone quiet for longer than the grace window.
    pub fn update(&mut self) -> Option<GameIntent> {
        if self.down_held {
            let quiet_ms = self.last_down.elapsed().as_millis() as u32;
            if quiet_ms > self.release_timeout_ms {
                self.down_held = false;
                return Some(GameIntent::SoftDrop(false));
            }
        }
        None
    }

    pub fn reset(&mut self) {
        self.down_held = false;
        self.last_down = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use std::time::Duration;

    #[test]
    fn test_first_down_press_engages_soft_drop() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Down)),
            Some(GameIntent::SoftDrop(true))
        );
        assert!(ih.is_soft_dropping());
    }

    #[test]
    fn test_repeat_presses_do_not_retrigger() {
        let mut ih = InputHandler::new();
        assert!(ih.handle_key_press(KeyEvent::from(KeyCode::Down)).is_some());
        assert_eq!(ih.handle_key_press(KeyEvent::from(KeyCode::Down)), None);
        assert!(ih.is_soft_dropping());
    }

    #[test]
    fn test_release_synthesized_after_grace_window() {
        let mut ih = InputHandler::new().with_release_timeout_ms(50);
        assert!(ih.handle_key_press(KeyEvent::from(KeyCode::Down)).is_some());

        // Simulate a quiet press stream by backdating the last press.
        ih.last_down = Instant::now() - Duration::from_millis(51);

        assert_eq!(ih.update(), Some(GameIntent::SoftDrop(false)));
        assert!(!ih.is_soft_dropping());
        assert_eq!(ih.update(), None);
    }

    #[test]
    fn test_repeats_keep_the_latch_alive() {
        let mut ih = InputHandler::new().with_release_timeout_ms(50);
        assert!(ih.handle_key_press(KeyEvent::from(KeyCode::Down)).is_some());

        // An auto-repeat press arrives just before the window expires.
        ih.last_down = Instant::now() - Duration::from_millis(40);
        assert_eq!(ih.handle_key_press(KeyEvent::from(KeyCode::Down)), None);

        assert_eq!(ih.update(), None);
        assert!(ih.is_soft_dropping());
    }

    #[test]
    fn test_explicit_release_event() {
        let mut ih = InputHandler::new();
        assert!(ih.handle_key_press(KeyEvent::from(KeyCode::Down)).is_some());
        assert_eq!(
            ih.handle_key_release(KeyEvent::from(KeyCode::Down)),
            Some(GameIntent::SoftDrop(false))
        );
        assert!(!ih.is_soft_dropping());

        // A stray release with nothing held produces nothing.
        assert_eq!(ih.handle_key_release(KeyEvent::from(KeyCode::Down)), None);
    }

    #[test]
    fn test_other_keys_pass_through_untouched() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Left)),
            Some(GameIntent::MoveLeft)
        );
        assert_eq!(
            ih.handle_key_press(KeyEvent::from(KeyCode::Up)),
            Some(GameIntent::Rotate)
        );
        assert!(!ih.is_soft_dropping());
        assert_eq!(ih.handle_key_release(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_reset_clears_the_latch() {
        let mut ih = InputHandler::new().with_release_timeout_ms(50);
        assert!(ih.handle_key_press(KeyEvent::from(KeyCode::Down)).is_some());

        ih.reset();
        assert!(!ih.is_soft_dropping());

        ih.last_down = Instant::now() - Duration::from_millis(500);
        assert_eq!(ih.update(), None);
    }

    #[test]
    fn test_default_grace_window_is_non_zero() {
        let ih = InputHandler::new();
        assert!(ih.release_timeout_ms() > 0);
    }
}
