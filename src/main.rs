//! Terminal blockfall runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a framebuffer-based renderer with diffed terminal updates.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Grid, GridSnapshot};
use blockfall::input::{should_quit, wants_pause, wants_restart, InputHandler};
use blockfall::term::{FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, GameIntent, SoundCue, TICK_MS};

/// How long a cue message stays on the side panel, in frames.
const STATUS_FRAMES: u32 = 45;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut grid = Grid::new(clock_seed());
    let view = GameView::default();
    let mut input = InputHandler::new();

    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = GridSnapshot::default();

    let mut paused = false;
    let mut status_text = String::new();
    let mut status_frames = 0u32;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        grid.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let status = StatusView {
            paused,
            message: (status_frames > 0).then_some(status_text.as_str()),
        };
        view.render_with_status(&snapshot, Some(&status), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    // Terminal auto-repeat is the repeat source for held
                    // keys, so repeats count as presses.
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if wants_restart(key) {
                            grid = Grid::new(clock_seed());
                            input.reset();
                            paused = false;
                            status_frames = 0;
                            continue;
                        }
                        if wants_pause(key) {
                            if !grid.check_game_over() {
                                paused = !paused;
                                if paused {
                                    // A Down key held across the pause must
                                    // not stick.
                                    input.reset();
                                    grid.apply_intent(GameIntent::SoftDrop(false));
                                }
                            }
                            continue;
                        }
                        if !paused {
                            if let Some(intent) = input.handle_key_press(key) {
                                grid.apply_intent(intent);
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(intent) = input.handle_key_release(key) {
                            grid.apply_intent(intent);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Fixed-cadence frame advance.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Some(release) = input.update() {
                grid.apply_intent(release);
            }

            if !paused {
                grid.advance_frame();

                let mut awarded = 0u32;
                for event in grid.take_events() {
                    match event {
                        GameEvent::ScoreAwarded { points } => awarded = points,
                        GameEvent::CueSelected(cue) if cue != SoundCue::PieceLocked => {
                            status_text = format!("{} +{}", cue.label(), awarded);
                            status_frames = STATUS_FRAMES;
                        }
                        _ => {}
                    }
                }
            }

            status_frames = status_frames.saturating_sub(1);
        }
    }
}

/// Seed from the wall clock; any value works, zero included.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
