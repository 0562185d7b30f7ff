//! Input poller
//!
//! Drains the SDL event queue and applies key presses to the shared state.
//! Every mutation happens under the shared lock so the driver never sees a
//! torn paddle move. A quit event does not terminate the process from in
//! here; it sets the shutdown flag and both loops wind down in order.

use std::sync::atomic::{AtomicBool, Ordering};

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::consts::PADDLE_STEP;
use crate::sim::{MatchState, SharedState};

/// Apply one key-down event to the match state.
///
/// W/S drive the left paddle, Up/Down the right one, a fixed step per
/// event, clamped to the playfield. Space requests a restart; anything
/// else is ignored.
pub fn apply_key(state: &mut MatchState, key: Keycode) {
    match key {
        Keycode::W => state.paddle_left.move_by(-PADDLE_STEP),
        Keycode::S => state.paddle_left.move_by(PADDLE_STEP),
        Keycode::Up => state.paddle_right.move_by(-PADDLE_STEP),
        Keycode::Down => state.paddle_right.move_by(PADDLE_STEP),
        Keycode::Space => state.restart_requested = true,
        _ => {}
    }
}

/// Drain every pending event without blocking.
///
/// The caller runs this once per frame; the enclosing loop is paced, so
/// the poll is bounded-rate rather than a busy spin.
pub fn drain_events(pump: &mut EventPump, shared: &SharedState, shutdown: &AtomicBool) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                log::info!("quit requested");
                shutdown.store(true, Ordering::Relaxed);
            }
            Event::KeyDown {
                keycode: Some(key), ..
            } => {
                apply_key(&mut shared.lock(), key);
            }
            _ => {}
        }
    }
}
