//! Match state and core simulation types
//!
//! Everything both threads share lives in [`MatchState`]; the aggregate is
//! guarded by a single lock (see [`SharedState`]) and mutated in place for
//! the life of the process.

use std::sync::Arc;

use glam::Vec2;
use parking_lot::Mutex;

use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Active gameplay
    Playing,
    /// Ball left the playfield; waiting for restart
    Ended,
}

/// Which player took the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
}

impl Winner {
    pub fn label(&self) -> &'static str {
        match self {
            Winner::PlayerOne => "Player 1",
            Winner::PlayerTwo => "Player 2",
        }
    }
}

/// A player's paddle. Horizontal placement is fixed (left wall or right
/// wall); only the top edge moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    /// Top edge, pixels from the top of the playfield
    pub y: i32,
}

/// Highest legal paddle top edge
pub const PADDLE_MAX_Y: i32 = (HEIGHT - PADDLE_HEIGHT) as i32;

impl Paddle {
    /// Vertically centered starting position
    pub fn centered() -> Self {
        Self {
            y: (HEIGHT / 2) as i32 - (PADDLE_HEIGHT / 2) as i32,
        }
    }

    /// Step the paddle by `dy` pixels, clamped to the playfield.
    /// Invariant: `y` stays within `[0, HEIGHT - PADDLE_HEIGHT]`.
    pub fn move_by(&mut self, dy: i32) {
        self.y = (self.y + dy).clamp(0, PADDLE_MAX_Y);
    }

    /// True if a ball top edge at `ball_y` is within this paddle's
    /// vertical extent
    pub fn band_contains(&self, ball_y: f32) -> bool {
        ball_y >= self.y as f32 && ball_y <= (self.y + PADDLE_HEIGHT as i32) as f32
    }
}

/// The ball. `pos` is the top-left corner of its square, in float pixels so
/// delta-scaled movement does not truncate away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Centered starting position with the default diagonal serve
    pub fn centered() -> Self {
        Self {
            pos: Vec2::new(
                (WIDTH / 2) as f32 - (BALL_SIZE / 2) as f32,
                (HEIGHT / 2) as f32 - (BALL_SIZE / 2) as f32,
            ),
            vel: Vec2::splat(BALL_SPEED),
        }
    }
}

/// Complete match state. Written by the input poller (paddles, restart
/// request) and the simulation driver (ball, phase); read by the renderer.
/// Every access goes through the shared lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchState {
    pub paddle_left: Paddle,
    pub paddle_right: Paddle,
    pub ball: Ball,
    pub phase: MatchPhase,
    pub winner: Option<Winner>,
    /// Set by input (Space) or by the driver after the post-match delay;
    /// consumed by the driver at the top of its next tick.
    pub restart_requested: bool,
    /// Set by the renderer once it has rasterized the banner for this round
    pub winner_announced: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            paddle_left: Paddle::centered(),
            paddle_right: Paddle::centered(),
            ball: Ball::centered(),
            phase: MatchPhase::Playing,
            winner: None,
            restart_requested: false,
            winner_announced: false,
        }
    }

    /// Reset for a new round. Positions and flags return to their initial
    /// values; the ball keeps whatever velocity signs the last round left
    /// it with (speed magnitude never changes, only direction).
    pub fn reset(&mut self) {
        let vel = self.ball.vel;
        self.paddle_left = Paddle::centered();
        self.paddle_right = Paddle::centered();
        self.ball = Ball::centered();
        self.ball.vel = vel;
        self.phase = MatchPhase::Playing;
        self.winner = None;
        self.restart_requested = false;
        self.winner_announced = false;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// The one synchronization point between the input poller, the simulation
/// driver, and the renderer
pub type SharedState = Arc<Mutex<MatchState>>;

/// Convenience constructor for the shared aggregate
pub fn shared_state() -> SharedState {
    Arc::new(Mutex::new(MatchState::new()))
}
