//! Duo Pong - a two-player Pong clone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `renderer`: SDL2 canvas drawing and the winner banner
//! - `input`: Event draining and paddle control
//! - `driver`: The fixed-rate simulation thread
//! - `config`: In-code loop/window configuration

pub mod config;
pub mod driver;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::LoopConfig;
pub use sim::{MatchPhase, MatchState, SharedState, Winner};

/// Game configuration constants
pub mod consts {
    /// Playfield width in pixels
    pub const WIDTH: u32 = 640;
    /// Playfield height in pixels
    pub const HEIGHT: u32 = 480;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: u32 = 20;
    pub const PADDLE_HEIGHT: u32 = 100;
    /// Pixels a paddle moves per key-down event
    pub const PADDLE_STEP: i32 = 15;

    /// Ball is a square of this side length
    pub const BALL_SIZE: u32 = 20;
    /// Ball speed per axis, pixels per second
    pub const BALL_SPEED: f32 = 300.0;

    /// Target frame/tick interval (~60 Hz)
    pub const FRAME_INTERVAL_MS: u64 = 16;
    /// Upper bound on a measured delta, seconds. A stall longer than this
    /// (debugger pause, system sleep) must not teleport the ball.
    pub const MAX_TICK_DT: f32 = 0.1;
    /// Pause between a goal and the automatic restart
    pub const RESTART_DELAY_MS: u64 = 2000;

    /// Font for the winner banner. The path must exist on the host or
    /// startup fails.
    pub const FONT_PATH: &str =
        "/usr/share/fonts/truetype/liberation/LiberationMono-Bold.ttf";
    pub const FONT_POINT_SIZE: u16 = 24;
}
