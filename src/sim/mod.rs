//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No SDL or platform dependencies
//! - No clocks; the driver passes the measured delta in
//! - State changes only through [`tick`] and explicit resets

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{
    Ball, MatchPhase, MatchState, PADDLE_MAX_Y, Paddle, SharedState, Winner, shared_state,
};
pub use tick::tick;
