//! Per-tick simulation step
//!
//! Advances the ball and resolves the round. Pure over [`MatchState`]: the
//! driver thread calls this under the shared lock with a measured,
//! clamped delta.

use super::collision;
use super::state::{MatchPhase, MatchState};

/// Advance the match by `dt` seconds.
///
/// Once the round has ended this is a no-op until the driver consumes the
/// restart request; the check is the simulation's only read of the phase.
///
/// Check order per tick: win detection, then vertical reflection, then the
/// paddle reflections. All checks run against the freshly advanced
/// position, and more than one may fire in the same tick; a corner hit is
/// treated as a single combined reflection negating both axes.
pub fn tick(state: &mut MatchState, dt: f32) {
    if state.phase == MatchPhase::Ended {
        return;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    if let Some(winner) = collision::out_of_bounds(ball) {
        state.winner = Some(winner);
        state.phase = MatchPhase::Ended;
        log::info!("{} wins!", winner.label());
    }

    // Reflections still resolve on the scoring tick; the state freezes
    // from the next tick on.
    let ball = &mut state.ball;
    if collision::hits_horizontal_edge(ball) {
        ball.vel.y = -ball.vel.y;
    }

    if collision::hits_left_paddle(ball, &state.paddle_left) {
        ball.vel.x = -ball.vel.x;
    }

    if collision::hits_right_paddle(ball, &state.paddle_right) {
        ball.vel.x = -ball.vel.x;
    }
}
