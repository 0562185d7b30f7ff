//! Collision checks for the rectangular playfield
//!
//! Everything is axis-aligned: the ball is a square, the paddles are fixed
//! horizontal bands on the left and right walls. Checks are pure predicates
//! over positions; the tick step decides what to do with them.

use crate::consts::*;

use super::state::{Ball, Paddle, Winner};

/// Ball touches the top or bottom edge of the playfield. The position is
/// not corrected on contact, so a fast ball may penetrate the boundary by a
/// sub-step; reflection alone is enough for gameplay.
pub fn hits_horizontal_edge(ball: &Ball) -> bool {
    ball.pos.y <= 0.0 || ball.pos.y >= (HEIGHT - BALL_SIZE) as f32
}

/// Ball's left edge is within the left paddle's horizontal band and its top
/// edge is within the paddle's vertical extent
pub fn hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x <= PADDLE_WIDTH as f32 && paddle.band_contains(ball.pos.y)
}

/// Mirror of [`hits_left_paddle`] for the right wall
pub fn hits_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x >= (WIDTH - PADDLE_WIDTH - BALL_SIZE) as f32 && paddle.band_contains(ball.pos.y)
}

/// Ball left the playfield horizontally. Exiting on the left scores for
/// player two, exiting on the right for player one.
pub fn out_of_bounds(ball: &Ball) -> Option<Winner> {
    if ball.pos.x < 0.0 {
        Some(Winner::PlayerTwo)
    } else if ball.pos.x >= WIDTH as f32 {
        Some(Winner::PlayerOne)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(BALL_SPEED, BALL_SPEED),
        }
    }

    #[test]
    fn test_horizontal_edge_contact() {
        assert!(hits_horizontal_edge(&ball_at(100.0, 0.0)));
        assert!(hits_horizontal_edge(&ball_at(100.0, -3.0)));
        assert!(hits_horizontal_edge(&ball_at(100.0, 460.0)));
        assert!(hits_horizontal_edge(&ball_at(100.0, 470.0)));
        assert!(!hits_horizontal_edge(&ball_at(100.0, 1.0)));
        assert!(!hits_horizontal_edge(&ball_at(100.0, 459.0)));
    }

    #[test]
    fn test_left_paddle_band() {
        let paddle = Paddle { y: 200 };
        // Within the band and the horizontal reach
        assert!(hits_left_paddle(&ball_at(5.0, 240.0), &paddle));
        assert!(hits_left_paddle(&ball_at(20.0, 200.0), &paddle));
        assert!(hits_left_paddle(&ball_at(0.0, 300.0), &paddle));
        // Too far from the wall
        assert!(!hits_left_paddle(&ball_at(21.0, 240.0), &paddle));
        // Outside the vertical extent
        assert!(!hits_left_paddle(&ball_at(5.0, 199.0), &paddle));
        assert!(!hits_left_paddle(&ball_at(5.0, 301.0), &paddle));
    }

    #[test]
    fn test_right_paddle_band() {
        let paddle = Paddle { y: 200 };
        // Band starts where the ball's right edge reaches the paddle
        assert!(hits_right_paddle(&ball_at(600.0, 240.0), &paddle));
        assert!(hits_right_paddle(&ball_at(610.0, 250.0), &paddle));
        assert!(!hits_right_paddle(&ball_at(599.0, 240.0), &paddle));
        assert!(!hits_right_paddle(&ball_at(600.0, 301.0), &paddle));
    }

    #[test]
    fn test_out_of_bounds_edges() {
        assert_eq!(out_of_bounds(&ball_at(-0.1, 240.0)), Some(Winner::PlayerTwo));
        assert_eq!(out_of_bounds(&ball_at(640.0, 240.0)), Some(Winner::PlayerOne));
        assert_eq!(out_of_bounds(&ball_at(641.0, 240.0)), Some(Winner::PlayerOne));
        assert_eq!(out_of_bounds(&ball_at(0.0, 240.0)), None);
        assert_eq!(out_of_bounds(&ball_at(639.9, 240.0)), None);
    }
}
