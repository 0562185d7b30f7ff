//! Loop and window configuration
//!
//! Built in code; there is no configuration file, CLI surface, or
//! environment lookup. The defaults mirror the constants in
//! [`crate::consts`], and everything that touches timing or the window
//! reads from here rather than from the constants directly.

use std::time::Duration;

use crate::consts::*;

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Target pacing for both loops (~60 Hz)
    pub frame_interval: Duration,
    /// Upper bound on a measured delta, seconds
    pub max_tick_dt: f32,
    /// Pause between a goal and the automatic restart
    pub restart_delay: Duration,
    /// Banner font; the path must exist on the host
    pub font_path: String,
    pub font_point_size: u16,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Ping Pong Game".to_string(),
            window_width: WIDTH,
            window_height: HEIGHT,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            max_tick_dt: MAX_TICK_DT,
            restart_delay: Duration::from_millis(RESTART_DELAY_MS),
            font_path: FONT_PATH.to_string(),
            font_point_size: FONT_POINT_SIZE,
        }
    }
}
