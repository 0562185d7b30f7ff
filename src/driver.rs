//! Simulation driver thread
//!
//! Owns the timing side of the game: a fixed-rate loop that measures the
//! elapsed delta, consumes restart requests, steps the simulation under
//! the shared lock, and handles the post-match pause. The loop is
//! cancellable through the shutdown flag at every point, including inside
//! the pause.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::config::LoopConfig;
use crate::sim::{self, MatchPhase, SharedState};

/// Handle to the running driver thread
pub struct Driver {
    handle: JoinHandle<()>,
}

impl Driver {
    /// Spawn the simulation loop on its own thread.
    pub fn spawn(shared: SharedState, shutdown: Arc<AtomicBool>, config: LoopConfig) -> Result<Self> {
        let handle = thread::Builder::new()
            .name("sim-driver".into())
            .spawn(move || run_loop(&shared, &shutdown, &config))
            .context("failed to spawn the driver thread")?;
        Ok(Self { handle })
    }

    /// Wait for the loop to observe shutdown and exit.
    pub fn join(self) {
        if self.handle.join().is_err() {
            log::error!("driver thread panicked");
        }
    }
}

fn run_loop(shared: &SharedState, shutdown: &AtomicBool, config: &LoopConfig) {
    log::info!("simulation driver running");
    let mut prev = Instant::now();

    while !shutdown.load(Ordering::Relaxed) {
        let tick_started = Instant::now();
        let dt = tick_started
            .duration_since(prev)
            .as_secs_f32()
            .min(config.max_tick_dt);
        prev = tick_started;

        let ended = {
            let mut state = shared.lock();
            if state.restart_requested {
                state.reset();
                log::info!("match restarted");
            }
            sim::tick(&mut state, dt);
            state.phase == MatchPhase::Ended
        };

        if ended {
            // Leave the final frame on screen for a moment, then arm the
            // restart. The renderer keeps presenting the frozen field and
            // the banner during the pause.
            sleep_cancellable(config.restart_delay, shutdown);
            if shutdown.load(Ordering::Relaxed) {
                break;
            }
            shared.lock().restart_requested = true;
            // The pause must not be integrated into the next delta
            prev = Instant::now();
            continue;
        }

        let elapsed = tick_started.elapsed();
        if elapsed < config.frame_interval {
            thread::sleep(config.frame_interval - elapsed);
        }
    }

    log::info!("simulation driver stopped");
}

/// Sleep for `total`, returning early once the shutdown flag is set.
fn sleep_cancellable(total: Duration, shutdown: &AtomicBool) {
    const SLICE: Duration = Duration::from_millis(50);
    let deadline = Instant::now() + total;
    while !shutdown.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(SLICE.min(deadline - now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_cancellable_runs_to_deadline() {
        let shutdown = AtomicBool::new(false);
        let started = Instant::now();
        sleep_cancellable(Duration::from_millis(80), &shutdown);
        assert!(started.elapsed() >= Duration::from_millis(80));
    }

    #[test]
    fn test_sleep_cancellable_observes_shutdown() {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = shutdown.clone();
        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(60));
            flag.store(true, Ordering::Relaxed);
        });

        let started = Instant::now();
        sleep_cancellable(Duration::from_secs(10), &shutdown);
        // Far below the requested ten seconds
        assert!(started.elapsed() < Duration::from_secs(1));
        canceller.join().unwrap();
    }
}
