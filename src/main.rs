//! Duo Pong entry point
//!
//! Initializes SDL, spawns the simulation driver, then runs the
//! main-thread loop: drain input events, draw a frame, pace to the frame
//! interval. SDL pins the event pump and the canvas to the initializing
//! thread, so polling and rendering live here while the simulation runs on
//! the driver thread; one lock guards the state either side touches.

use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Error, Result};

use duo_pong::driver::Driver;
use duo_pong::renderer::Renderer;
use duo_pong::sim::shared_state;
use duo_pong::{LoopConfig, input};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("fatal: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = LoopConfig::default();
    log::info!("Duo Pong starting...");

    let sdl = sdl2::init().map_err(Error::msg)?;
    let video = sdl.video().map_err(Error::msg)?;
    let window = video
        .window(
            &config.window_title,
            config.window_width,
            config.window_height,
        )
        .position_centered()
        .build()
        .context("failed to create window")?;
    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .context("failed to create renderer")?;

    let ttf = sdl2::ttf::init().context("failed to initialize font support")?;
    let font = ttf
        .load_font(&config.font_path, config.font_point_size)
        .map_err(Error::msg)
        .with_context(|| format!("unable to load font {}", config.font_path))?;
    let mut renderer = Renderer::new(canvas, font);

    let shared = shared_state();
    let shutdown = Arc::new(AtomicBool::new(false));
    let driver = Driver::spawn(shared.clone(), shutdown.clone(), config.clone())?;

    let mut pump = sdl.event_pump().map_err(Error::msg)?;
    log::info!("Duo Pong running");

    while !shutdown.load(Ordering::Relaxed) {
        let frame_started = Instant::now();

        input::drain_events(&mut pump, &shared, &shutdown);

        {
            let mut state = shared.lock();
            renderer.draw_frame(&mut state)?;
        }

        let elapsed = frame_started.elapsed();
        if elapsed < config.frame_interval {
            thread::sleep(config.frame_interval - elapsed);
        }
    }

    log::info!("shutting down");
    driver.join();
    Ok(())
}
