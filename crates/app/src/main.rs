//! Windowed entry point for the Neon Audio Visualiser.

mod clock;
mod input;
mod viz;

use std::path::{Path, PathBuf};

use clap::Parser;
use macroquad::prelude::*;
use neon_visualiser_core::{audio, AppConfig, AudioBuffer, Engine, EngineConfig, SpectralAnalyzer};
use tracing_subscriber::EnvFilter;

use clock::FrameClock;
use viz::FrameRenderer;

#[derive(Parser, Debug)]
#[command(author, version, about = "Real-time neon audio visualiser", long_about = None)]
struct Cli {
    /// Path to the audio file to visualise (wav, mp3, m4a or ogg).
    input: PathBuf,
    /// Keep going with an empty buffer if the file cannot be loaded.
    #[arg(long)]
    allow_silent: bool,
    /// Optional JSON file overriding engine tunables and the palette.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn window_conf() -> Conf {
    let engine = EngineConfig::default();
    Conf {
        window_title: "Neon Audio Visualiser".to_owned(),
        window_width: engine.width as i32,
        window_height: engine.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "failed to load configuration");
            return;
        }
    };

    let buffer = match audio::load(&cli.input, config.engine.sample_rate) {
        Ok(buffer) => {
            tracing::info!(
                samples = buffer.len(),
                sample_rate = buffer.sample_rate(),
                seconds = buffer.duration_seconds(),
                "audio loaded"
            );
            buffer
        }
        Err(err) if cli.allow_silent => {
            tracing::warn!(%err, "continuing without audio");
            AudioBuffer::silent(config.engine.sample_rate)
        }
        Err(err) => {
            tracing::error!(%err, path = %cli.input.display(), "failed to load audio");
            return;
        }
    };

    run(buffer, config).await;
}

/// The per-frame loop: drain input, advance the state machine, render the
/// active mode, draw the overlay, present, and pace to the target rate.
async fn run(buffer: AudioBuffer, config: AppConfig) {
    let mut engine = Engine::new(buffer, &config.engine);
    let mut analyzer = SpectralAnalyzer::new();
    let renderer = FrameRenderer::new(config.palette.clone());
    let mut clock = FrameClock::new(config.engine.target_fps);

    // Route OS close requests through the state machine instead of letting
    // the window vanish mid-frame.
    prevent_quit();
    tracing::info!("entering render loop");

    loop {
        engine.apply_all(input::poll_events());
        if engine.is_terminated() {
            break;
        }

        let chunk = engine.chunk();
        if chunk.is_empty() {
            renderer.draw_idle();
        } else if let Err(err) =
            renderer.draw_scene(engine.mode(), chunk, engine.phase(), &mut analyzer)
        {
            tracing::error!(%err, "rendering failed");
            break;
        }
        engine.advance_frame();

        renderer.draw_overlay(engine.mode(), engine.progress());

        clock.tick();
        next_frame().await;
    }

    tracing::info!("render loop terminated");
}

fn load_config(path: Option<&Path>) -> neon_visualiser_core::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
