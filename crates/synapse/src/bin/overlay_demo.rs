//! Overlay demo.
//!
//! Drives the full tick loop with a synthetic detector so the pipeline can
//! be watched without a camera: one hand appears, a second joins, the two
//! index fingertips converge into fusion, then everything leaves and the
//! session decays back to idle.
//!
//! Run with: `cargo run --bin overlay_demo [config.toml]`

use synapse::{DetectorFrame, FrameOutcome, OverlayConfig, OverlayPipeline, SessionMode};
use synapse_core::hand::{Landmark, LANDMARKS_PER_HAND};
use tracing_subscriber::EnvFilter;

/// Surface size the demo renders at.
const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

/// Total ticks to simulate (~16 seconds at 60 FPS).
const TICKS: u64 = 1000;

/// Milliseconds per synthetic tick.
const TICK_MS: f64 = 16.0;

fn main() -> Result<(), synapse_core::ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "loading config");
            OverlayConfig::load(path)?
        }
        None => OverlayConfig::default(),
    };

    let mut pipeline = OverlayPipeline::new(config, WIDTH, HEIGHT);
    tracing::info!(
        width = WIDTH,
        height = HEIGHT,
        particle_limit = config.render.particle_limit,
        "neural link established"
    );

    let mut last_mode = SessionMode::Idle;
    for tick in 0..TICKS {
        let frame = synthetic_frame(tick);
        let now_ms = tick as f64 * TICK_MS;

        if pipeline.tick(&frame, now_ms) == FrameOutcome::Rendered {
            let state = pipeline.state();
            if state.mode() != last_mode {
                tracing::info!(
                    tick,
                    mode = state.mode().label(),
                    flux = %format!("{:.2} TEU", state.flux_metric()),
                    nodes = state.node_count(),
                    "mode transition"
                );
                last_mode = state.mode();
            }
            if tick % 100 == 0 {
                tracing::debug!(
                    tick,
                    particles = pipeline.pool().active_count(),
                    commands = pipeline.surface().len(),
                    fps = state.fps(),
                    "tick"
                );
            }
        }
    }

    let state = pipeline.state();
    tracing::info!(
        frames = state.frame(),
        mode = state.mode().label(),
        flux = %format!("{:.2} TEU", state.flux_metric()),
        particles = pipeline.pool().active_count(),
        commands = pipeline.surface().len(),
        "demo complete"
    );
    Ok(())
}

/// Scripted detector output for one tick.
///
/// Phases: empty → one hand → two hands converging to fusion → hold →
/// hands leave.
fn synthetic_frame(tick: u64) -> DetectorFrame {
    match tick {
        0..=99 => DetectorFrame::empty(),
        100..=199 => DetectorFrame {
            hands: vec![hand_cluster(0.35, 0.5)],
        },
        200..=899 => {
            // Fingertip separation shrinks from 0.40 toward 0.02 and holds.
            let progress = ((tick - 200) as f32 / 300.0).min(1.0);
            let half_gap = (0.20 * (1.0 - progress)).max(0.01);
            DetectorFrame {
                hands: vec![
                    hand_cluster(0.5 - half_gap, 0.5),
                    hand_cluster(0.5 + half_gap, 0.5),
                ],
            }
        }
        _ => DetectorFrame::empty(),
    }
}

/// A plausible 21-landmark hand centered on `(cx, cy)`.
fn hand_cluster(cx: f32, cy: f32) -> Vec<Landmark> {
    (0..LANDMARKS_PER_HAND)
        .map(|i| {
            // Small deterministic spread so the web has structure.
            let col = (i % 5) as f32;
            let row = (i / 5) as f32;
            Landmark::new(
                (cx + (col - 2.0) * 0.015).clamp(0.0, 1.0),
                (cy + (row - 2.0) * 0.02).clamp(0.0, 1.0),
                -0.02 * row,
            )
        })
        .collect()
}
