//! The per-tick frame pipeline.
//!
//! One external detector result drives one full tick:
//!
//! ```text
//! Frame N:
//! ┌──────────────────────────────────────────────────────────────┐
//! │ 1. APPLY STAGED RESIZE (tick boundary only)                  │
//! │ 2. VALIDATE detector frame - reject + skip on contract break │
//! │ 3. CLASSIFY gestures (mode, intensity, spark emission)       │
//! │ 4. TRAIL FADE - translucent background fill, normal blend    │
//! │ 5. ADDITIVE PASSES - web, HUD readouts, fusion beam          │
//! │ 6. PARTICLES - integrate physics, draw                       │
//! │ 7. TIMING - frame counter, FPS sample every 10th frame       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Strictly single-threaded: one writer per tick, no locks. If input stops
//! arriving the session decays to idle passively; there is no cancel path.

use rand::Rng;
use synapse_core::config::OverlayConfig;
use synapse_core::gesture::GestureClassifier;
use synapse_core::hand::{DetectorFrame, FrameError, MAX_HANDS};
use synapse_core::particle::ParticlePool;
use synapse_core::rng::{seeded_rng, OverlayRng};
use synapse_core::session::SessionState;
use synapse_core::Vec2;

use crate::beam::{self, BEAM_VISIBILITY_FLOOR};
use crate::hud;
use crate::particles;
use crate::surface::{BlendMode, Surface};
use crate::web;

/// Seed of the default random source. Fixed so two overlays with the same
/// input stream render identically.
pub const DEFAULT_RNG_SEED: u64 = 0x5EED;

/// What a call to [`OverlayPipeline::tick`] did.
#[derive(Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The tick ran and the surface holds a fresh frame.
    Rendered,
    /// The detector frame broke the contract; state and surface untouched.
    Skipped(FrameError),
}

/// Owns the session, the particle pool and the command surface, and runs
/// the per-tick pipeline.
pub struct OverlayPipeline<R: Rng = OverlayRng> {
    config: OverlayConfig,
    classifier: GestureClassifier,
    state: SessionState,
    pool: ParticlePool,
    surface: Surface,
    rng: R,
}

impl OverlayPipeline<OverlayRng> {
    /// Creates a pipeline with the default seeded random source.
    #[must_use]
    pub fn new(config: OverlayConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, seeded_rng(DEFAULT_RNG_SEED))
    }
}

impl<R: Rng> OverlayPipeline<R> {
    /// Creates a pipeline with an injected random source.
    #[must_use]
    pub fn with_rng(config: OverlayConfig, width: f32, height: f32, rng: R) -> Self {
        Self {
            classifier: GestureClassifier::new(config.physics),
            state: SessionState::new(width, height),
            pool: ParticlePool::new(config.render.particle_limit, config.physics),
            surface: Surface::new(),
            config,
            rng,
        }
    }

    /// Runs one full tick for one detector result.
    ///
    /// `now_ms` is the host's monotonic timestamp in milliseconds; it
    /// drives the beam animation phase and the FPS estimate.
    pub fn tick(&mut self, frame: &DetectorFrame, now_ms: f64) -> FrameOutcome {
        // Resize requests land exactly here, never mid-frame.
        self.state.apply_pending_resize();

        if let Err(err) = frame.validate() {
            tracing::warn!(error = %err, "rejected detector frame, skipping tick");
            return FrameOutcome::Skipped(err);
        }

        self.classifier
            .classify(frame, &mut self.state, &mut self.pool, &mut self.rng);
        self.state.advance_frame(now_ms);

        // Pass 1: fade the previous frame instead of clearing it. The
        // translucent fill is what produces the trails.
        self.surface.begin_frame();
        self.surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(self.state.width(), self.state.height()),
            self.config
                .colors
                .background
                .with_alpha(self.config.render.trail_persistence),
        );

        // Pass 2: everything from here composites additively.
        self.surface.set_blend(BlendMode::Additive);

        if !self.state.hands().is_empty() {
            web::draw_web(
                &self.state,
                &self.config.colors,
                &self.config.physics,
                &mut self.pool,
                &mut self.surface,
                &mut self.rng,
            );
            hud::draw_readouts(&self.state, &self.config.colors, &mut self.surface);

            if self.state.hands().len() == MAX_HANDS
                && self.state.fusion_intensity() > BEAM_VISIBILITY_FLOOR
            {
                let from = self.state.hands()[0].index_tip().pos;
                let to = self.state.hands()[1].index_tip().pos;
                beam::draw_beam(
                    from,
                    to,
                    self.state.fusion_intensity(),
                    now_ms,
                    &self.config.colors,
                    &mut self.surface,
                );
            }
        }

        // Pass 3: particles advance and render last, on top.
        self.pool.update(&mut self.rng);
        particles::draw_particles(&self.pool, &self.config.colors, &mut self.surface);

        FrameOutcome::Rendered
    }

    /// Stages a surface resize; applied at the next tick boundary.
    pub fn request_resize(&mut self, width: f32, height: f32) {
        self.state.request_resize(width, height);
    }

    /// The session state (mode, intensity, diagnostics).
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The particle pool.
    #[must_use]
    pub const fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// The command surface holding the last rendered frame.
    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawCommand;
    use synapse_core::hand::{Landmark, LANDMARKS_PER_HAND};
    use synapse_core::session::SessionMode;

    fn hand_at(x: f32, y: f32) -> Vec<Landmark> {
        vec![Landmark::new(x, y, 0.0); LANDMARKS_PER_HAND]
    }

    fn pipeline() -> OverlayPipeline {
        OverlayPipeline::new(OverlayConfig::default(), 1000.0, 1000.0)
    }

    #[test]
    fn test_first_command_is_the_trail_fade() {
        let mut p = pipeline();
        p.tick(&DetectorFrame::empty(), 16.0);

        let first = &p.surface().commands()[0];
        assert_eq!(first.blend, BlendMode::Normal);
        let DrawCommand::FillRect { size, color, .. } = &first.command else {
            panic!("expected the background fade fill");
        };
        assert_eq!(*size, Vec2::new(1000.0, 1000.0));
        assert!((color.a - 0.18).abs() < 1e-6);
    }

    #[test]
    fn test_idle_frame_renders_fade_only() {
        let mut p = pipeline();
        p.tick(&DetectorFrame::empty(), 16.0);

        // No hands, no particles: just the fade pass.
        assert_eq!(p.surface().len(), 1);
        assert_eq!(p.state().mode(), SessionMode::Idle);
    }

    #[test]
    fn test_malformed_frame_skips_without_touching_state() {
        let mut p = pipeline();

        // Build up some state first.
        p.tick(
            &DetectorFrame {
                hands: vec![hand_at(0.5, 0.5)],
            },
            16.0,
        );
        let mode = p.state().mode();
        let frame = p.state().frame();
        let commands = p.surface().len();

        let bad = DetectorFrame {
            hands: vec![vec![Landmark::default(); 7]],
        };
        let outcome = p.tick(&bad, 32.0);

        assert!(matches!(outcome, FrameOutcome::Skipped(_)));
        assert_eq!(p.state().mode(), mode);
        assert_eq!(p.state().frame(), frame);
        assert_eq!(p.surface().len(), commands);
    }

    #[test]
    fn test_beam_appears_once_intensity_clears_the_floor() {
        let mut p = pipeline();
        let fusing = DetectorFrame {
            hands: vec![hand_at(0.48, 0.5), hand_at(0.52, 0.5)],
        };

        // Two fusing ticks: intensity 0.05, 0.10 - still at or below the
        // 0.1 floor, no beam.
        p.tick(&fusing, 0.0);
        p.tick(&fusing, 16.0);
        assert!(!has_polyline(p.surface()));

        // Third tick: 0.15 > 0.1, the beam shows up.
        p.tick(&fusing, 32.0);
        assert_eq!(p.state().mode(), SessionMode::Fusion);
        assert!(has_polyline(p.surface()));
    }

    fn has_polyline(surface: &Surface) -> bool {
        surface
            .commands()
            .iter()
            .any(|c| matches!(c.command, DrawCommand::Polyline { .. }))
    }

    #[test]
    fn test_resize_applies_at_next_tick() {
        let mut p = pipeline();
        p.request_resize(500.0, 400.0);
        assert!((p.state().width() - 1000.0).abs() < f32::EPSILON);

        p.tick(&DetectorFrame::empty(), 16.0);
        assert!((p.state().width() - 500.0).abs() < f32::EPSILON);
        assert!((p.state().height() - 400.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_seeded_pipelines_render_identically() {
        let mut a = pipeline();
        let mut b = pipeline();
        let frame = DetectorFrame {
            hands: vec![hand_at(0.4, 0.5), hand_at(0.6, 0.5)],
        };

        for i in 0..20 {
            let now = f64::from(i) * 16.0;
            a.tick(&frame, now);
            b.tick(&frame, now);
        }

        assert_eq!(a.surface().commands(), b.surface().commands());
        assert_eq!(a.pool().active_count(), b.pool().active_count());
    }
}
