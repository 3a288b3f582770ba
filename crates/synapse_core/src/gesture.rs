//! Gesture classification.
//!
//! Reduces one validated detector frame to a discrete session mode plus the
//! continuous fusion intensity, and feeds the particle pool when two index
//! fingertips converge.

use rand::Rng;

use crate::config::PhysicsConfig;
use crate::hand::{DetectorFrame, TrackedHand};
use crate::particle::{ParticleKind, ParticlePool};
use crate::session::{SessionMode, SessionState};

/// Speed scale of the sparks emitted at the fusion midpoint.
pub const FUSION_SPARK_SPEED: f32 = 3.0;

/// Sparks emitted per fusing tick.
pub const FUSION_SPARKS_PER_TICK: usize = 2;

/// Classifies detector frames into session mode and fusion intensity.
#[derive(Clone, Copy, Debug)]
pub struct GestureClassifier {
    physics: PhysicsConfig,
}

impl GestureClassifier {
    /// Creates a classifier with the given physics tuning.
    #[must_use]
    pub const fn new(physics: PhysicsConfig) -> Self {
        Self { physics }
    }

    /// Processes one tick's detector frame.
    ///
    /// Expects a frame that already passed [`DetectorFrame::validate`];
    /// landmark positions are indexed without bounds checks past that
    /// point. Updates the session's mode, intensity and tracked hands, and
    /// emits [`FUSION_SPARKS_PER_TICK`] fusion sparks at the fingertip
    /// midpoint while fusing.
    pub fn classify<R: Rng>(
        &self,
        frame: &DetectorFrame,
        state: &mut SessionState,
        pool: &mut ParticlePool,
        rng: &mut R,
    ) {
        if frame.hands.is_empty() {
            state.mode = SessionMode::Idle;
            state.hands.clear();
            state.decay_intensity();
            return;
        }

        let (width, height) = (state.width(), state.height());
        state.hands.clear();
        state
            .hands
            .extend(
                frame
                    .hands
                    .iter()
                    .map(|landmarks| TrackedHand::project(landmarks, width, height)),
            );

        if let [first, second] = state.hands.as_slice() {
            let tip1 = first.index_tip().pos;
            let tip2 = second.index_tip().pos;

            // Normalize per axis before combining so the threshold is
            // resolution independent.
            let dx = (tip1.x - tip2.x) / width;
            let dy = (tip1.y - tip2.y) / height;
            let dist = (dx * dx + dy * dy).sqrt();

            // Strict comparison: a distance exactly at the threshold does
            // not fuse.
            if dist < self.physics.fusion_threshold {
                state.mode = SessionMode::Fusion;
                state.ramp_intensity();

                let mid = tip1.midpoint(tip2);
                for _ in 0..FUSION_SPARKS_PER_TICK {
                    pool.emit(mid, ParticleKind::FusionSpark, FUSION_SPARK_SPEED, rng);
                }
                return;
            }
        }

        state.mode = SessionMode::Active;
        state.decay_intensity();
    }
}
