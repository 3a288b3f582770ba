//! Session state.
//!
//! One mutable struct owns everything the tick loop reads and writes:
//! mode, fusion intensity, the current tracked hands, surface dimensions
//! and frame timing. Strictly single-writer - only the frame pipeline
//! mutates it, once per tick.

use crate::hand::{TrackedHand, LANDMARKS_PER_HAND, MAX_HANDS};

/// Fusion intensity multiplier applied on every non-fusing tick.
pub const INTENSITY_DECAY: f32 = 0.9;

/// Fusion intensity gained per fusing tick, clamped at 1.0.
pub const INTENSITY_RAMP: f32 = 0.05;

/// The FPS estimate is refreshed every this many frames to avoid jitter
/// from single-frame noise.
pub const FPS_SAMPLE_INTERVAL: u64 = 10;

/// Discrete session mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// No hands tracked.
    #[default]
    Idle,
    /// At least one hand tracked.
    Active,
    /// Two index fingertips within the fusion threshold.
    Fusion,
}

impl SessionMode {
    /// Human-readable status label for the HUD.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "SCANNING...",
            Self::Active => "SYSTEM ENGAGED",
            Self::Fusion => "CRITICAL FUSION",
        }
    }
}

/// Mutable per-session state, owned by the frame pipeline.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub(crate) mode: SessionMode,
    pub(crate) fusion_intensity: f32,
    pub(crate) hands: Vec<TrackedHand>,
    width: f32,
    height: f32,
    pending_resize: Option<(f32, f32)>,
    frame: u64,
    last_time_ms: f64,
    fps: f32,
}

impl SessionState {
    /// Creates session state for a surface of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            mode: SessionMode::Idle,
            fusion_intensity: 0.0,
            hands: Vec::with_capacity(MAX_HANDS),
            width,
            height,
            pending_resize: None,
            frame: 0,
            last_time_ms: 0.0,
            fps: 0.0,
        }
    }

    /// Current mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Fusion intensity in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn fusion_intensity(&self) -> f32 {
        self.fusion_intensity
    }

    /// This tick's tracked hands.
    #[inline]
    #[must_use]
    pub fn hands(&self) -> &[TrackedHand] {
        &self.hands
    }

    /// Surface width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Frames processed so far.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Latest frames-per-second estimate.
    #[inline]
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.fps
    }

    /// Diagnostic: tracked node count (hands x 21).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.hands.len() * LANDMARKS_PER_HAND
    }

    /// Diagnostic: fusion intensity as a percentage-like metric.
    #[must_use]
    pub const fn flux_metric(&self) -> f32 {
        self.fusion_intensity * 100.0
    }

    /// Stages a surface resize.
    ///
    /// The new dimensions take effect at the next tick boundary, so no tick
    /// ever observes a half-updated width/height pair.
    pub fn request_resize(&mut self, width: f32, height: f32) {
        self.pending_resize = Some((width, height));
    }

    /// Applies a staged resize, if any. Called at the top of each tick.
    pub fn apply_pending_resize(&mut self) {
        if let Some((width, height)) = self.pending_resize.take() {
            self.width = width;
            self.height = height;
        }
    }

    /// Geometric decay toward zero. Never resets instantly, so the visuals
    /// fade instead of cutting out.
    pub fn decay_intensity(&mut self) {
        self.fusion_intensity *= INTENSITY_DECAY;
    }

    /// Additive ramp toward one, clamped.
    pub fn ramp_intensity(&mut self) {
        self.fusion_intensity = (self.fusion_intensity + INTENSITY_RAMP).min(1.0);
    }

    /// Advances the frame counter and refreshes the FPS estimate every
    /// [`FPS_SAMPLE_INTERVAL`] frames.
    pub fn advance_frame(&mut self, now_ms: f64) {
        let dt = now_ms - self.last_time_ms;
        self.last_time_ms = now_ms;
        if self.frame % FPS_SAMPLE_INTERVAL == 0 && dt > 0.0 && self.frame > 0 {
            #[allow(clippy::cast_possible_truncation)]
            {
                self.fps = (1000.0 / dt) as f32;
            }
        }
        self.frame += 1;
    }
}
