//! The hand-detector input contract.
//!
//! The upstream detector is a black box delivering, per invocation, zero to
//! two hands of exactly 21 labeled landmarks with normalized x/y and a
//! relative depth z. This module validates that contract at the boundary so
//! the rest of the engine can index fixed landmark positions without bounds
//! checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::Vec2;

/// Landmarks per detected hand. The detector contract is exactly this many.
pub const LANDMARKS_PER_HAND: usize = 21;

/// Maximum hands the detector reports.
pub const MAX_HANDS: usize = 2;

/// Landmark index of the index fingertip.
pub const INDEX_FINGERTIP: usize = 8;

/// Landmark indices of the five fingertips.
pub const FINGERTIP_LANDMARKS: [usize; 5] = [4, 8, 12, 16, 20];

/// A raw detector landmark.
///
/// `x` and `y` are normalized to `[0, 1]`; `z` is relative depth with no
/// fixed range (negative = toward the camera).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position.
    pub x: f32,
    /// Normalized vertical position.
    pub y: f32,
    /// Relative depth.
    pub z: f32,
}

impl Landmark {
    /// Creates a new landmark.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Violations of the detector contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// More hands than the detector is configured to produce.
    #[error("detector reported {count} hands, contract allows at most {MAX_HANDS}")]
    TooManyHands {
        /// Number of hands in the offending frame.
        count: usize,
    },
    /// A hand with the wrong number of landmarks.
    #[error("hand {hand} has {count} landmarks, contract requires exactly {LANDMARKS_PER_HAND}")]
    BadLandmarkCount {
        /// Index of the offending hand.
        hand: usize,
        /// Number of landmarks it carried.
        count: usize,
    },
}

/// One detector result: the raw multi-hand landmark list for a single tick.
///
/// An empty list is valid and means "no hands".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorFrame {
    /// Per-hand landmark lists, at most [`MAX_HANDS`] entries.
    pub hands: Vec<Vec<Landmark>>,
}

impl DetectorFrame {
    /// A frame with no hands.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks the frame against the detector contract.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] if the frame has more than [`MAX_HANDS`] hands
    /// or any hand has a landmark count other than [`LANDMARKS_PER_HAND`].
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.hands.len() > MAX_HANDS {
            return Err(FrameError::TooManyHands {
                count: self.hands.len(),
            });
        }
        for (hand, landmarks) in self.hands.iter().enumerate() {
            if landmarks.len() != LANDMARKS_PER_HAND {
                return Err(FrameError::BadLandmarkCount {
                    hand,
                    count: landmarks.len(),
                });
            }
        }
        Ok(())
    }
}

/// A landmark projected to screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    /// Screen-space position in pixels.
    pub pos: Vec2,
    /// Relative depth, passed through from the detector.
    pub depth: f32,
}

impl ScreenPoint {
    /// Depth scalar used to size nodes and edges: `max(0, 1 + z)`.
    #[must_use]
    pub fn depth_scale(&self) -> f32 {
        (1.0 + self.depth).max(0.0)
    }
}

/// One hand's 21 landmarks in screen space.
///
/// Rebuilt fresh every tick from the detector frame; there is no identity
/// across frames beyond array position (hand 0, hand 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedHand {
    points: [ScreenPoint; LANDMARKS_PER_HAND],
}

impl TrackedHand {
    /// Projects a validated landmark list to screen space.
    ///
    /// # Panics
    ///
    /// Panics if `landmarks` does not hold exactly [`LANDMARKS_PER_HAND`]
    /// entries; callers must validate the frame first.
    #[must_use]
    pub fn project(landmarks: &[Landmark], width: f32, height: f32) -> Self {
        assert_eq!(landmarks.len(), LANDMARKS_PER_HAND);
        let mut points = [ScreenPoint::default(); LANDMARKS_PER_HAND];
        for (point, l) in points.iter_mut().zip(landmarks) {
            *point = ScreenPoint {
                pos: Vec2::new(l.x * width, l.y * height),
                depth: l.z,
            };
        }
        Self { points }
    }

    /// All 21 screen-space points, in landmark order.
    #[must_use]
    pub const fn points(&self) -> &[ScreenPoint; LANDMARKS_PER_HAND] {
        &self.points
    }

    /// The index fingertip point.
    #[must_use]
    pub const fn index_tip(&self) -> ScreenPoint {
        self.points[INDEX_FINGERTIP]
    }
}
