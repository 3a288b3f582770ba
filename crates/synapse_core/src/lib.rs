//! # SYNAPSE Core
//!
//! Session state, gesture classification and the particle pool for the
//! SYNAPSE holographic hand overlay.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      PER-TICK FLOW                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  DetectorFrame → validate → GestureClassifier            │
//! │        ↓                          ↓                      │
//! │  TrackedHand (screen space)   SessionState (mode, flux)  │
//! │                                   ↓                      │
//! │                            ParticlePool (emit/update)    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on a drawing backend. Renderers live in
//! `synapse_render` and read this crate's state.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod gesture;
pub mod hand;
pub mod math;
pub mod particle;
pub mod rng;
pub mod session;

pub use color::Color;
pub use config::{ColorConfig, ConfigError, OverlayConfig, PhysicsConfig, RenderConfig};
pub use gesture::GestureClassifier;
pub use hand::{
    DetectorFrame, FrameError, Landmark, ScreenPoint, TrackedHand, FINGERTIP_LANDMARKS,
    INDEX_FINGERTIP, LANDMARKS_PER_HAND, MAX_HANDS,
};
pub use math::Vec2;
pub use particle::{ParticleKind, ParticlePool, ParticleSlot};
pub use rng::{seeded_rng, OverlayRng};
pub use session::{SessionMode, SessionState};
