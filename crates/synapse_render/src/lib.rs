//! # SYNAPSE Render
//!
//! The frame composition pipeline for the holographic hand overlay.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     FRAME PIPELINE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DetectorFrame → validate → classify (core)                 │
//! │        ↓                                                    │
//! │  Trail fade → Neural web → HUD readouts → Fusion beam       │
//! │        ↓                                                    │
//! │  Particle update + draw → DrawCommand buffer → host replay  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is backend-agnostic: every pass pushes [`DrawCommand`]s into
//! a [`Surface`] and the host replays them against its actual canvas. That
//! keeps the whole pipeline deterministic and assertable under a seeded
//! random source.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod beam;
pub mod frame;
pub mod hud;
pub mod particles;
pub mod surface;
pub mod web;

pub use frame::{FrameOutcome, OverlayPipeline};
pub use surface::{BlendMode, DrawCommand, Glow, RecordedCommand, Surface};
