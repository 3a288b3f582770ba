//! # SYNAPSE
//!
//! Real-time holographic overlay engine driven by tracked hand-skeleton
//! input: a pooled particle engine plus a frame-composition pipeline that
//! draws a neural web over detected hand points and a volumetric beam when
//! two hands converge.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         SYNAPSE                              │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────┐          ┌───────────────────────────┐ │
//! │  │  synapse_core    │          │  synapse_render           │ │
//! │  │                  │ ───────> │                           │ │
//! │  │  • Detector      │          │  • Surface (commands)     │ │
//! │  │    contract      │          │  • Neural web             │ │
//! │  │  • Gestures      │          │  • Fusion beam            │ │
//! │  │  • Particle pool │          │  • Frame pipeline         │ │
//! │  └──────────────────┘          └───────────────────────────┘ │
//! │                                                              │
//! │  Upstream (external): hand-landmark detector, camera feed    │
//! │  Downstream (external): 2D backend replaying DrawCommands    │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub use synapse_core as core;
pub use synapse_render as render;

// Re-export the types a host needs to drive the overlay.
pub use synapse_core::{
    Color, DetectorFrame, Landmark, OverlayConfig, SessionMode, TrackedHand,
};
pub use synapse_render::{DrawCommand, FrameOutcome, OverlayPipeline, Surface};
