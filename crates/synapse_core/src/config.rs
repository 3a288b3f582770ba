//! Overlay configuration.
//!
//! Loaded once at startup from TOML; the tick loop reads an owned copy.
//! Every field has a default so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The holographic palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Primary overlay color (nodes, edges, normal particles).
    pub primary: Color,
    /// Warning color (fusion edges, beam, fusion sparks).
    pub warning: Color,
    /// Core color (beam center, HUD text).
    pub core: Color,
    /// Background fill used for the trail fade pass.
    pub background: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: Color::NEON_CYAN,
            warning: Color::WARNING_RED,
            core: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

/// Physics and gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Per-tick velocity multiplier, < 1.
    pub drag: f32,
    /// Total span of the per-axis velocity jitter added each tick.
    pub turbulence: f32,
    /// Normalized index-fingertip distance below which fusion triggers.
    pub fusion_threshold: f32,
    /// Maximum web edge length as a fraction of surface width.
    pub web_density: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            drag: 0.92,
            turbulence: 0.08,
            fusion_threshold: 0.15,
            web_density: 0.18,
        }
    }
}

/// Render tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Glow strength for halo effects.
    pub glow_strength: f32,
    /// Alpha of the per-tick background fill. Lower = longer trails.
    pub trail_persistence: f32,
    /// Particle pool capacity.
    pub particle_limit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            glow_strength: 25.0,
            trail_persistence: 0.18,
            particle_limit: 250,
        }
    }
}

/// Top-level overlay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Palette.
    pub colors: ColorConfig,
    /// Physics and gesture tuning.
    pub physics: PhysicsConfig,
    /// Render tuning.
    pub render: RenderConfig,
}

impl OverlayConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing sections and fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&text)?)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the text is not valid TOML for this schema.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
