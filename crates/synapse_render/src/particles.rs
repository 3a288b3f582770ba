//! Particle drawing.
//!
//! Renders the pool's live particles as additive filled discs; overlaps
//! brighten instead of occluding. Physics lives in `synapse_core` - this
//! pass only reads.

use synapse_core::config::ColorConfig;
use synapse_core::particle::{ParticleKind, ParticlePool};

use crate::surface::{BlendMode, Surface};

/// Disc radius of a full-life fusion spark.
const SPARK_RADIUS: f32 = 3.0;

/// Disc radius of a full-life trail particle.
const TRAIL_RADIUS: f32 = 1.5;

/// Draws every live particle.
///
/// Radius shrinks and alpha fades with remaining life; fusion sparks are
/// larger and warning-colored, trail particles smaller and primary-colored.
pub fn draw_particles(pool: &ParticlePool, colors: &ColorConfig, surface: &mut Surface) {
    surface.set_blend(BlendMode::Additive);

    for slot in pool.live() {
        let life = slot.life;
        match slot.kind() {
            ParticleKind::FusionSpark => {
                surface.disc(
                    slot.pos,
                    SPARK_RADIUS * life,
                    colors.warning.with_alpha(life),
                );
            }
            ParticleKind::Normal => {
                surface.disc(
                    slot.pos,
                    TRAIL_RADIUS * life,
                    colors.primary.with_alpha(life * 0.8),
                );
            }
        }
    }
}
