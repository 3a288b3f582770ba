//! The fusion beam.
//!
//! A volumetric-looking connector drawn between the two index fingertips
//! while fusion is active: a wide, blurred outer stroke distorted by a
//! traveling sine wave, plus a bright straight core with a pulsing width.
//! Purely cosmetic - nothing here mutates state.

use synapse_core::config::ColorConfig;
use synapse_core::Vec2;

use crate::surface::{Glow, Surface};

/// Fusion intensity below which the beam is not drawn at all.
pub const BEAM_VISIBILITY_FLOOR: f32 = 0.1;

/// Interpolation steps of the outer glow polyline.
pub const BEAM_STEPS: usize = 15;

/// Peak perpendicular displacement of the sine distortion, scaled by
/// intensity.
pub const BEAM_WAVE_AMPLITUDE: f32 = 15.0;

/// Spatial frequency of the sine distortion along the beam.
pub const BEAM_WAVE_FREQUENCY: f32 = 10.0;

/// Blur radius of the outer glow stroke.
const OUTER_BLUR: f32 = 8.0;

/// Draws the fusion beam between two fingertip points.
///
/// `now_ms` drives the traveling wave phase and the core width pulse.
/// Coincident endpoints are guarded: with no axis to displace along, the
/// distortion is skipped and only the straight core is drawn.
pub fn draw_beam(
    from: Vec2,
    to: Vec2,
    intensity: f32,
    now_ms: f64,
    colors: &ColorConfig,
    surface: &mut Surface,
) {
    #[allow(clippy::cast_possible_truncation)]
    let time = (now_ms * 0.01) as f32;

    // Outer glow: sine-distorted polyline. Skipped when the endpoints
    // coincide - the perpendicular would divide by zero.
    if let Some(perp) = from.perpendicular_to(to) {
        let mut points = Vec::with_capacity(BEAM_STEPS + 1);
        points.push(from);
        for i in 1..BEAM_STEPS {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 / BEAM_STEPS as f32;
            let base = from.lerp(to, t);
            let wave =
                (t * BEAM_WAVE_FREQUENCY + time).sin() * BEAM_WAVE_AMPLITUDE * intensity;
            points.push(base + perp * wave);
        }
        points.push(to);

        let outer = colors.warning.with_alpha(0.4 * intensity);
        surface.polyline(
            points,
            30.0 * intensity,
            outer,
            Some(Glow {
                blur: OUTER_BLUR,
                color: outer,
            }),
        );
    }

    // Inner core: straight, bright, width pulsing with time.
    surface.line(
        from,
        to,
        4.0 + (time * 2.0).sin() * 2.0,
        colors.core,
        Some(Glow {
            blur: 20.0 * intensity,
            color: colors.warning,
        }),
    );
}
