//! HUD coordinate readouts.
//!
//! Tech-HUD style normalized coordinate labels next to every 4th landmark
//! of each tracked hand.

use synapse_core::config::ColorConfig;
use synapse_core::session::SessionState;
use synapse_core::Vec2;

use crate::surface::Surface;

/// Every this-many landmarks gets a coordinate readout.
pub const READOUT_STRIDE: usize = 4;

/// Horizontal offset of the label from its node.
const LABEL_OFFSET_X: f32 = 10.0;

/// Label opacity.
const LABEL_ALPHA: f32 = 0.4;

/// Draws normalized coordinate labels for every 4th landmark.
pub fn draw_readouts(state: &SessionState, colors: &ColorConfig, surface: &mut Surface) {
    let (width, height) = (state.width(), state.height());
    let color = colors.core.with_alpha(LABEL_ALPHA);

    for hand in state.hands() {
        for (i, point) in hand.points().iter().enumerate() {
            if i % READOUT_STRIDE != 0 {
                continue;
            }
            surface.text(
                format!(
                    "x:{:.2} y:{:.2}",
                    point.pos.x / width,
                    point.pos.y / height
                ),
                Vec2::new(point.pos.x + LABEL_OFFSET_X, point.pos.y),
                color,
            );
        }
    }
}
