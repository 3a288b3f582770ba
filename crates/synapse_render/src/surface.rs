//! Drawing surface command buffer.
//!
//! The overlay never talks to a canvas directly. Each pass records
//! [`DrawCommand`]s tagged with the blend mode active at push time; the
//! host replays the buffer against whatever 2D backend it owns. The
//! contract it needs from that backend: filled rects and discs, stroked
//! lines/polylines with per-call color+alpha, a blur-style glow underlay,
//! normal and additive compositing, and text.

use synapse_core::{Color, Vec2};

/// Compositing mode for a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over compositing.
    #[default]
    Normal,
    /// Additive ("lighter") compositing - overlaps brighten.
    Additive,
}

/// A soft glow attached to a stroke, rendered as a blurred underlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    /// Blur radius in pixels.
    pub blur: f32,
    /// Glow color.
    pub color: Color,
}

/// One backend-agnostic draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle.
    FillRect {
        /// Top-left corner.
        origin: Vec2,
        /// Width and height.
        size: Vec2,
        /// Fill color.
        color: Color,
    },
    /// Filled disc.
    Disc {
        /// Center.
        center: Vec2,
        /// Radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Stroked line segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke width.
        width: f32,
        /// Stroke color.
        color: Color,
        /// Optional glow underlay.
        glow: Option<Glow>,
    },
    /// Stroked polyline through all points in order.
    Polyline {
        /// Vertices, at least two.
        points: Vec<Vec2>,
        /// Stroke width.
        width: f32,
        /// Stroke color.
        color: Color,
        /// Optional glow underlay.
        glow: Option<Glow>,
    },
    /// Text drawn at a baseline position.
    Text {
        /// Text content.
        text: String,
        /// Baseline position.
        pos: Vec2,
        /// Text color.
        color: Color,
    },
}

/// A draw command plus the blend mode that was active when it was pushed.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCommand {
    /// Compositing mode for this command.
    pub blend: BlendMode,
    /// The command itself.
    pub command: DrawCommand,
}

/// Retained command buffer for one frame.
pub struct Surface {
    commands: Vec<RecordedCommand>,
    blend: BlendMode,
}

impl Surface {
    /// Creates an empty surface buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
            blend: BlendMode::Normal,
        }
    }

    /// Clears the buffer and resets the blend mode for a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.blend = BlendMode::Normal;
    }

    /// Sets the blend mode recorded on subsequent commands.
    pub fn set_blend(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    /// Currently active blend mode.
    #[must_use]
    pub const fn blend(&self) -> BlendMode {
        self.blend
    }

    /// Pushes a filled rectangle.
    pub fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    /// Pushes a filled disc.
    pub fn disc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    /// Pushes a stroked line.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, glow: Option<Glow>) {
        self.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
            glow,
        });
    }

    /// Pushes a stroked polyline.
    pub fn polyline(
        &mut self,
        points: Vec<Vec2>,
        width: f32,
        color: Color,
        glow: Option<Glow>,
    ) {
        debug_assert!(points.len() >= 2, "polyline needs at least two points");
        self.push(DrawCommand::Polyline {
            points,
            width,
            color,
            glow,
        });
    }

    /// Pushes a text readout.
    pub fn text(&mut self, text: String, pos: Vec2, color: Color) {
        self.push(DrawCommand::Text { text, pos, color });
    }

    /// The recorded commands for this frame, in draw order.
    #[must_use]
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(RecordedCommand {
            blend: self.blend,
            command,
        });
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_record_active_blend() {
        let mut surface = Surface::new();

        surface.fill_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), Color::BLACK);
        surface.set_blend(BlendMode::Additive);
        surface.disc(Vec2::ZERO, 2.0, Color::WHITE);

        let commands = surface.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].blend, BlendMode::Normal);
        assert_eq!(commands[1].blend, BlendMode::Additive);
    }

    #[test]
    fn test_begin_frame_clears_and_resets() {
        let mut surface = Surface::new();
        surface.set_blend(BlendMode::Additive);
        surface.disc(Vec2::ZERO, 1.0, Color::WHITE);

        surface.begin_frame();
        assert!(surface.is_empty());
        assert_eq!(surface.blend(), BlendMode::Normal);
    }
}
