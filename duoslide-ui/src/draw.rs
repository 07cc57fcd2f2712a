//! # Draw list
//!
//! Widgets never draw. They append [`DrawCommand`]s describing rectangles and
//! text, and the host hands the finished [`DrawList`] to whatever renderer it
//! uses. Commands are in painter's order: later commands cover earlier ones.

use crate::{
    color::Color,
    geometry::{Point, Rect, Size},
};

/// Alignment of text inside its clip rectangle, as fractions of the free space.
///
/// `(0.5, 0.5)` centers the text; `(0.0, 0.0)` pins it to the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAlign {
    /// Horizontal fraction.
    pub x: f32,
    /// Vertical fraction.
    pub y: f32,
}

impl TextAlign {
    /// Centered in both directions.
    pub const CENTER: TextAlign = TextAlign { x: 0.5, y: 0.5 };
    /// Top-left.
    pub const TOP_LEFT: TextAlign = TextAlign { x: 0.0, y: 0.0 };
    /// Horizontally centered, pinned to the top.
    pub const TOP_CENTER: TextAlign = TextAlign { x: 0.5, y: 0.0 };
    /// Left-aligned, vertically centered.
    pub const LEFT_CENTER: TextAlign = TextAlign { x: 0.0, y: 0.5 };

    /// Top-left corner of a `size` block aligned inside `clip`.
    ///
    /// Text larger than `clip` starts at `clip.min` and overflows to the right
    /// and bottom, where the renderer clips it.
    pub fn place(self, clip: Rect, size: Size) -> Point {
        Point::new(
            clip.min.x + ((clip.width() - size.width) * self.x).max(0.0),
            clip.min.y + ((clip.height() - size.height) * self.y).max(0.0),
        )
    }
}

/// A single primitive for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled, optionally rounded rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        rounding: f32,
    },
    /// A run of text.
    Text {
        /// Top-left corner of the laid-out text.
        pos: Point,
        /// Glyphs outside this rectangle must not be drawn.
        clip: Rect,
        /// Alignment that produced `pos`, kept for renderers that re-measure.
        align: TextAlign,
        /// The text itself.
        text: String,
        /// Text color.
        color: Color,
    },
}

/// Ordered commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Appends a filled rectangle. Empty rectangles are skipped.
    pub fn fill_rect(&mut self, rect: Rect, color: Color, rounding: f32) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            rounding,
        });
    }

    /// Moves every command of `other` to the end of this list.
    pub fn append(&mut self, mut other: DrawList) {
        self.commands.append(&mut other.commands);
    }

    /// Appends text already positioned at `pos`.
    pub fn text(
        &mut self,
        pos: Point,
        clip: Rect,
        align: TextAlign,
        text: impl Into<String>,
        color: Color,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            pos,
            clip,
            align,
            text,
            color,
        });
    }

    /// Commands in painter's order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterates the text runs.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::FillRect { .. } => None,
        })
    }

    /// Iterates filled rectangles with their colors.
    pub fn rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect { rect, color, .. } => Some((*rect, *color)),
            DrawCommand::Text { .. } => None,
        })
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Removes every command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
