//! Text measurement.
//!
//! Layout needs text extents before anything is rendered. The host plugs its
//! font engine in through [`TextMeasure`]; [`MonospaceMeasure`] is the
//! built-in fallback used by headless hosts and tests.

use crate::geometry::Size;

/// Measures single-line text.
pub trait TextMeasure: Send + Sync {
    /// Extent of `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

/// Every glyph advances by a fixed fraction of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Advance of one glyph relative to the font size.
    pub advance_ratio: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.5 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        let glyphs = text.chars().count() as f32;
        Size::new(glyphs * font_size * self.advance_ratio, font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_chars_not_bytes() {
        let measure = MonospaceMeasure::default();
        assert_eq!(measure.measure("abcd", 10.0), Size::new(20.0, 10.0));
        assert_eq!(measure.measure("äö", 10.0), Size::new(10.0, 10.0));
        assert_eq!(measure.measure("", 10.0).width, 0.0);
    }
}
