//! Style metrics and palette.
//!
//! ## Usage
//!
//! Replace the [`Style`] on the context to re-theme every widget drawn after it.

use crate::{color::Color, geometry::Point};

/// Colors used by the widgets, indexed by [`ColorRole`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Regular text.
    pub text: Color,
    /// Text of rows that cannot be interacted with.
    pub text_disabled: Color,
    /// Background of input frames.
    pub frame_bg: Color,
    /// Frame background while hovered.
    pub frame_bg_hovered: Color,
    /// Frame background while captured.
    pub frame_bg_active: Color,
    /// Slider handles.
    pub slider_grab: Color,
    /// Slider handles while captured.
    pub slider_grab_active: Color,
    /// Bar drawn between the two handles of a range slider.
    pub range_slider_bar: Color,
    /// Popup window background.
    pub popup_bg: Color,
    /// Popup window border.
    pub border: Color,
    /// Selected row.
    pub header: Color,
    /// Hovered row.
    pub header_hovered: Color,
    /// Pressed row.
    pub header_active: Color,
    /// Combo arrow button.
    pub button: Color,
    /// Combo arrow button while hovered.
    pub button_hovered: Color,
}

/// Symbolic palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// See [`Palette::text`].
    Text,
    /// See [`Palette::text_disabled`].
    TextDisabled,
    /// See [`Palette::frame_bg`].
    FrameBg,
    /// See [`Palette::frame_bg_hovered`].
    FrameBgHovered,
    /// See [`Palette::frame_bg_active`].
    FrameBgActive,
    /// See [`Palette::slider_grab`].
    SliderGrab,
    /// See [`Palette::slider_grab_active`].
    SliderGrabActive,
    /// See [`Palette::range_slider_bar`].
    RangeSliderBar,
    /// See [`Palette::popup_bg`].
    PopupBg,
    /// See [`Palette::border`].
    Border,
    /// See [`Palette::header`].
    Header,
    /// See [`Palette::header_hovered`].
    HeaderHovered,
    /// See [`Palette::header_active`].
    HeaderActive,
    /// See [`Palette::button`].
    Button,
    /// See [`Palette::button_hovered`].
    ButtonHovered,
}

impl Palette {
    /// Looks up a role.
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Text => self.text,
            ColorRole::TextDisabled => self.text_disabled,
            ColorRole::FrameBg => self.frame_bg,
            ColorRole::FrameBgHovered => self.frame_bg_hovered,
            ColorRole::FrameBgActive => self.frame_bg_active,
            ColorRole::SliderGrab => self.slider_grab,
            ColorRole::SliderGrabActive => self.slider_grab_active,
            ColorRole::RangeSliderBar => self.range_slider_bar,
            ColorRole::PopupBg => self.popup_bg,
            ColorRole::Border => self.border,
            ColorRole::Header => self.header,
            ColorRole::HeaderHovered => self.header_hovered,
            ColorRole::HeaderActive => self.header_active,
            ColorRole::Button => self.button,
            ColorRole::ButtonHovered => self.button_hovered,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::WHITE,
            text_disabled: Color::new(0.50, 0.50, 0.50, 1.00),
            frame_bg: Color::new(0.16, 0.29, 0.48, 0.54),
            frame_bg_hovered: Color::new(0.26, 0.59, 0.98, 0.40),
            frame_bg_active: Color::new(0.26, 0.59, 0.98, 0.67),
            slider_grab: Color::new(0.24, 0.52, 0.88, 1.00),
            slider_grab_active: Color::new(0.26, 0.59, 0.98, 1.00),
            range_slider_bar: Color::new(0.26, 0.59, 0.98, 0.35),
            popup_bg: Color::new(0.08, 0.08, 0.08, 0.94),
            border: Color::new(0.43, 0.43, 0.50, 0.50),
            header: Color::new(0.26, 0.59, 0.98, 0.31),
            header_hovered: Color::new(0.26, 0.59, 0.98, 0.80),
            header_active: Color::new(0.26, 0.59, 0.98, 1.00),
            button: Color::new(0.26, 0.59, 0.98, 0.40),
            button_hovered: Color::new(0.26, 0.59, 0.98, 1.00),
        }
    }
}

/// Spacing and sizing metrics in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Padding inside input frames.
    pub frame_padding: Point,
    /// Rounding radius of input frames.
    pub frame_rounding: f32,
    /// Gap between consecutive items.
    pub item_spacing: Point,
    /// Gap between the parts of one composite item (frame and label).
    pub item_inner_spacing: Point,
    /// Padding inside popups.
    pub window_padding: Point,
    /// Smallest extent of a slider handle along its track.
    pub grab_min_size: f32,
    /// Rounding radius of slider handles.
    pub grab_rounding: f32,
    /// Line height of the font.
    pub font_size: f32,
    /// Width used by items when no explicit width was pushed.
    pub default_item_width: f32,
    /// Colors.
    pub palette: Palette,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            frame_padding: Point::new(4.0, 3.0),
            frame_rounding: 0.0,
            item_spacing: Point::new(8.0, 4.0),
            item_inner_spacing: Point::new(4.0, 4.0),
            window_padding: Point::new(8.0, 8.0),
            grab_min_size: 10.0,
            grab_rounding: 0.0,
            font_size: 13.0,
            default_item_width: 200.0,
            palette: Palette::default(),
        }
    }
}

impl Style {
    /// Height of a single-line framed item.
    pub fn frame_height(&self) -> f32 {
        self.font_size + self.frame_padding.y * 2.0
    }
}
