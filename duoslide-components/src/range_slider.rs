//! A slider with two handles selecting a sub-range of a numeric domain.
//!
//! ## Usage
//!
//! Pick the lower and upper bound of a filter, a time window or a clip
//! region with one control.
//!
//! The two handles have no left/right identity: a press moves the handle
//! closest to the pointer, and a drag keeps moving the same handle even after
//! it passes the other one. Values are edited in place and the call returns
//! `true` during frames where either of them changed.
//!
//! ```
//! use duoslide_components::{numeric::NumericDomain, range_slider::range_slider};
//! use duoslide_ui::{GuiContext, InputSample};
//!
//! let mut ctx = GuiContext::new();
//! let domain = NumericDomain::new(0.0f32, 100.0).with_format("%.1f ms");
//! let (mut lo, mut hi) = (10.0f32, 90.0f32);
//!
//! ctx.begin_frame(InputSample::default());
//! let changed = range_slider(&mut ctx, "Window", &domain, &mut lo, &mut hi);
//! let output = ctx.end_frame();
//!
//! assert!(!changed);
//! assert!(output.draw_list.texts().any(|t| t == "(10.0 ms, 90.0 ms)"));
//! ```
use duoslide_ui::{Axis, GuiContext, InputSource, Point, Rect, Size, WidgetId, visible_label};

use crate::{
    format::FormatSpec,
    numeric::{NumericDomain, Scalar},
};

use interaction::{Behavior, range_slider_behavior};
use render::{render_connector, render_frame, render_grabs, render_label, render_value_text};

pub use interaction::{HandleBias, InteractionState};
pub use layout::SliderGeometry;

mod interaction;
mod layout;
mod render;

/// Format of [`range_slider_angle`] when none is given.
pub const DEFAULT_ANGLE_FORMAT: &str = "(%d, %d) deg";

/// Everything a range slider call produced besides the edited values.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderResponse {
    /// Id the slider registered under.
    pub id: WidgetId,
    /// A value changed this frame.
    pub changed: bool,
    /// The slider holds the capture after this frame's input.
    pub captured: bool,
    /// The pointer is over the frame.
    pub hovered: bool,
    /// Frame, handle and connector rectangles.
    pub geometry: SliderGeometry,
    /// The value text drawn inside the frame.
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Orientation {
    Horizontal,
    Vertical(Size),
}

/// Horizontal range slider sized by the current item width.
///
/// Returns `true` when `v1` or `v2` changed.
pub fn range_slider<T: Scalar>(
    ctx: &mut GuiContext,
    label: &str,
    domain: &NumericDomain<T>,
    v1: &mut T,
    v2: &mut T,
) -> bool {
    range_slider_with_response(ctx, label, domain, v1, v2).changed
}

/// Like [`range_slider`], returning the full [`RangeSliderResponse`].
pub fn range_slider_with_response<T: Scalar>(
    ctx: &mut GuiContext,
    label: &str,
    domain: &NumericDomain<T>,
    v1: &mut T,
    v2: &mut T,
) -> RangeSliderResponse {
    let format = FormatSpec::for_kind(T::KIND, domain.format());
    slider_impl(ctx, label, domain, v1, v2, Orientation::Horizontal, &format)
}

/// Vertical range slider with an explicit frame `size`.
///
/// The minimum sits at the bottom of the track.
pub fn range_slider_vertical<T: Scalar>(
    ctx: &mut GuiContext,
    label: &str,
    size: Size,
    domain: &NumericDomain<T>,
    v1: &mut T,
    v2: &mut T,
) -> bool {
    let format = FormatSpec::for_kind(T::KIND, domain.format());
    slider_impl(ctx, label, domain, v1, v2, Orientation::Vertical(size), &format).changed
}

fn slider_impl<T: Scalar>(
    ctx: &mut GuiContext,
    label: &str,
    domain: &NumericDomain<T>,
    v1: &mut T,
    v2: &mut T,
    orientation: Orientation,
    format: &FormatSpec,
) -> RangeSliderResponse {
    let id = ctx.id_for(label);
    let label = visible_label(label);
    let label_size = ctx.measure_text(label);

    let (frame_size, axis) = match orientation {
        Orientation::Horizontal => (
            Size::new(ctx.calc_item_width(), ctx.style().frame_height()),
            Axis::X,
        ),
        Orientation::Vertical(size) => (size, Axis::Y),
    };
    let label_extent = if label_size.width > 0.0 {
        ctx.style().item_inner_spacing.x + label_size.width
    } else {
        0.0
    };
    let item = ctx.item_size(Size::new(
        frame_size.width + label_extent,
        frame_size.height,
    ));
    let frame = Rect::from_min_size(item.min, frame_size);

    let interaction = ctx.interact(id, frame);
    if interaction.clicked {
        ctx.try_capture(id, InputSource::Pointer);
    } else if ctx.is_nav_activated(id) {
        ctx.try_capture(id, InputSource::DirectionalPad);
    }

    let active = ctx.is_captured(id);
    render_frame(ctx, frame, interaction.hovered, active);

    let behavior = Behavior {
        id,
        frame,
        axis,
        format,
    };
    let (changed, geometry) = range_slider_behavior(ctx, &behavior, domain, v1, v2);
    let captured = ctx.is_captured(id);

    render_grabs(ctx, &geometry, captured);
    render_connector(ctx, &geometry);
    let text = format.format_pair(*v1, *v2);
    render_value_text(ctx, frame, axis, &text);
    render_label(ctx, frame, label);

    RangeSliderResponse {
        id,
        changed,
        captured,
        hovered: interaction.hovered,
        geometry,
        text,
    }
}

/// `N` range sliders on one line sharing the current item width, followed by
/// the label. Component `i` edits the pair `(v1[i], v2[i])`.
///
/// `N` must be 2, 3 or 4; other sizes fail to compile.
pub fn range_slider_vector<T: Scalar, const N: usize>(
    ctx: &mut GuiContext,
    label: &str,
    domain: &NumericDomain<T>,
    v1: &mut [T; N],
    v2: &mut [T; N],
) -> bool {
    const { assert!(N >= 2 && N <= 4, "range_slider_vector supports 2 to 4 components") };

    let format = FormatSpec::for_kind(T::KIND, domain.format());
    let inner_spacing = ctx.style().item_inner_spacing.x;
    let mut changed = false;

    ctx.begin_group();
    ctx.push_id(label);
    let full_width = ctx.calc_item_width();
    ctx.push_multi_items_widths(N, full_width);
    for (i, (a, b)) in v1.iter_mut().zip(v2.iter_mut()).enumerate() {
        ctx.push_id(i);
        changed |= slider_impl(ctx, "##v", domain, a, b, Orientation::Horizontal, &format).changed;
        ctx.same_line(inner_spacing);
        ctx.pop_id();
        ctx.pop_item_width();
    }
    ctx.pop_id();

    let label = visible_label(label);
    if !label.is_empty() {
        let width = ctx.measure_text(label).width;
        let height = ctx.style().frame_height();
        let rect = ctx.item_size(Size::new(width, height));
        let pos = Point::new(rect.min.x, rect.min.y + ctx.style().frame_padding.y);
        let color = ctx.style().palette.text;
        ctx.text_at(pos, label, color);
    }
    ctx.end_group();
    changed
}

/// Degree bounds of [`range_slider_angle`], a full turn either way by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    /// Lower bound in degrees.
    pub degrees_min: f32,
    /// Upper bound in degrees.
    pub degrees_max: f32,
}

impl Default for AngleRange {
    fn default() -> Self {
        Self {
            degrees_min: -360.0,
            degrees_max: 360.0,
        }
    }
}

/// Range slider over two angles stored in radians and shown in degrees.
///
/// The pair is displayed and dragged as `(rad2, rad1)`: the second angle
/// fills the first slot of the format.
///
/// ```
/// use duoslide_components::range_slider::{AngleRange, range_slider_angle};
/// use duoslide_ui::{GuiContext, InputSample};
///
/// let mut ctx = GuiContext::new();
/// let AngleRange { degrees_min, degrees_max } = AngleRange::default();
/// let (mut a, mut b) = (0.0f32, std::f32::consts::FRAC_PI_2);
///
/// ctx.begin_frame(InputSample::default());
/// range_slider_angle(&mut ctx, "Arc", &mut a, &mut b, degrees_min, degrees_max);
/// let output = ctx.end_frame();
/// assert!(output.draw_list.texts().any(|t| t == "(90, 0) deg"));
/// ```
pub fn range_slider_angle(
    ctx: &mut GuiContext,
    label: &str,
    rad1: &mut f32,
    rad2: &mut f32,
    degrees_min: f32,
    degrees_max: f32,
) -> bool {
    range_slider_angle_with_format(
        ctx,
        label,
        rad1,
        rad2,
        degrees_min,
        degrees_max,
        DEFAULT_ANGLE_FORMAT,
    )
}

/// [`range_slider_angle`] with a custom format.
pub fn range_slider_angle_with_format(
    ctx: &mut GuiContext,
    label: &str,
    rad1: &mut f32,
    rad2: &mut f32,
    degrees_min: f32,
    degrees_max: f32,
    format: &str,
) -> bool {
    let domain = NumericDomain::new(degrees_min, degrees_max).with_format(format);
    let mut deg1 = rad1.to_degrees();
    let mut deg2 = rad2.to_degrees();
    let changed = range_slider(ctx, label, &domain, &mut deg2, &mut deg1);
    if changed {
        *rad1 = deg1.to_radians();
        *rad2 = deg2.to_radians();
    }
    changed
}

/// `f32` range slider over `[min, max]`.
pub fn range_slider_f32(
    ctx: &mut GuiContext,
    label: &str,
    v1: &mut f32,
    v2: &mut f32,
    min: f32,
    max: f32,
) -> bool {
    range_slider(ctx, label, &NumericDomain::new(min, max), v1, v2)
}

/// `i32` range slider over `[min, max]`.
pub fn range_slider_i32(
    ctx: &mut GuiContext,
    label: &str,
    v1: &mut i32,
    v2: &mut i32,
    min: i32,
    max: i32,
) -> bool {
    range_slider(ctx, label, &NumericDomain::new(min, max), v1, v2)
}

/// `N` `f32` range sliders on one line.
pub fn range_slider_f32_vec<const N: usize>(
    ctx: &mut GuiContext,
    label: &str,
    v1: &mut [f32; N],
    v2: &mut [f32; N],
    min: f32,
    max: f32,
) -> bool {
    range_slider_vector(ctx, label, &NumericDomain::new(min, max), v1, v2)
}

/// `N` `i32` range sliders on one line.
pub fn range_slider_i32_vec<const N: usize>(
    ctx: &mut GuiContext,
    label: &str,
    v1: &mut [i32; N],
    v2: &mut [i32; N],
    min: i32,
    max: i32,
) -> bool {
    range_slider_vector(ctx, label, &NumericDomain::new(min, max), v1, v2)
}

/// Vertical `f32` range slider.
pub fn range_slider_vertical_f32(
    ctx: &mut GuiContext,
    label: &str,
    size: Size,
    v1: &mut f32,
    v2: &mut f32,
    min: f32,
    max: f32,
) -> bool {
    range_slider_vertical(ctx, label, size, &NumericDomain::new(min, max), v1, v2)
}

/// Vertical `i32` range slider.
pub fn range_slider_vertical_i32(
    ctx: &mut GuiContext,
    label: &str,
    size: Size,
    v1: &mut i32,
    v2: &mut i32,
    min: i32,
    max: i32,
) -> bool {
    range_slider_vertical(ctx, label, size, &NumericDomain::new(min, max), v1, v2)
}
