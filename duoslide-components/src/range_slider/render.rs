use duoslide_ui::{Axis, ColorRole, GuiContext, Point, Rect, TextAlign};

use super::layout::SliderGeometry;

pub(super) fn render_frame(ctx: &mut GuiContext, frame: Rect, hovered: bool, captured: bool) {
    let role = if captured {
        ColorRole::FrameBgActive
    } else if hovered {
        ColorRole::FrameBgHovered
    } else {
        ColorRole::FrameBg
    };
    let style = ctx.style();
    let (color, rounding) = (style.palette.color(role), style.frame_rounding);
    ctx.draw_list_mut().fill_rect(frame, color, rounding);
}

pub(super) fn render_grabs(ctx: &mut GuiContext, geometry: &SliderGeometry, captured: bool) {
    let role = if captured {
        ColorRole::SliderGrabActive
    } else {
        ColorRole::SliderGrab
    };
    let style = ctx.style();
    let (color, rounding) = (style.palette.color(role), style.grab_rounding);
    for handle in geometry.handles {
        ctx.draw_list_mut().fill_rect(handle, color, rounding);
    }
}

pub(super) fn render_connector(ctx: &mut GuiContext, geometry: &SliderGeometry) {
    let style = ctx.style();
    let (color, rounding) = (
        style.palette.color(ColorRole::RangeSliderBar),
        style.grab_rounding,
    );
    ctx.draw_list_mut()
        .fill_rect(geometry.connector, color, rounding);
}

/// Value text inside the frame: centered when horizontal, top-centered below
/// the frame padding when vertical.
pub(super) fn render_value_text(ctx: &mut GuiContext, frame: Rect, axis: Axis, text: &str) {
    let color = ctx.style().palette.text;
    match axis {
        Axis::X => ctx.text_clipped(frame, text, TextAlign::CENTER, color),
        Axis::Y => {
            let clip = Rect::from_points(
                Point::new(frame.min.x, frame.min.y + ctx.style().frame_padding.y),
                frame.max,
            );
            ctx.text_clipped(clip, text, TextAlign::TOP_CENTER, color);
        }
    }
}

/// Label to the right of the frame.
pub(super) fn render_label(ctx: &mut GuiContext, frame: Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let style = ctx.style();
    let pos = Point::new(
        frame.max.x + style.item_inner_spacing.x,
        frame.min.y + style.frame_padding.y,
    );
    let color = style.palette.text;
    ctx.text_at(pos, label, color);
}
