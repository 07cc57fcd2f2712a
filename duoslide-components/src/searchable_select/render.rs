use duoslide_ui::{ColorRole, GuiContext, Point, Rect, TextAlign};

use super::popup::PopupLayout;

const ARROW_GLYPH: &str = "\u{25be}";

/// Left-hand frame background and the square arrow button at its right end.
pub(super) fn render_frame(ctx: &mut GuiContext, frame: Rect, hovered: bool, open: bool) {
    let style = ctx.style();
    let arrow_size = style.frame_height();
    let value_x2 = (frame.max.x - arrow_size).max(frame.min.x);
    let frame_role = if hovered && !open {
        ColorRole::FrameBgHovered
    } else {
        ColorRole::FrameBg
    };
    let button_role = if open || hovered {
        ColorRole::ButtonHovered
    } else {
        ColorRole::Button
    };
    let frame_color = style.palette.color(frame_role);
    let button_color = style.palette.color(button_role);
    let text_color = style.palette.text;
    let rounding = style.frame_rounding;

    let value_rect = Rect::new(frame.min.x, frame.min.y, value_x2, frame.max.y);
    let arrow_rect = Rect::new(value_x2, frame.min.y, frame.max.x, frame.max.y);
    ctx.draw_list_mut().fill_rect(value_rect, frame_color, rounding);
    ctx.draw_list_mut().fill_rect(arrow_rect, button_color, rounding);
    ctx.text_clipped(arrow_rect, ARROW_GLYPH, TextAlign::CENTER, text_color);
}

/// Preview or query text inside the frame, left of the arrow button.
pub(super) fn render_frame_text(ctx: &mut GuiContext, frame: Rect, text: &str, hint: bool) {
    let style = ctx.style();
    let clip = Rect::from_points(
        frame.min + style.frame_padding,
        Point::new((frame.max.x - style.frame_height()).max(frame.min.x), frame.max.y),
    );
    let color = if hint {
        style.palette.text_disabled
    } else {
        style.palette.text
    };
    ctx.text_clipped(clip, text, TextAlign::TOP_LEFT, color);
}

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

pub(super) fn render_popup_background(ctx: &mut GuiContext, popup: &PopupLayout) {
    let style = ctx.style();
    let (bg, border) = (style.palette.popup_bg, style.palette.border);
    let outline = popup.rect.expand(1.0, 1.0);
    ctx.draw_list_mut().fill_rect(outline, border, 0.0);
    ctx.draw_list_mut().fill_rect(popup.rect, bg, 0.0);
}

/// Visual state of one popup row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RowState {
    pub selected: bool,
    pub hovered: bool,
    pub pressed: bool,
}

pub(super) fn render_row(
    ctx: &mut GuiContext,
    popup: &PopupLayout,
    slot: usize,
    text: &str,
    state: RowState,
) {
    let style = ctx.style();
    let highlight = if state.pressed {
        Some(ColorRole::HeaderActive)
    } else if state.hovered {
        Some(ColorRole::HeaderHovered)
    } else if state.selected {
        Some(ColorRole::Header)
    } else {
        None
    }
    .map(|role| style.palette.color(role));
    let text_color = style.palette.text;

    let rect = popup.row_rect(slot);
    if let Some(color) = highlight {
        ctx.draw_list_mut().fill_rect(rect, color, 0.0);
    }
    ctx.text_clipped(
        clip_row(rect, popup.row_text_pos(slot)),
        text,
        TextAlign::TOP_LEFT,
        text_color,
    );
}

/// The disabled row shown when nothing matches.
pub(super) fn render_placeholder(ctx: &mut GuiContext, popup: &PopupLayout, text: &str) {
    let color = ctx.style().palette.text_disabled;
    let rect = popup.row_rect(0);
    ctx.text_clipped(
        clip_row(rect, popup.row_text_pos(0)),
        text,
        TextAlign::TOP_LEFT,
        color,
    );
}

fn clip_row(rect: Rect, text_pos: Point) -> Rect {
    Rect::from_points(text_pos, Point::new(rect.max.x, rect.max.y))
}
