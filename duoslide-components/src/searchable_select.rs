//! A combo box whose popup can be narrowed down by typing.
//!
//! ## Usage
//!
//! Pick one entry out of a long list (maps, presets, assets) where scrolling
//! alone would be tedious.
//!
//! Clicking the frame opens a popup listing every item. Typed text edits a
//! query shown in place of the preview, and the popup only lists items that
//! contain it, ignoring case. Clicking a row selects it and closes the popup;
//! clicking elsewhere or cancelling closes it without a change.
//!
//! ```
//! use duoslide_components::searchable_select::{SearchableSelectArgs, searchable_select};
//! use duoslide_ui::{GuiContext, InputSample};
//!
//! let mut ctx = GuiContext::new();
//! let items = ["Apple", "Banana", "Grape"];
//! let mut current = Some(1);
//!
//! ctx.begin_frame(InputSample::default());
//! let changed = searchable_select(
//!     &mut ctx,
//!     "Fruit",
//!     &mut current,
//!     &items,
//!     &SearchableSelectArgs::default(),
//! );
//! let output = ctx.end_frame();
//!
//! assert!(!changed);
//! assert!(output.draw_list.texts().any(|t| t == "Banana"));
//! ```
use derive_setters::Setters;
use duoslide_ui::{DrawLayer, GuiContext, Rect, Size, WidgetId, visible_label};
use tracing::{debug, trace};

use popup::PopupLayout;
use render::{
    RowState, render_frame, render_frame_text, render_label, render_placeholder,
    render_popup_background, render_row,
};

pub use filter::{FilteredItem, filter_items};

mod filter;
mod popup;
mod render;

/// Longest query, in bytes, the popup accepts.
pub const MAX_QUERY_BYTES: usize = 63;

/// Arguments of [`searchable_select`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SearchableSelectArgs {
    /// Preview shown when nothing is selected.
    #[setters(into)]
    pub default_preview_text: String,
    /// Hint shown in the query field while the query is empty.
    #[setters(into)]
    pub input_preview_value: String,
    /// Disabled row shown when no item matches the query.
    #[setters(into)]
    pub empty_placeholder: String,
    /// Rows the popup shows before it scrolls.
    pub max_visible_items: usize,
}

impl Default for SearchableSelectArgs {
    fn default() -> Self {
        Self {
            default_preview_text: "Select...".to_string(),
            input_preview_value: "Search...".to_string(),
            empty_placeholder: "No items found".to_string(),
            max_visible_items: 8,
        }
    }
}

/// Popup memory of one select, kept between frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectPopupState {
    /// The popup is shown.
    pub open: bool,
    /// Current filter text.
    pub query: String,
    /// First visible row.
    pub scroll: usize,
}

/// A row visible in the popup this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectRow {
    /// Index of the item in the unfiltered list.
    pub index: usize,
    /// Hit area of the row.
    pub rect: Rect,
}

/// Everything a select call produced besides the edited index.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableSelectResponse {
    /// Id the select registered under.
    pub id: WidgetId,
    /// A row was selected this frame.
    pub changed: bool,
    /// The popup is open after this frame.
    pub open: bool,
    /// The pointer is over the frame.
    pub hovered: bool,
    /// Frame rectangle.
    pub frame: Rect,
    /// Popup rectangle while open.
    pub popup: Option<Rect>,
    /// Items matching the query.
    pub matched: usize,
    /// Rows drawn in the popup, placeholder excluded.
    pub rows: Vec<SelectRow>,
}

/// Combo box over `items` with a filter query.
///
/// `current` is the index of the selected item. An index past the end is
/// reset to the first item, or to `None` when `items` is empty. Returns `true`
/// when a row was selected.
pub fn searchable_select<S: AsRef<str>>(
    ctx: &mut GuiContext,
    label: &str,
    current: &mut Option<usize>,
    items: &[S],
    args: &SearchableSelectArgs,
) -> bool {
    searchable_select_with_response(ctx, label, current, items, args).changed
}

/// Like [`searchable_select`], returning the full [`SearchableSelectResponse`].
pub fn searchable_select_with_response<S: AsRef<str>>(
    ctx: &mut GuiContext,
    label: &str,
    current: &mut Option<usize>,
    items: &[S],
    args: &SearchableSelectArgs,
) -> SearchableSelectResponse {
    if let Some(index) = *current
        && index >= items.len()
    {
        *current = if items.is_empty() { None } else { Some(0) };
    }

    let id = ctx.id_for(label);
    let label = visible_label(label);
    let label_width = ctx.measure_text(label).width;
    let frame_size = Size::new(ctx.calc_item_width(), ctx.style().frame_height());
    let label_extent = if label_width > 0.0 {
        ctx.style().item_inner_spacing.x + label_width
    } else {
        0.0
    };
    let item = ctx.item_size(Size::new(
        frame_size.width + label_extent,
        frame_size.height,
    ));
    let frame = Rect::from_min_size(item.min, frame_size);

    let interaction = ctx.interact(id, frame);
    let pressed = interaction.clicked || ctx.is_nav_activated(id);
    let in_popup = ctx.pointer_in_overlay(id);
    let focused = ctx.focused() == Some(id);
    let input = ctx.input();
    let pointer_pos = input.pointer_pos;
    let pointer_clicked = input.pointer_clicked;
    let pointer_down = input.pointer_down;
    let wheel = input.wheel;
    let cancel = input.nav_cancel;
    let typed = input.text.clone();
    let backspace = input.backspace;

    let state = ctx.remember(id, SelectPopupState::default);
    let mut popup_state = state.get();
    let was_open = popup_state.open;

    if was_open {
        let clicked_outside = pointer_clicked && !in_popup && !interaction.hovered;
        if pressed || cancel || clicked_outside || !focused {
            popup_state.open = false;
            debug!(?id, "select popup closed");
        }
    } else if pressed {
        popup_state = SelectPopupState {
            open: true,
            ..SelectPopupState::default()
        };
        ctx.set_focus(id);
        debug!(?id, "select popup opened");
    }

    let mut response = SearchableSelectResponse {
        id,
        changed: false,
        open: popup_state.open,
        hovered: interaction.hovered,
        frame,
        popup: None,
        matched: 0,
        rows: Vec::new(),
    };

    if !popup_state.open {
        render_frame(ctx, frame, interaction.hovered, false);
        let preview = current
            .and_then(|index| items.get(index))
            .map_or(args.default_preview_text.as_str(), |item| item.as_ref());
        render_frame_text(ctx, frame, preview, false);
        render_label(ctx, frame, label);
        state.set(popup_state);
        return response;
    }

    if edit_query(&mut popup_state.query, &typed, backspace) {
        popup_state.scroll = 0;
    }

    let filtered = filter_items(items, &popup_state.query);
    let popup = PopupLayout::new(
        ctx.style(),
        frame,
        filtered.len(),
        args.max_visible_items,
    );
    if !was_open && let Some(index) = *current {
        popup_state.scroll = (index + 1).saturating_sub(popup.capacity);
    }
    if in_popup && wheel != 0.0 {
        let next = (popup_state.scroll as f32 - wheel).round().max(0.0);
        popup_state.scroll = next as usize;
    }
    popup_state.scroll = popup_state.scroll.min(popup.max_scroll());
    ctx.register_overlay(id, popup.rect);

    render_frame(ctx, frame, interaction.hovered, true);
    let (query_text, hint) = if popup_state.query.is_empty() {
        (args.input_preview_value.as_str(), true)
    } else {
        (popup_state.query.as_str(), false)
    };
    render_frame_text(ctx, frame, query_text, hint);
    render_label(ctx, frame, label);

    let previous_layer = ctx.set_draw_layer(DrawLayer::Overlay);
    render_popup_background(ctx, &popup);
    let mut selected = None;
    for (slot, item) in filtered
        .iter()
        .skip(popup_state.scroll)
        .take(popup.capacity)
        .enumerate()
    {
        let rect = popup.row_rect(slot);
        let hovered = in_popup && pointer_pos.is_some_and(|pos| rect.contains(pos));
        if hovered && pointer_clicked && was_open {
            selected = Some(item.index);
        }
        let row_state = RowState {
            selected: *current == Some(item.index),
            hovered,
            pressed: hovered && pointer_down,
        };
        render_row(ctx, &popup, slot, item.text, row_state);
        response.rows.push(SelectRow {
            index: item.index,
            rect,
        });
    }
    if filtered.is_empty() {
        render_placeholder(ctx, &popup, &args.empty_placeholder);
    }
    ctx.set_draw_layer(previous_layer);

    if let Some(index) = selected {
        trace!(?id, index, "select item chosen");
        *current = Some(index);
        popup_state.open = false;
        response.changed = true;
        response.open = false;
    }
    response.popup = Some(popup.rect);
    response.matched = filtered.len();
    state.set(popup_state);
    response
}

/// Applies typed text and backspaces to `query`. Returns true if it changed.
fn edit_query(query: &mut String, typed: &str, backspace: u32) -> bool {
    let before = query.len();
    let mut changed = false;
    for _ in 0..backspace {
        changed |= query.pop().is_some();
    }
    for ch in typed.chars().filter(|ch| !ch.is_control()) {
        if query.len() + ch.len_utf8() > MAX_QUERY_BYTES {
            break;
        }
        query.push(ch);
        changed = true;
    }
    changed || query.len() != before
}
