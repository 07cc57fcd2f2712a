//! # GUI context
//!
//! [`GuiContext`] owns everything an immediate-mode widget call needs besides
//! its own arguments: the frame's [`InputSample`], the capture and focus
//! registers, the id stack, the layout cursor, the [`Style`], per-widget state
//! and the [`DrawList`] being built.
//!
//! ## Capture
//!
//! At most one widget holds the *capture* at a time. A widget acquires it with
//! [`GuiContext::try_capture`] when a gesture starts (pointer press inside it,
//! or activation while focused) and keeps receiving input through it until it
//! calls [`GuiContext::release`]. The capture is also dropped when:
//!
//! - the host moves focus elsewhere with [`GuiContext::set_focus`],
//! - the host calls [`GuiContext::clear_capture`] (for example on window focus loss),
//! - the capturing widget is not submitted during a frame.
//!
//! ## Frame protocol
//!
//! ```
//! use duoslide_ui::{context::GuiContext, input::InputSample};
//!
//! let mut ctx = GuiContext::new();
//! ctx.begin_frame(InputSample::default());
//! // ... widget calls ...
//! let output = ctx.end_frame();
//! assert!(output.draw_list.is_empty());
//! ```

use std::hash::Hash;

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::{
    color::Color,
    draw::{DrawList, TextAlign},
    geometry::{Point, Rect, Size},
    id::{IdStack, WidgetId},
    input::InputSample,
    layout::LayoutCursor,
    state::{State, StateRegistry},
    style::Style,
    text::{MonospaceMeasure, TextMeasure},
};

/// Frames an unsubmitted widget's state survives before it is collected.
pub const DEFAULT_STATE_RETENTION_FRAMES: u64 = 2;

/// How the current capture was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Pointer press; released when the button goes up.
    Pointer,
    /// Keyboard or gamepad activation; released by a second activation.
    DirectionalPad,
}

/// The widget currently receiving exclusive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCapture {
    /// Capturing widget.
    pub id: WidgetId,
    /// Gesture that started the capture.
    pub source: InputSource,
    /// True during the frame the capture was acquired.
    pub just_activated: bool,
    /// The capturing widget was submitted this frame.
    pub alive: bool,
}

/// Hover/click status of an item for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemInteraction {
    /// The pointer is over the item and no other widget holds the capture.
    pub hovered: bool,
    /// The pointer was pressed over the item this frame.
    pub clicked: bool,
}

/// What a finished frame hands back to the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    /// Primitives to render.
    pub draw_list: DrawList,
    /// Capture held at the end of the frame.
    pub capture: Option<WidgetId>,
    /// Some widget is hovered or captured, so the host should not treat
    /// pointer input as its own.
    pub wants_pointer: bool,
}

/// Draw list that widget calls append to.
///
/// Overlay commands follow every item command in the frame's output, so
/// popups cover items submitted after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawLayer {
    /// Regular items.
    #[default]
    Items,
    /// Popups.
    Overlay,
}

/// Explicit immediate-mode context passed by `&mut` to every widget call.
pub struct GuiContext {
    style: Style,
    input: InputSample,
    capture: Option<ActiveCapture>,
    focused: Option<WidgetId>,
    hovered_any: bool,
    overlays: SmallVec<[(WidgetId, Rect); 2]>,
    overlays_prev: SmallVec<[(WidgetId, Rect); 2]>,
    ids: IdStack,
    layout: LayoutCursor,
    origin: Point,
    states: StateRegistry,
    state_retention_frames: u64,
    draw_list: DrawList,
    overlay_list: DrawList,
    layer: DrawLayer,
    text_measure: Box<dyn TextMeasure>,
    frame: u64,
}

impl Default for GuiContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiContext {
    /// Creates a context with the default style and monospace text metrics.
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            input: InputSample::default(),
            capture: None,
            focused: None,
            hovered_any: false,
            overlays: SmallVec::new(),
            overlays_prev: SmallVec::new(),
            ids: IdStack::default(),
            layout: LayoutCursor::default(),
            origin: Point::new(8.0, 8.0),
            states: StateRegistry::default(),
            state_retention_frames: DEFAULT_STATE_RETENTION_FRAMES,
            draw_list: DrawList::default(),
            overlay_list: DrawList::default(),
            layer: DrawLayer::Items,
            text_measure: Box::new(MonospaceMeasure::default()),
            frame: 0,
        }
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replaces the text measurer.
    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.text_measure = Box::new(measure);
        self
    }

    /// Sets where layout starts each frame.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Sets how many frames an unsubmitted widget keeps its state.
    pub fn with_state_retention(mut self, frames: u64) -> Self {
        self.state_retention_frames = frames.max(1);
        self
    }

    /// Starts a frame with the given input.
    #[tracing::instrument(level = "trace", skip_all, fields(frame = self.frame + 1))]
    pub fn begin_frame(&mut self, input: InputSample) {
        self.frame += 1;
        self.input = input;
        self.hovered_any = false;
        self.overlays_prev = std::mem::take(&mut self.overlays);
        self.ids.reset();
        self.layout.reset(self.origin);
        self.states.begin_frame();
        self.draw_list.clear();
        self.overlay_list.clear();
        self.layer = DrawLayer::Items;
        if let Some(capture) = &mut self.capture {
            capture.just_activated = false;
            capture.alive = false;
        }
    }

    /// Finishes the frame: drops the capture of widgets that were not
    /// submitted, collects stale widget state and returns the draw list.
    #[tracing::instrument(level = "trace", skip_all, fields(frame = self.frame))]
    pub fn end_frame(&mut self) -> FrameOutput {
        if let Some(capture) = self.capture
            && !capture.alive
        {
            debug!(id = ?capture.id, "capturing widget disappeared, releasing capture");
            self.capture = None;
        }
        if self.ids.depth() > 0 {
            warn!(depth = self.ids.depth(), "id stack not balanced at end of frame");
        }
        if self.layout.group_depth() > 0 {
            warn!(depth = self.layout.group_depth(), "group not ended at end of frame");
        }
        self.states.collect(self.state_retention_frames);
        let mut draw_list = std::mem::take(&mut self.draw_list);
        draw_list.append(std::mem::take(&mut self.overlay_list));
        FrameOutput {
            draw_list,
            capture: self.capture.map(|capture| capture.id),
            wants_pointer: self.capture.is_some() || self.hovered_any,
        }
    }

    /// Number of frames started so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Input of the current frame.
    pub fn input(&self) -> &InputSample {
        &self.input
    }

    /// Current style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Mutable style, effective for widgets drawn afterwards.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    // Capture and focus.

    /// Gives `id` the capture unless another widget holds it.
    ///
    /// Acquiring the capture also focuses the widget. Returns whether `id`
    /// holds the capture afterwards.
    pub fn try_capture(&mut self, id: WidgetId, source: InputSource) -> bool {
        match self.capture {
            Some(capture) if capture.id != id => false,
            Some(_) => true,
            None => {
                debug!(?id, ?source, "capture acquired");
                self.capture = Some(ActiveCapture {
                    id,
                    source,
                    just_activated: true,
                    alive: true,
                });
                self.focused = Some(id);
                true
            }
        }
    }

    /// Releases the capture if `id` holds it.
    pub fn release(&mut self, id: WidgetId) -> bool {
        if self.is_captured(id) {
            debug!(?id, "capture released");
            self.capture = None;
            true
        } else {
            false
        }
    }

    /// Drops the capture whoever holds it.
    pub fn clear_capture(&mut self) {
        if let Some(capture) = self.capture.take() {
            debug!(id = ?capture.id, "capture cleared");
        }
    }

    /// True when `id` holds the capture.
    pub fn is_captured(&self, id: WidgetId) -> bool {
        self.capture.is_some_and(|capture| capture.id == id)
    }

    /// Current capture, if any.
    pub fn capture(&self) -> Option<ActiveCapture> {
        self.capture
    }

    /// Focuses `id`. A capture held by another widget is released.
    pub fn set_focus(&mut self, id: WidgetId) {
        if let Some(capture) = self.capture
            && capture.id != id
        {
            debug!(from = ?capture.id, to = ?id, "focus moved, releasing capture");
            self.capture = None;
        }
        self.focused = Some(id);
    }

    /// Clears focus and any capture.
    pub fn clear_focus(&mut self) {
        self.focused = None;
        self.clear_capture();
    }

    /// Focused widget.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Activation was requested this frame and `id` is focused.
    pub fn is_nav_activated(&self, id: WidgetId) -> bool {
        self.input.nav_activate && self.focused == Some(id)
    }

    /// Hit-tests an item and marks a capturing widget as submitted.
    pub fn interact(&mut self, id: WidgetId, rect: Rect) -> ItemInteraction {
        let captured = self.is_captured(id);
        if captured && let Some(capture) = &mut self.capture {
            capture.alive = true;
        }
        let free = self.capture.is_none() || captured;
        let hovered = free
            && self
                .input
                .pointer_pos
                .is_some_and(|pos| rect.contains(pos) && !self.is_blocked(id, pos));
        if hovered {
            self.hovered_any = true;
        }
        ItemInteraction {
            hovered,
            clicked: hovered && self.input.pointer_clicked,
        }
    }

    /// Registers `rect` as floating above regular items (a popup).
    ///
    /// During the next frame the pointer inside it only hovers items of `owner`.
    pub fn register_overlay(&mut self, owner: WidgetId, rect: Rect) {
        self.overlays.push((owner, rect));
    }

    fn is_blocked(&self, id: WidgetId, pos: Point) -> bool {
        self.overlays_prev
            .iter()
            .any(|(owner, rect)| *owner != id && rect.contains(pos))
    }

    /// True if the pointer lies inside an overlay registered by `owner` last frame.
    pub fn pointer_in_overlay(&self, owner: WidgetId) -> bool {
        self.input.pointer_pos.is_some_and(|pos| {
            self.overlays_prev
                .iter()
                .any(|(o, rect)| *o == owner && rect.contains(pos))
        })
    }

    // Identity and state.

    /// Id of a widget labelled `label` in the current scope.
    pub fn id_for(&self, label: &str) -> WidgetId {
        self.ids.id_for(label)
    }

    /// Enters an id scope.
    pub fn push_id(&mut self, key: impl Hash) {
        self.ids.push(key);
    }

    /// Leaves the innermost id scope.
    pub fn pop_id(&mut self) {
        if !self.ids.pop() {
            warn!("pop_id called on an empty id stack");
        }
    }

    /// Persistent state of type `T` for `id`.
    pub fn remember<T>(&mut self, id: WidgetId, init: impl FnOnce() -> T) -> State<T>
    where
        T: Send + Sync + 'static,
    {
        self.states.remember(id, init)
    }

    /// The state registry.
    pub fn states(&self) -> &StateRegistry {
        &self.states
    }

    // Layout.

    /// Where the next item goes.
    pub fn cursor(&self) -> Point {
        self.layout.cursor()
    }

    /// Claims space for an item at the cursor.
    pub fn item_size(&mut self, size: Size) -> Rect {
        self.layout.item_size(size, self.style.item_spacing.y)
    }

    /// Continues on the previous item's line.
    pub fn same_line(&mut self, spacing_x: f32) {
        self.layout.same_line(spacing_x);
    }

    /// Width for the next item.
    pub fn calc_item_width(&self) -> f32 {
        self.layout.item_width(self.style.default_item_width)
    }

    /// Pushes an explicit item width.
    pub fn push_item_width(&mut self, width: f32) {
        self.layout.push_item_width(width);
    }

    /// Pops an item width.
    pub fn pop_item_width(&mut self) {
        if !self.layout.pop_item_width() {
            warn!("pop_item_width called on an empty width stack");
        }
    }

    /// Splits `full_width` between `count` items on one line.
    pub fn push_multi_items_widths(&mut self, count: usize, full_width: f32) {
        let spacing = self.style.item_inner_spacing.x;
        self.layout.push_multi_items_widths(count, full_width, spacing);
    }

    /// Starts a group.
    pub fn begin_group(&mut self) {
        self.layout.begin_group();
    }

    /// Ends a group, returning its bounding box.
    pub fn end_group(&mut self) -> Option<Rect> {
        let rect = self.layout.end_group(self.style.item_spacing.y);
        if rect.is_none() {
            warn!("end_group called without begin_group");
        }
        rect
    }

    /// Rectangle of the last placed item.
    pub fn last_item_rect(&self) -> Rect {
        self.layout.last_item()
    }

    // Drawing.

    /// Extent of `text` at the style's font size.
    pub fn measure_text(&self, text: &str) -> Size {
        self.text_measure.measure(text, self.style.font_size)
    }

    /// Aligns `text` inside `clip` and appends it to the draw list.
    pub fn text_clipped(&mut self, clip: Rect, text: &str, align: TextAlign, color: Color) {
        let pos = align.place(clip, self.measure_text(text));
        self.draw_list_mut().text(pos, clip, align, text, color);
    }

    /// Appends unclipped text with its top-left corner at `pos`.
    pub fn text_at(&mut self, pos: Point, text: &str, color: Color) {
        let clip = Rect::from_min_size(pos, self.measure_text(text));
        self.draw_list_mut()
            .text(pos, clip, TextAlign::TOP_LEFT, text, color);
    }

    /// Switches the layer drawing goes to, returning the previous one.
    pub fn set_draw_layer(&mut self, layer: DrawLayer) -> DrawLayer {
        std::mem::replace(&mut self.layer, layer)
    }

    /// Layer drawing currently goes to.
    pub fn draw_layer(&self) -> DrawLayer {
        self.layer
    }

    /// The draw list of the current layer.
    pub fn draw_list(&self) -> &DrawList {
        match self.layer {
            DrawLayer::Items => &self.draw_list,
            DrawLayer::Overlay => &self.overlay_list,
        }
    }

    /// Mutable draw list of the current layer.
    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        match self.layer {
            DrawLayer::Items => &mut self.draw_list,
            DrawLayer::Overlay => &mut self.overlay_list,
        }
    }
}
