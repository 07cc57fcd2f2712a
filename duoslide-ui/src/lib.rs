//! duoslide-ui is the immediate-mode host core shared by the duoslide widgets.
//!
//! # Frame loop
//!
//! A host owns one [`GuiContext`] and, once per frame:
//!
//! 1. folds its raw events into an [`InputSample`] (see [`input::InputState`]),
//! 2. calls [`GuiContext::begin_frame`],
//! 3. calls widget functions, each taking `&mut GuiContext`,
//! 4. calls [`GuiContext::end_frame`] and renders the returned [`DrawList`].
//!
//! ```
//! use duoslide_ui::{GuiContext, InputEvent, InputState, Point};
//!
//! let mut ctx = GuiContext::new();
//! let mut input = InputState::default();
//!
//! input.push_event(InputEvent::PointerMoved(Point::new(20.0, 12.0)));
//! ctx.begin_frame(input.take_sample());
//! let output = ctx.end_frame();
//! assert_eq!(output.capture, None);
//! ```
//!
//! # Widget state
//!
//! Widgets that need memory across frames use [`GuiContext::remember`], which
//! returns a [`State`] handle keyed by the widget id. State of widgets that stop
//! being submitted is collected after a few frames.
//!
//! # Logging
//!
//! Everything logs through `tracing`. Hosts without a subscriber of their own
//! can call [`logging::init_tracing`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod context;
pub mod draw;
pub mod geometry;
pub mod id;
pub mod input;
pub mod layout;
pub mod logging;
pub mod state;
pub mod style;
#[cfg(any(test, feature = "testing"))]
pub mod test;
pub mod text;

pub use crate::{
    color::Color,
    context::{ActiveCapture, DrawLayer, FrameOutput, GuiContext, InputSource, ItemInteraction},
    draw::{DrawCommand, DrawList, TextAlign},
    geometry::{Axis, Point, Rect, Size},
    id::{WidgetId, visible_label},
    input::{InputEvent, InputSample, InputState, NavKey},
    state::State,
    style::{ColorRole, Palette, Style},
    text::{MonospaceMeasure, TextMeasure},
};
