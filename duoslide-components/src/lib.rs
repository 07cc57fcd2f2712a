//! Range sliders and a searchable select for the duoslide immediate-mode core.
//!
//! # Usage
//!
//! Every widget is a plain function taking the host's
//! [`GuiContext`](duoslide_ui::GuiContext) first. Call them between
//! `begin_frame` and `end_frame`; they edit the caller's values in place and
//! return whether anything changed.
//!
//! # Example
//!
//! ```
//! use duoslide_components::{
//!     numeric::NumericDomain,
//!     range_slider::{range_slider, range_slider_i32},
//!     searchable_select::{SearchableSelectArgs, searchable_select},
//! };
//! use duoslide_ui::{GuiContext, InputSample};
//!
//! let mut ctx = GuiContext::new();
//! let (mut lo, mut hi) = (0.25f64, 0.75f64);
//! let (mut first, mut last) = (2, 8);
//! let mut map = None;
//!
//! ctx.begin_frame(InputSample::default());
//! range_slider(&mut ctx, "Blend", &NumericDomain::new(0.0, 1.0), &mut lo, &mut hi);
//! range_slider_i32(&mut ctx, "Frames", &mut first, &mut last, 0, 10);
//! searchable_select(
//!     &mut ctx,
//!     "Map",
//!     &mut map,
//!     &["Arena", "Harbor"],
//!     &SearchableSelectArgs::default().default_preview_text("Pick a map"),
//! );
//! let output = ctx.end_frame();
//!
//! assert!(output.draw_list.texts().any(|t| t == "(2, 8)"));
//! assert!(output.draw_list.texts().any(|t| t == "Pick a map"));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod format;
pub mod numeric;
pub mod range_slider;
pub mod ratio;
pub mod rounding;
pub mod searchable_select;

pub use crate::{
    format::{FormatError, FormatSpec},
    numeric::{DataKind, DomainError, NumericDomain, Scalar},
    range_slider::{
        AngleRange, RangeSliderResponse, range_slider, range_slider_angle, range_slider_vector,
        range_slider_vertical, range_slider_with_response,
    },
    searchable_select::{SearchableSelectArgs, filter_items, searchable_select},
};
