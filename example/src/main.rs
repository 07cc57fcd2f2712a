//! Headless walkthrough of the duoslide widgets.
//!
//! Feeds a scripted sequence of raw input events through one GUI context and
//! prints the edited values. Run with `RUST_LOG=debug` to watch captures and
//! popups come and go.

mod app;
mod script;

use duoslide_ui::{GuiContext, InputState, logging};
use tracing::info;

use crate::app::{AppState, app};

fn main() {
    logging::init_tracing();

    let mut ctx = GuiContext::new();
    let mut input = InputState::default();
    let mut state = AppState::default();

    for (frame, step) in script::steps().into_iter().enumerate() {
        for event in step.events {
            input.push_event(event);
        }
        ctx.begin_frame(input.take_sample());
        let changed = app(&mut ctx, &mut state);
        let output = ctx.end_frame();
        info!(
            frame,
            step = step.name,
            changed,
            commands = output.draw_list.commands().len(),
            capture = ?output.capture,
        );
    }

    println!("{state}");
}
