//! Headless frame driver for widget tests.
//!
//! ```rust,ignore
//! use duoslide_ui::{input::InputSample, test::TestHarness};
//!
//! let mut harness = TestHarness::new();
//! let frame = harness.frame(InputSample::default(), |ctx| ctx.frame_count());
//! assert_eq!(frame, 1);
//! assert!(harness.last_output().draw_list.is_empty());
//! ```

use crate::{
    context::{FrameOutput, GuiContext},
    input::InputSample,
};

/// Runs whole frames against an owned [`GuiContext`].
pub struct TestHarness {
    ctx: GuiContext,
    last_output: FrameOutput,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Harness around a default context.
    pub fn new() -> Self {
        Self::with_context(GuiContext::new())
    }

    /// Harness around a prepared context.
    pub fn with_context(ctx: GuiContext) -> Self {
        Self {
            ctx,
            last_output: FrameOutput::default(),
        }
    }

    /// Runs one frame: `begin_frame(input)`, `build`, `end_frame`.
    pub fn frame<R>(&mut self, input: InputSample, build: impl FnOnce(&mut GuiContext) -> R) -> R {
        self.ctx.begin_frame(input);
        let result = build(&mut self.ctx);
        self.last_output = self.ctx.end_frame();
        result
    }

    /// Output of the most recent frame.
    pub fn last_output(&self) -> &FrameOutput {
        &self.last_output
    }

    /// The context, between frames.
    pub fn context(&self) -> &GuiContext {
        &self.ctx
    }

    /// Mutable context, between frames.
    pub fn context_mut(&mut self) -> &mut GuiContext {
        &mut self.ctx
    }
}
