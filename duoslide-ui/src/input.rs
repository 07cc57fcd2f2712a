//! # Input sampling
//!
//! Hosts feed raw events from their windowing layer into [`InputState`] as
//! they arrive. Once per frame the queue is folded into an [`InputSample`],
//! the immutable snapshot that widgets read through the
//! [`GuiContext`](crate::context::GuiContext).
//!
//! Hosts that already have per-frame state (or tests) can build an
//! [`InputSample`] directly with its constructor helpers:
//!
//! ```
//! use duoslide_ui::{geometry::Point, input::InputSample};
//!
//! let press = InputSample::press(Point::new(40.0, 10.0));
//! assert!(press.pointer_down && press.pointer_clicked);
//!
//! let step = InputSample::nav(1.0, 0.0).with_fast();
//! assert_eq!(step.nav_delta.x, 1.0);
//! assert!(step.fast);
//! ```

use std::collections::VecDeque;

use crate::geometry::Point;

/// Maximum number of raw events kept between two samples.
///
/// When a frame stalls, the oldest events are dropped first.
const KEEP_EVENTS_COUNT: usize = 64;

/// Navigation keys understood by the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Decrease along the horizontal axis.
    Left,
    /// Increase along the horizontal axis.
    Right,
    /// Towards the top of the screen.
    Up,
    /// Towards the bottom of the screen.
    Down,
    /// Activate the focused widget (enter/space/gamepad A).
    Activate,
    /// Cancel the current interaction (escape/gamepad B).
    Cancel,
    /// Delete the last typed character.
    Backspace,
}

/// A raw input event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to a new position.
    PointerMoved(Point),
    /// The pointer left the surface.
    PointerLeft,
    /// The primary pointer button changed state.
    PointerButton {
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// Vertical wheel movement in lines, positive away from the user.
    Wheel(f32),
    /// A navigation key was pressed (key repeats arrive as further presses).
    Key(NavKey),
    /// Modifier state changed.
    Modifiers {
        /// Fast tweak modifier (typically shift).
        fast: bool,
        /// Slow tweak modifier (typically alt).
        slow: bool,
    },
    /// Committed text input.
    Text(String),
}

/// Bounded queue of raw events plus the state that persists across frames.
#[derive(Debug, Default)]
pub struct InputState {
    events: VecDeque<InputEvent>,
    pointer_pos: Option<Point>,
    pointer_down: bool,
    fast: bool,
    slow: bool,
}

impl InputState {
    /// Appends an event, discarding the oldest one when the queue is full.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
        if self.events.len() > KEEP_EVENTS_COUNT {
            self.events.pop_front();
        }
    }

    /// Number of events waiting for the next sample.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// Drains the queue into a per-frame sample.
    pub fn take_sample(&mut self) -> InputSample {
        let mut sample = InputSample::default();
        for event in self.events.drain(..) {
            match event {
                InputEvent::PointerMoved(pos) => self.pointer_pos = Some(pos),
                InputEvent::PointerLeft => self.pointer_pos = None,
                InputEvent::PointerButton { pressed: true } => {
                    self.pointer_down = true;
                    sample.pointer_clicked = true;
                }
                InputEvent::PointerButton { pressed: false } => {
                    self.pointer_down = false;
                    sample.pointer_released = true;
                }
                InputEvent::Wheel(lines) => sample.wheel += lines,
                InputEvent::Key(key) => match key {
                    NavKey::Left => sample.nav_delta.x -= 1.0,
                    NavKey::Right => sample.nav_delta.x += 1.0,
                    NavKey::Up => sample.nav_delta.y -= 1.0,
                    NavKey::Down => sample.nav_delta.y += 1.0,
                    NavKey::Activate => sample.nav_activate = true,
                    NavKey::Cancel => sample.nav_cancel = true,
                    NavKey::Backspace => sample.backspace += 1,
                },
                InputEvent::Modifiers { fast, slow } => {
                    self.fast = fast;
                    self.slow = slow;
                }
                InputEvent::Text(text) => sample.text.push_str(&text),
            }
        }
        sample.pointer_pos = self.pointer_pos;
        sample.pointer_down = self.pointer_down;
        sample.fast = self.fast;
        sample.slow = self.slow;
        sample
    }
}

/// Everything the widgets may read about input during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSample {
    /// Pointer position, `None` when the pointer is outside the surface.
    pub pointer_pos: Option<Point>,
    /// Primary button is held.
    pub pointer_down: bool,
    /// Primary button went down this frame.
    pub pointer_clicked: bool,
    /// Primary button went up this frame.
    pub pointer_released: bool,
    /// Wheel movement in lines.
    pub wheel: f32,
    /// Directional input in steps; `x` grows right, `y` grows down.
    pub nav_delta: Point,
    /// Activation was requested for the focused widget.
    pub nav_activate: bool,
    /// Cancel was requested.
    pub nav_cancel: bool,
    /// Fast tweak modifier held.
    pub fast: bool,
    /// Slow tweak modifier held.
    pub slow: bool,
    /// Text typed this frame.
    pub text: String,
    /// Backspace presses this frame.
    pub backspace: u32,
}

impl InputSample {
    /// Pointer resting at `pos` with the button up.
    pub fn hover(pos: Point) -> Self {
        Self {
            pointer_pos: Some(pos),
            ..Self::default()
        }
    }

    /// Button pressed at `pos` this frame.
    pub fn press(pos: Point) -> Self {
        Self {
            pointer_pos: Some(pos),
            pointer_down: true,
            pointer_clicked: true,
            ..Self::default()
        }
    }

    /// Button held while the pointer is at `pos`.
    pub fn drag(pos: Point) -> Self {
        Self {
            pointer_pos: Some(pos),
            pointer_down: true,
            ..Self::default()
        }
    }

    /// Button released at `pos` this frame.
    pub fn release(pos: Point) -> Self {
        Self {
            pointer_pos: Some(pos),
            pointer_released: true,
            ..Self::default()
        }
    }

    /// Directional steps without pointer involvement.
    pub fn nav(dx: f32, dy: f32) -> Self {
        Self {
            nav_delta: Point::new(dx, dy),
            ..Self::default()
        }
    }

    /// An activation press.
    pub fn activate() -> Self {
        Self {
            nav_activate: true,
            ..Self::default()
        }
    }

    /// A cancel press.
    pub fn cancel() -> Self {
        Self {
            nav_cancel: true,
            ..Self::default()
        }
    }

    /// Committed text.
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Wheel movement at `pos`.
    pub fn scroll(pos: Point, lines: f32) -> Self {
        Self {
            pointer_pos: Some(pos),
            wheel: lines,
            ..Self::default()
        }
    }

    /// Sets the fast modifier.
    pub fn with_fast(mut self) -> Self {
        self.fast = true;
        self
    }

    /// Sets the slow modifier.
    pub fn with_slow(mut self) -> Self {
        self.slow = true;
        self
    }

    /// Adds backspace presses.
    pub fn with_backspace(mut self, count: u32) -> Self {
        self.backspace += count;
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(NavKey::Left, Point::new(-1.0, 0.0))]
    #[case(NavKey::Right, Point::new(1.0, 0.0))]
    #[case(NavKey::Up, Point::new(0.0, -1.0))]
    #[case(NavKey::Down, Point::new(0.0, 1.0))]
    fn directional_keys(#[case] key: NavKey, #[case] delta: Point) {
        let mut state = InputState::default();
        state.push_event(InputEvent::Key(key));
        let sample = state.take_sample();
        assert_eq!(sample.nav_delta, delta);
        assert!(!sample.nav_activate);
    }

    #[test]
    fn folds_events_into_sample() {
        let mut state = InputState::default();
        state.push_event(InputEvent::PointerMoved(Point::new(5.0, 6.0)));
        state.push_event(InputEvent::PointerButton { pressed: true });
        state.push_event(InputEvent::Key(NavKey::Right));
        state.push_event(InputEvent::Key(NavKey::Right));
        state.push_event(InputEvent::Key(NavKey::Up));
        state.push_event(InputEvent::Text("ab".into()));
        state.push_event(InputEvent::Text("c".into()));
        state.push_event(InputEvent::Wheel(-1.0));

        let sample = state.take_sample();
        assert_eq!(sample.pointer_pos, Some(Point::new(5.0, 6.0)));
        assert!(sample.pointer_down);
        assert!(sample.pointer_clicked);
        assert_eq!(sample.nav_delta, Point::new(2.0, -1.0));
        assert_eq!(sample.text, "abc");
        assert_eq!(sample.wheel, -1.0);
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn button_and_modifiers_persist_across_samples() {
        let mut state = InputState::default();
        state.push_event(InputEvent::PointerButton { pressed: true });
        state.push_event(InputEvent::Modifiers {
            fast: true,
            slow: false,
        });
        let first = state.take_sample();
        assert!(first.pointer_clicked);

        let second = state.take_sample();
        assert!(second.pointer_down);
        assert!(!second.pointer_clicked);
        assert!(second.fast);

        state.push_event(InputEvent::PointerButton { pressed: false });
        let third = state.take_sample();
        assert!(!third.pointer_down);
        assert!(third.pointer_released);
    }

    #[test]
    fn queue_is_bounded() {
        let mut state = InputState::default();
        for _ in 0..(KEEP_EVENTS_COUNT + 5) {
            state.push_event(InputEvent::Key(NavKey::Left));
        }
        assert_eq!(state.pending(), KEEP_EVENTS_COUNT);
        assert_eq!(state.take_sample().nav_delta.x, -(KEEP_EVENTS_COUNT as f32));
    }
}
