use std::cmp::Ordering;

use duoslide_ui::{Axis, GuiContext, InputSource, Rect, WidgetId};
use tracing::trace;

use crate::{
    format::FormatSpec,
    numeric::{CanonicalRepr, CanonicalScalar, NumericDomain, Scalar},
    rounding::round_canonical,
};

use super::layout::{SliderGeometry, TrackLayout};

/// Which handle wins ties while a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleBias {
    /// No handle has moved during the current gesture.
    #[default]
    None,
    /// The first handle moved last.
    PreferFirst,
    /// The second handle moved last.
    PreferSecond,
}

/// Per-widget memory of the current gesture.
///
/// Reset whenever the widget acquires the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Handle that moved last.
    pub bias: HandleBias,
    /// The last move dragged the active handle onto the other one.
    pub merged: bool,
}

/// Moves the handle closest to `candidate` onto it.
///
/// Returns true if either value changed.
pub(super) fn resolve_handles<C: CanonicalScalar>(
    state: &mut InteractionState,
    v1: &mut C,
    v2: &mut C,
    candidate: C,
) -> bool {
    if *v1 == candidate && *v2 == candidate {
        return false;
    }

    let target = match state.bias {
        HandleBias::PreferFirst if *v2 == candidate => {
            state.merged = true;
            Some(true)
        }
        HandleBias::PreferSecond if *v1 == candidate => {
            state.merged = true;
            Some(false)
        }
        _ => None,
    };

    let first = match target {
        Some(first) => first,
        None => {
            let first = match candidate.distance_cmp(*v1, *v2) {
                Ordering::Less => true,
                Ordering::Greater => false,
                Ordering::Equal if *v1 == *v2 => candidate < *v1,
                Ordering::Equal if !state.merged => state.bias != HandleBias::PreferSecond,
                Ordering::Equal => true,
            };
            state.bias = if first {
                HandleBias::PreferFirst
            } else {
                HandleBias::PreferSecond
            };
            state.merged = false;
            first
        }
    };

    let slot = if first { v1 } else { v2 };
    if *slot == candidate {
        false
    } else {
        *slot = candidate;
        true
    }
}

/// Per-call inputs of the engine besides the values.
pub(super) struct Behavior<'a> {
    pub id: WidgetId,
    pub frame: Rect,
    pub axis: Axis,
    pub format: &'a FormatSpec,
}

/// Runs one frame of the dual-handle engine for `(v1, v2)`.
///
/// Values are written back only when a handle moved, clamped into the domain.
pub(super) fn range_slider_behavior<T: Scalar>(
    ctx: &mut GuiContext,
    behavior: &Behavior<'_>,
    domain: &NumericDomain<T>,
    v1: &mut T,
    v2: &mut T,
) -> (bool, SliderGeometry) {
    match T::KIND.canonical_repr() {
        CanonicalRepr::I32 => behavior_in::<i32, T>(ctx, behavior, domain, v1, v2),
        CanonicalRepr::I64 => behavior_in::<i64, T>(ctx, behavior, domain, v1, v2),
        CanonicalRepr::F64 => behavior_in::<f64, T>(ctx, behavior, domain, v1, v2),
    }
}

fn behavior_in<C: CanonicalScalar, T: Scalar>(
    ctx: &mut GuiContext,
    behavior: &Behavior<'_>,
    domain: &NumericDomain<T>,
    v1: &mut T,
    v2: &mut T,
) -> (bool, SliderGeometry) {
    let canonical = domain.canonical::<C>();
    let layout = TrackLayout::new(
        behavior.frame,
        behavior.axis,
        &canonical,
        ctx.style().grab_min_size,
    );
    let mut first = C::widen(domain.clamp(*v1));
    let mut second = C::widen(domain.clamp(*v2));
    let state = ctx.remember(behavior.id, InteractionState::default);

    // A track too short to travel never keeps the capture.
    if layout.is_degenerate() && ctx.is_captured(behavior.id) {
        ctx.release(behavior.id);
    }

    let mut changed = false;
    if let Some(capture) = ctx.capture()
        && capture.id == behavior.id
    {
        if capture.just_activated {
            state.set(InteractionState::default());
        }

        let input = ctx.input();
        let pointer_pos = input.pointer_pos;
        let pointer_down = input.pointer_down;
        let release_nav = input.nav_cancel || (input.nav_activate && !capture.just_activated);
        let nav_delta = match behavior.axis {
            Axis::X => input.nav_delta.x,
            Axis::Y => -input.nav_delta.y,
        };
        let (fast, slow) = (input.fast, input.slow);

        let ratio = match capture.source {
            InputSource::Pointer if !pointer_down => {
                ctx.release(behavior.id);
                None
            }
            InputSource::Pointer => pointer_pos.map(|pos| layout.ratio_at(pos)),
            InputSource::DirectionalPad if release_nav => {
                ctx.release(behavior.id);
                None
            }
            InputSource::DirectionalPad => {
                let active = if state.with(|s| s.bias) == HandleBias::PreferSecond {
                    second
                } else {
                    first
                };
                let precision = if C::IS_FLOAT {
                    behavior.format.step_precision()
                } else {
                    0
                };
                let step = NavStep {
                    delta: nav_delta,
                    precision,
                    power_curve: canonical.power_curve,
                    range: canonical.span(),
                    fast,
                    slow,
                };
                step.apply(canonical.ratio_of(active))
            }
        };

        if let Some(ratio) = ratio {
            let candidate = canonical.value_at(ratio);
            let candidate = canonical.clamp(round_canonical(behavior.format, candidate));
            changed = state.with_mut(|s| resolve_handles(s, &mut first, &mut second, candidate));
        }
    }

    let geometry = layout.geometry(canonical.ratio_of(first), canonical.ratio_of(second));
    if changed {
        *v1 = first.narrow();
        *v2 = second.narrow();
        trace!(id = ?behavior.id, v1 = ?*v1, v2 = ?*v2, "range slider changed");
    }
    (changed, geometry)
}

/// One frame of directional input, converted to a ratio step.
struct NavStep {
    delta: f32,
    precision: usize,
    power_curve: bool,
    range: f64,
    fast: bool,
    slow: bool,
}

impl NavStep {
    /// New ratio of the active handle, or `None` when the input does not move it.
    fn apply(&self, ratio: f32) -> Option<f32> {
        if self.delta == 0.0 || self.range == 0.0 {
            return None;
        }
        let mut delta = self.delta;
        if self.precision > 0 || self.power_curve {
            delta /= 100.0;
            if self.slow {
                delta /= 10.0;
            }
        } else if (-100.0..=100.0).contains(&self.range) || self.slow {
            delta = ((if delta < 0.0 { -1.0 } else { 1.0 }) / self.range) as f32;
        } else {
            delta /= 100.0;
        }
        if self.fast {
            delta *= 10.0;
        }

        if (ratio >= 1.0 && delta > 0.0) || (ratio <= 0.0 && delta < 0.0) {
            return None;
        }
        Some((ratio + delta).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn resolve(state: &mut InteractionState, pair: &mut (i32, i32), candidate: i32) -> bool {
        resolve_handles(state, &mut pair.0, &mut pair.1, candidate)
    }

    #[test]
    fn closest_handle_takes_the_value() {
        let mut state = InteractionState::default();
        let mut pair = (3, 7);
        assert!(resolve(&mut state, &mut pair, 4));
        assert_eq!(pair, (4, 7));
        assert_eq!(state.bias, HandleBias::PreferFirst);
        assert!(resolve(&mut state, &mut pair, 9));
        assert_eq!(pair, (4, 9));
        assert_eq!(state.bias, HandleBias::PreferSecond);
    }

    #[test]
    fn equidistant_without_bias_moves_first() {
        let mut state = InteractionState::default();
        let mut pair = (3, 7);
        assert!(resolve(&mut state, &mut pair, 5));
        assert_eq!(pair, (5, 7));
        assert_eq!(state.bias, HandleBias::PreferFirst);
    }

    #[test]
    fn equidistant_follows_bias() {
        let mut state = InteractionState {
            bias: HandleBias::PreferSecond,
            merged: false,
        };
        let mut pair = (3, 7);
        assert!(resolve(&mut state, &mut pair, 5));
        assert_eq!(pair, (3, 5));
    }

    #[test]
    fn stacked_handles_split_by_direction() {
        let mut state = InteractionState::default();
        let mut pair = (5, 5);
        for value in [6, 7, 8] {
            assert!(resolve(&mut state, &mut pair, value));
        }
        assert_eq!(pair, (5, 8));
        assert_eq!(state.bias, HandleBias::PreferSecond);

        let mut state = InteractionState::default();
        let mut pair = (5, 5);
        for value in [4, 3, 2] {
            assert!(resolve(&mut state, &mut pair, value));
        }
        assert_eq!(pair, (2, 5));
        assert_eq!(state.bias, HandleBias::PreferFirst);
    }

    #[test]
    fn dragging_onto_the_other_handle_merges() {
        let mut state = InteractionState {
            bias: HandleBias::PreferSecond,
            merged: false,
        };
        let mut pair = (3, 4);
        assert!(resolve(&mut state, &mut pair, 3));
        assert_eq!(pair, (3, 3));
        assert!(state.merged);
        assert_eq!(state.bias, HandleBias::PreferSecond);

        assert!(!resolve(&mut state, &mut pair, 3));
        assert!(resolve(&mut state, &mut pair, 2));
        assert_eq!(pair, (2, 3));
        assert!(!state.merged);
        assert_eq!(state.bias, HandleBias::PreferFirst);
    }

    #[test]
    fn merged_tie_moves_first() {
        let mut state = InteractionState {
            bias: HandleBias::PreferSecond,
            merged: true,
        };
        let mut pair = (2.0f64, 4.0);
        assert!(resolve_handles(&mut state, &mut pair.0, &mut pair.1, 3.0));
        assert_eq!(pair, (3.0, 4.0));
        assert_eq!(state.bias, HandleBias::PreferFirst);
    }

    #[test]
    fn unchanged_candidate_reports_false() {
        let mut state = InteractionState::default();
        let mut pair = (3, 7);
        assert!(!resolve(&mut state, &mut pair, 7));
        assert_eq!(pair, (3, 7));
        let mut both = (5, 5);
        assert!(!resolve(&mut state, &mut both, 5));
    }

    fn step(delta: f32, precision: usize, range: f64) -> NavStep {
        NavStep {
            delta,
            precision,
            power_curve: false,
            range,
            fast: false,
            slow: false,
        }
    }

    #[rstest]
    #[case(step(1.0, 3, 1.0), 0.5, Some(0.51))]
    #[case(step(-1.0, 0, 10.0), 0.5, Some(0.4))]
    #[case(step(1.0, 0, 1000.0), 0.5, Some(0.51))]
    #[case(step(1.0, 0, 0.0), 0.5, None)]
    #[case(step(0.0, 3, 1.0), 0.5, None)]
    #[case(step(1.0, 3, 1.0), 1.0, None)]
    #[case(step(-1.0, 0, 10.0), 0.0, None)]
    fn nav_steps(#[case] step: NavStep, #[case] ratio: f32, #[case] expected: Option<f32>) {
        let next = step.apply(ratio);
        match (next, expected) {
            (Some(next), Some(expected)) => assert!((next - expected).abs() < 1e-6),
            (next, expected) => assert_eq!(next, expected),
        }
    }

    #[test]
    fn nav_modifiers() {
        let slow = NavStep {
            slow: true,
            ..step(1.0, 2, 1.0)
        };
        assert!((slow.apply(0.5).unwrap_or_default() - 0.501).abs() < 1e-6);
        let slow_wide = NavStep {
            slow: true,
            ..step(1.0, 0, 1000.0)
        };
        assert!((slow_wide.apply(0.5).unwrap_or_default() - 0.501).abs() < 1e-6);
        let fast = NavStep {
            fast: true,
            ..step(1.0, 2, 1.0)
        };
        assert!((fast.apply(0.5).unwrap_or_default() - 0.6).abs() < 1e-6);
    }
}
