use duoslide_ui::{InputEvent, NavKey, Point};

/// Left edge of every frame with the default style.
const LEFT: f32 = 8.0;
/// Width of a slider frame with the default style.
const WIDTH: f32 = 200.0;
/// Frame height plus vertical item spacing.
const ROW_STRIDE: f32 = 23.0;

/// Events delivered before one frame.
pub struct Step {
    pub name: &'static str,
    pub events: Vec<InputEvent>,
}

impl Step {
    fn new(name: &'static str, events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            name,
            events: events.into_iter().collect(),
        }
    }
}

/// Point at `ratio` of the width of the `row`-th item.
fn on_row(row: usize, ratio: f32) -> Point {
    Point::new(LEFT + WIDTH * ratio, LEFT + ROW_STRIDE * row as f32 + 9.5)
}

fn click_at(pos: Point) -> [InputEvent; 2] {
    [
        InputEvent::PointerMoved(pos),
        InputEvent::PointerButton { pressed: true },
    ]
}

fn release() -> InputEvent {
    InputEvent::PointerButton { pressed: false }
}

pub fn steps() -> Vec<Step> {
    let select_popup_row = Point::new(LEFT + 40.0, on_row(4, 0.0).y + ROW_STRIDE);
    vec![
        Step::new("idle", []),
        Step::new("grab latency", click_at(on_row(0, 0.1))),
        Step::new("drag latency", [InputEvent::PointerMoved(on_row(0, 0.3))]),
        Step::new("drop latency", [release()]),
        Step::new("focus frames", click_at(on_row(1, 0.9))),
        Step::new("release frames", [release()]),
        Step::new("activate frames", [InputEvent::Key(NavKey::Activate)]),
        Step::new(
            "step frames",
            [
                InputEvent::Key(NavKey::Left),
                InputEvent::Modifiers {
                    fast: true,
                    slow: false,
                },
            ],
        ),
        Step::new(
            "leave frames",
            [
                InputEvent::Modifiers {
                    fast: false,
                    slow: false,
                },
                InputEvent::Key(NavKey::Activate),
            ],
        ),
        Step::new("open map", click_at(on_row(4, 0.5))),
        Step::new("release map", [release()]),
        Step::new("filter maps", [InputEvent::Text("ar".into())]),
        Step::new("pick map", click_at(select_popup_row)),
        Step::new("settle", [release(), InputEvent::PointerLeft]),
    ]
}
