use duoslide_components::{
    numeric::NumericDomain,
    range_slider::range_slider,
    searchable_select::{
        SearchableSelectArgs, SearchableSelectResponse, searchable_select_with_response,
    },
};
use duoslide_ui::{InputSample, Point, test::TestHarness};

const FRUIT: [&str; 3] = ["Apple", "Banana", "Grape"];

fn select(
    harness: &mut TestHarness,
    input: InputSample,
    current: &mut Option<usize>,
    items: &[&str],
    args: &SearchableSelectArgs,
) -> SearchableSelectResponse {
    harness.frame(input, |ctx| {
        searchable_select_with_response(ctx, "Fruit", current, items, args)
    })
}

fn texts(harness: &TestHarness) -> Vec<String> {
    harness
        .last_output()
        .draw_list
        .texts()
        .map(String::from)
        .collect()
}

/// Opens the popup and returns the response of the opening frame.
fn open(
    harness: &mut TestHarness,
    current: &mut Option<usize>,
    items: &[&str],
    args: &SearchableSelectArgs,
) -> SearchableSelectResponse {
    let idle = select(harness, InputSample::default(), current, items, args);
    let opened = select(
        harness,
        InputSample::press(idle.frame.center()),
        current,
        items,
        args,
    );
    assert!(opened.open);
    // Release the button so the next press is a new click.
    select(harness, InputSample::default(), current, items, args)
}

#[test]
fn closed_select_shows_the_current_item() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default();
    let mut current = Some(2);

    let response = select(&mut harness, InputSample::default(), &mut current, &FRUIT, &args);
    assert!(!response.open);
    assert!(response.popup.is_none());
    assert!(texts(&harness).contains(&"Grape".to_string()));
    assert!(texts(&harness).contains(&"Fruit".to_string()));
}

#[test]
fn opening_lists_every_item_with_the_hint() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default().input_preview_value("Type to filter");
    let mut current = None;

    let response = open(&mut harness, &mut current, &FRUIT, &args);
    assert_eq!(response.matched, 3);
    assert_eq!(
        response.rows.iter().map(|r| r.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    let popup = response.popup.unwrap();
    // Three rows: (13 + 4) * 3 - 4 + 8 * 2
    assert_eq!(popup.height(), 63.0);
    assert_eq!(popup.min.y, response.frame.max.y);

    let texts = texts(&harness);
    assert!(texts.contains(&"Type to filter".to_string()));
    for fruit in FRUIT {
        assert!(texts.contains(&fruit.to_string()));
    }
}

#[test]
fn typing_filters_and_clicking_commits() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default();
    let mut current = Some(0);

    open(&mut harness, &mut current, &FRUIT, &args);
    let filtered = select(&mut harness, InputSample::typed("an"), &mut current, &FRUIT, &args);
    assert!(filtered.open);
    assert_eq!(filtered.matched, 1);
    assert_eq!(filtered.rows.len(), 1);
    assert_eq!(filtered.rows[0].index, 1);
    assert!(texts(&harness).contains(&"an".to_string()));

    let row = filtered.rows[0].rect.center();
    let committed = select(&mut harness, InputSample::press(row), &mut current, &FRUIT, &args);
    assert!(committed.changed);
    assert!(!committed.open);
    assert_eq!(current, Some(1));

    let reopened = open(&mut harness, &mut current, &FRUIT, &args);
    assert_eq!(reopened.matched, 3, "query is reset when the popup opens");
}

#[test]
fn no_match_shows_the_placeholder() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default();
    let mut current = Some(0);

    open(&mut harness, &mut current, &FRUIT, &args);
    let response = select(&mut harness, InputSample::typed("kiwi"), &mut current, &FRUIT, &args);
    assert!(!response.changed);
    assert!(response.open);
    assert_eq!(response.matched, 0);
    assert!(response.rows.is_empty());
    let texts = texts(&harness);
    assert!(texts.contains(&"No items found".to_string()));
    assert!(!texts.contains(&"Apple".to_string()));

    let placeholder = response.popup.unwrap().center();
    let clicked = select(
        &mut harness,
        InputSample::press(placeholder),
        &mut current,
        &FRUIT,
        &args,
    );
    assert!(!clicked.changed);
    assert!(clicked.open);
    assert_eq!(current, Some(0));
}

#[test]
fn outside_click_and_cancel_close_without_change() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default();
    let mut current = Some(0);

    open(&mut harness, &mut current, &FRUIT, &args);
    let outside = select(
        &mut harness,
        InputSample::press(Point::new(600.0, 600.0)),
        &mut current,
        &FRUIT,
        &args,
    );
    assert!(!outside.open);
    assert!(!outside.changed);

    open(&mut harness, &mut current, &FRUIT, &args);
    let cancelled = select(&mut harness, InputSample::cancel(), &mut current, &FRUIT, &args);
    assert!(!cancelled.open);
    assert_eq!(current, Some(0));
}

#[test]
fn query_edits_with_backspace() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default();
    let mut current = None;

    open(&mut harness, &mut current, &FRUIT, &args);
    select(&mut harness, InputSample::typed("grx"), &mut current, &FRUIT, &args);
    let response = select(
        &mut harness,
        InputSample::default().with_backspace(1),
        &mut current,
        &FRUIT,
        &args,
    );
    assert_eq!(response.matched, 1);
    assert_eq!(response.rows[0].index, 2);
}

#[test]
fn invalid_current_index_is_repaired() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default().default_preview_text("Pick one");

    let mut current = Some(7);
    let response = select(&mut harness, InputSample::default(), &mut current, &FRUIT, &args);
    assert!(!response.changed);
    assert_eq!(current, Some(0));

    let mut current = Some(3);
    select(&mut harness, InputSample::default(), &mut current, &[], &args);
    assert_eq!(current, None);
    assert!(texts(&harness).contains(&"Pick one".to_string()));
}

#[test]
fn wheel_scrolls_long_lists() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default().max_visible_items(4);
    let names: Vec<String> = (0..10).map(|i| format!("Item {i}")).collect();
    let items: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut current = None;

    let opened = open(&mut harness, &mut current, &items, &args);
    assert_eq!(opened.rows.len(), 4);
    let inside = opened.popup.unwrap().center();

    let scrolled = select(
        &mut harness,
        InputSample::scroll(inside, -3.0),
        &mut current,
        &items,
        &args,
    );
    assert_eq!(
        scrolled.rows.iter().map(|r| r.index).collect::<Vec<_>>(),
        vec![3, 4, 5, 6]
    );

    let clamped = select(
        &mut harness,
        InputSample::scroll(inside, -50.0),
        &mut current,
        &items,
        &args,
    );
    assert_eq!(clamped.rows.first().map(|r| r.index), Some(6));
}

#[test]
fn opening_scrolls_to_the_current_item() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default().max_visible_items(4);
    let names: Vec<String> = (0..10).map(|i| format!("Item {i}")).collect();
    let items: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut current = Some(8);

    let opened = open(&mut harness, &mut current, &items, &args);
    assert_eq!(opened.rows.last().map(|r| r.index), Some(8));
}

#[test]
fn popup_blocks_widgets_below_it() {
    let mut harness = TestHarness::new();
    let args = SearchableSelectArgs::default();
    let domain = NumericDomain::new(0, 10);
    let mut current = None;
    let mut pair = (3, 7);

    let mut frame = |harness: &mut TestHarness, input: InputSample| {
        harness.frame(input, |ctx| {
            let response =
                searchable_select_with_response(ctx, "Fruit", &mut current, &FRUIT, &args);
            let changed = range_slider(ctx, "Range", &domain, &mut pair.0, &mut pair.1);
            (response, changed)
        })
    };

    let (idle, _) = frame(&mut harness, InputSample::default());
    frame(&mut harness, InputSample::press(idle.frame.center()));
    frame(&mut harness, InputSample::default());
    frame(&mut harness, InputSample::typed("zzz"));

    // The slider sits right below the select frame, under the popup.
    let under_popup = Point::new(idle.frame.min.x + 150.0, idle.frame.max.y + 10.0);
    let (response, changed) = frame(&mut harness, InputSample::press(under_popup));
    assert!(response.open);
    assert!(!changed);
    assert_eq!(harness.last_output().capture, None);
    drop(frame);
    assert_eq!(pair, (3, 7));
}
