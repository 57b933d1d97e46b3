use rslotpay::core::{SlotStore, Summary};
use rslotpay::models::SlotField;
use rslotpay::models::locale::EN_UNITS;
use rslotpay::ui::messages::Messenger;
use rslotpay::ui::render::render_slots;

#[test]
fn test_unfilled_slots_have_blank_duration() {
    let mut store = SlotStore::default();
    let first = store.slots()[0].id;
    store.update_slot(first, SlotField::Start, "09:00");
    store.update_slot(first, SlotField::End, "09:45");
    let half = store.add_slot();
    store.update_slot(half, SlotField::Start, "13:00");

    let out = render_slots(&Summary::compute(&store, &EN_UNITS), false);
    let lines: Vec<&str> = out.lines().collect();

    // title, header, two rows
    assert_eq!(lines.len(), 4);
    assert!(lines[2].ends_with("45 min"));
    assert!(lines[3].ends_with("--:--"), "unfilled row: {:?}", lines[3]);
    assert!(!out.contains('—'));
}

#[test]
fn test_filled_negative_span_shows_empty_marker() {
    let mut store = SlotStore::default();
    let first = store.slots()[0].id;
    store.update_slot(first, SlotField::Start, "18:00");
    store.update_slot(first, SlotField::End, "09:00");

    let out = render_slots(&Summary::compute(&store, &EN_UNITS), false);
    assert!(out.lines().nth(2).is_some_and(|l| l.ends_with('—')));
}

#[test]
fn test_messenger_plain_line_without_colors() {
    let line = Messenger::new(false).line("✅", "\x1b[32m", "done");
    assert_eq!(line, "✅ done");

    let colored = Messenger::new(true).line("✅", "\x1b[32m", "done");
    assert!(colored.starts_with("\x1b[32m✅\x1b[0m"));
}
