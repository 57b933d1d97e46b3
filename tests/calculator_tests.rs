use rslotpay::core::calculator::{
    filled_slot_count, format_duration, format_duration_with, slot_duration_minutes, total_cost,
    total_hours, total_minutes,
};
use rslotpay::models::locale::RU_UNITS;
use rslotpay::models::{Slot, SlotId};

fn slot(id: u64, start: &str, end: &str) -> Slot {
    Slot {
        id: SlotId(id),
        start: start.to_string(),
        end: end.to_string(),
    }
}

#[test]
fn test_duration_is_exact_minute_difference() {
    assert_eq!(slot_duration_minutes("09:00", "17:30"), 510);
    assert_eq!(slot_duration_minutes("00:00", "23:59"), 1439);
    assert_eq!(slot_duration_minutes("12:15", "12:15"), 0);
}

#[test]
fn test_end_before_start_is_clamped_not_wrapped() {
    assert_eq!(slot_duration_minutes("18:00", "09:00"), 0);
    assert_eq!(slot_duration_minutes("23:00", "01:00"), 0);
}

#[test]
fn test_missing_or_malformed_times_count_as_zero() {
    assert_eq!(slot_duration_minutes("", "17:00"), 0);
    assert_eq!(slot_duration_minutes("09:00", ""), 0);
    assert_eq!(slot_duration_minutes("", ""), 0);
    assert_eq!(slot_duration_minutes("nine", "17:00"), 0);
    assert_eq!(slot_duration_minutes("09:00", "25:00"), 0);
}

#[test]
fn test_single_digit_hour_is_accepted() {
    assert_eq!(slot_duration_minutes("9:00", "10:30"), 90);
}

#[test]
fn test_total_minutes_of_empty_slots_is_zero() {
    let slots = vec![slot(1, "", ""), slot(2, "", ""), slot(3, "08:00", "")];
    assert_eq!(total_minutes(&slots), 0);
}

#[test]
fn test_total_minutes_ignores_order() {
    let a = vec![slot(1, "09:00", "12:00"), slot(2, "13:00", "17:30")];
    let b = vec![slot(2, "13:00", "17:30"), slot(1, "09:00", "12:00")];
    assert_eq!(total_minutes(&a), 450);
    assert_eq!(total_minutes(&a), total_minutes(&b));
}

#[test]
fn test_hours_and_cost_are_not_rounded() {
    assert_eq!(total_hours(450), 7.5);
    assert_eq!(total_hours(20), 20.0 / 60.0);
    assert_eq!(total_cost(7.5, 20.0), 150.0);
    assert_eq!(total_cost(total_hours(1), 10.0), 10.0 / 60.0);
}

#[test]
fn test_cost_scales_linearly_with_rate() {
    let hours = total_hours(510);
    assert_eq!(total_cost(hours, 30.0), 2.0 * total_cost(hours, 15.0));
}

#[test]
fn test_format_duration_branches() {
    assert_eq!(format_duration(0), "—");
    assert_eq!(format_duration(45), "45 min");
    assert_eq!(format_duration(120), "2 h");
    assert_eq!(format_duration(125), "2 h 5 min");
    assert_eq!(format_duration(60), "1 h");
    assert_eq!(format_duration(1), "1 min");
}

#[test]
fn test_format_duration_russian_units() {
    assert_eq!(format_duration_with(0, &RU_UNITS), "—");
    assert_eq!(format_duration_with(45, &RU_UNITS), "45 мин");
    assert_eq!(format_duration_with(120, &RU_UNITS), "2 ч");
    assert_eq!(format_duration_with(125, &RU_UNITS), "2 ч 5 мин");
}

#[test]
fn test_filled_slot_count_needs_both_fields() {
    let slots = vec![
        slot(1, "09:00", "17:00"),
        slot(2, "09:00", ""),
        slot(3, "", "17:00"),
        slot(4, "18:00", "09:00"),
    ];
    assert_eq!(filled_slot_count(&slots), 2);
}
