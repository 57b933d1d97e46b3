use rslotpay::core::SlotStore;
use rslotpay::models::{SlotField, SlotId};
use std::collections::HashSet;

#[test]
fn test_new_store_has_one_empty_slot_and_defaults() {
    let store = SlotStore::default();
    assert_eq!(store.len(), 1);
    assert!(!store.is_empty());
    assert_eq!(store.hourly_rate(), 15.0);
    assert_eq!(store.currency(), "$");

    let slot = &store.slots()[0];
    assert!(slot.start.is_empty());
    assert!(slot.end.is_empty());
}

#[test]
fn test_add_slot_grows_by_one_with_unique_ids() {
    let mut store = SlotStore::default();

    let a = store.add_slot();
    assert_eq!(store.len(), 2);
    let b = store.add_slot();
    assert_eq!(store.len(), 3);

    assert_ne!(a, b);
    let ids: HashSet<SlotId> = store.slots().iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), store.len());

    let added = store.get(b).expect("slot just added");
    assert!(!added.is_filled());
}

#[test]
fn test_ids_are_not_reused_after_removal() {
    let mut store = SlotStore::default();
    let a = store.add_slot();
    assert!(store.remove_slot(a));
    let b = store.add_slot();
    assert_ne!(a, b);
}

#[test]
fn test_remove_last_slot_is_ignored() {
    let mut store = SlotStore::default();
    let only = store.slots()[0].clone();

    assert!(!store.remove_slot(only.id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.slots()[0], only);
}

#[test]
fn test_remove_keeps_insertion_order() {
    let mut store = SlotStore::default();
    let first = store.slots()[0].id;
    let second = store.add_slot();
    let third = store.add_slot();

    assert!(store.remove_slot(second));
    let ids: Vec<SlotId> = store.slots().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first, third]);
}

#[test]
fn test_remove_unknown_id_is_ignored() {
    let mut store = SlotStore::default();
    store.add_slot();
    assert!(!store.remove_slot(SlotId(999)));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_update_touches_only_the_named_field() {
    let mut store = SlotStore::default();
    let id = store.slots()[0].id;
    let other = store.add_slot();

    assert!(store.update_slot(id, SlotField::Start, "09:00"));
    assert!(store.update_slot(id, SlotField::End, "17:00"));
    assert!(store.update_slot(id, SlotField::Start, "08:30"));

    let slot = store.get(id).expect("slot exists");
    assert_eq!(slot.id, id);
    assert_eq!(slot.start, "08:30");
    assert_eq!(slot.end, "17:00");

    let untouched = store.get(other).expect("slot exists");
    assert!(untouched.start.is_empty() && untouched.end.is_empty());
}

#[test]
fn test_update_unknown_id_is_ignored() {
    let mut store = SlotStore::default();
    let before = store.slots().to_vec();
    assert!(!store.update_slot(SlotId(42), SlotField::Start, "09:00"));
    assert_eq!(store.slots(), before.as_slice());
}

#[test]
fn test_rate_and_currency_are_accepted_as_is() {
    let mut store = SlotStore::new(20.0, "€");
    store.set_hourly_rate(-5.0);
    assert_eq!(store.hourly_rate(), -5.0);

    store.set_currency("CHF ");
    assert_eq!(store.currency(), "CHF ");
}
