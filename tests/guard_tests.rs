//! Integration tests for the guarded callback wrappers: the closure fires
//! exactly when every precondition holds, and never otherwise.

mod common;

use std::collections::VecDeque;

use backstop::{
    for_each, for_each_indexed, for_each_present, for_each_present_indexed, with_char_at,
    with_expected_type, with_index, with_present, with_present_index, DynTyped,
};

#[test]
fn with_present_hands_over_the_value_once() {
    let (sink, _guard) = common::capture();

    let mut calls = Vec::new();
    with_present(Some(String::from("ada")), |name| calls.push(name));

    assert_eq!(calls, vec![String::from("ada")]);
    assert_eq!(sink.count(), 0);
}

#[test]
fn with_present_on_absent_value_logs_and_skips() {
    let (sink, _guard) = common::capture();

    with_present(None::<u8>, |_| panic!("must not fire"));
    assert_eq!(sink.count(), 1);
}

#[test]
fn with_index_fires_exactly_once_with_the_element() {
    let (sink, _guard) = common::capture();

    let samples = [10u8, 20, 30];
    let mut seen = Vec::new();
    with_index(Some(&samples), 1, |value| seen.push(*value));

    assert_eq!(seen, vec![20]);
    assert_eq!(sink.count(), 0);
}

#[test]
fn with_index_out_of_range_logs_and_skips() {
    let (sink, _guard) = common::capture();

    let samples = vec![1, 2, 3];
    with_index(Some(&samples), 3, |_value: &i32| panic!("must not fire"));
    with_index(Some(&samples), -1, |_value: &i32| panic!("must not fire"));
    with_index::<Vec<i32>, i32, _>(None, 0, |_value| panic!("must not fire"));

    assert_eq!(sink.count(), 3);
}

#[test]
fn with_present_index_requires_an_occupied_slot() {
    let (sink, _guard) = common::capture();

    let slots = [Some("a"), None, Some("c")];

    let mut seen = Vec::new();
    with_present_index(Some(&slots), 2, |value| seen.push(*value));
    assert_eq!(seen, vec!["c"]);
    assert_eq!(sink.count(), 0);

    with_present_index(Some(&slots), 1, |_value: &&str| panic!("must not fire"));
    assert_eq!(sink.count(), 1);
}

#[test]
fn with_char_at_counts_characters() {
    let (sink, _guard) = common::capture();

    let mut picked = ' ';
    with_char_at(Some("héllo"), 1, |c| picked = c);
    assert_eq!(picked, 'é');
    assert_eq!(sink.count(), 0);

    with_char_at(Some("日本"), 2, |_c| panic!("must not fire"));
    with_char_at::<i32, _>(None, 0, |_c| panic!("must not fire"));
    assert_eq!(sink.count(), 2);
}

#[test]
fn with_expected_type_downcasts_after_the_check() {
    let (sink, _guard) = common::capture();

    let payload: Box<dyn DynTyped> = Box::new(vec![1u32, 2, 3]);

    let mut total = 0u32;
    with_expected_type::<Vec<u32>, _>(Some(payload.as_ref()), |values| {
        total = values.iter().sum();
    });
    assert_eq!(total, 6);
    assert_eq!(sink.count(), 0);

    with_expected_type::<String, _>(Some(payload.as_ref()), |_s| panic!("must not fire"));
    assert_eq!(sink.count(), 1);
}

#[test]
fn for_each_visits_every_element_in_order() {
    let (sink, _guard) = common::capture();

    let deque: VecDeque<i32> = (1..=4).collect();
    let mut seen = Vec::new();
    for_each(Some(&deque), |value| seen.push(*value));

    assert_eq!(seen, vec![1, 2, 3, 4]);
    assert_eq!(sink.count(), 0);
}

#[test]
fn for_each_indexed_pairs_positions_with_values() {
    let (_sink, _guard) = common::capture();

    let letters = ["a", "b", "c"];
    let mut seen = Vec::new();
    for_each_indexed(Some(&letters), |index, value| seen.push((index, *value)));

    assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
}

#[test]
fn for_each_on_absent_container_logs_once() {
    let (sink, _guard) = common::capture();

    for_each::<[u8], _>(None, |_value| panic!("must not fire"));
    assert_eq!(sink.count(), 1);
}

#[test]
fn for_each_present_skips_and_reports_empty_slots() {
    let (sink, _guard) = common::capture();

    let slots = vec![Some(1), None, Some(3), None, Some(5)];
    let mut seen = Vec::new();
    for_each_present(Some(&slots), |value| seen.push(*value));

    // Occupied values only, original order, one report per empty slot.
    assert_eq!(seen, vec![1, 3, 5]);
    assert_eq!(sink.count(), 2);
}

#[test]
fn for_each_present_indexed_keeps_slot_positions() {
    let (sink, _guard) = common::capture();

    let slots = [Some("x"), None, Some("z")];
    let mut seen = Vec::new();
    for_each_present_indexed(Some(&slots), |index, value| seen.push((index, *value)));

    assert_eq!(seen, vec![(0, "x"), (2, "z")]);
    assert_eq!(sink.count(), 1);
}
