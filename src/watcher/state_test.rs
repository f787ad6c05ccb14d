use std::sync::Arc;
use std::thread;

use super::*;
use crate::test_utils;

#[test]
fn snapshot_should_return_seeded_value() {
    let seed = test_utils::intermediate_spec();
    let state = WatcherState::new(seed.clone());
    assert_eq!(state.snapshot(), seed);
}

#[test]
fn transition_to_equal_value_should_be_a_noop() {
    let seed = test_utils::intermediate_spec();
    let state = WatcherState::new(seed.clone());

    assert!(state.transition(seed.clone()).is_none());
    assert_eq!(state.snapshot(), seed);
}

#[test]
fn transition_to_different_value_should_swap_and_return_both() {
    let seed = test_utils::intermediate_spec();
    let next = test_utils::modern_spec();
    let state = WatcherState::new(seed.clone());

    let change = state.transition(next.clone()).expect("change detected");
    assert_eq!(change.previous, seed);
    assert_eq!(change.current, next);
    assert_eq!(state.snapshot(), next);
}

#[test]
fn interleaved_transitions_should_chain_previous_to_current() {
    let a = test_utils::intermediate_spec();
    let b = test_utils::modern_spec();
    let state = WatcherState::new(a.clone());

    let first = state.transition(b.clone()).expect("first change");
    let second = state.transition(a.clone()).expect("second change");

    assert_eq!(first.current, second.previous);
    assert_eq!(second.current, a);
}

#[test]
fn racing_transitions_to_same_value_should_win_once() {
    let state = Arc::new(WatcherState::new(test_utils::intermediate_spec()));
    let next = test_utils::modern_spec();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let state = state.clone();
            let next = next.clone();
            thread::spawn(move || state.transition(next).is_some())
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes"))
        .filter(|won| *won)
        .count();

    assert_eq!(wins, 1, "exactly one racer swaps for a given logical transition");
    assert_eq!(state.snapshot(), next);
}
