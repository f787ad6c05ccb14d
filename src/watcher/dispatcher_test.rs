use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::*;
use crate::metrics::CALLBACK_FAILURES;
use crate::test_utils;

#[test]
fn dispatch_should_invoke_callback_with_payload() {
    let recorder = test_utils::ChangeRecorder::new();
    let dispatcher = ChangeDispatcher::new(recorder.as_callback());

    let change = ProfileChange {
        previous: test_utils::intermediate_spec(),
        current: test_utils::modern_spec(),
    };
    dispatcher.dispatch(&change);

    assert_eq!(recorder.len(), 1);
    assert_eq!(recorder.get(0), change);
}

#[test]
fn dispatch_should_swallow_and_count_callback_errors() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let dispatcher = ChangeDispatcher::new(Box::new(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Err("subsystem rejected the profile".into())
    }));

    let change = ProfileChange {
        previous: test_utils::intermediate_spec(),
        current: test_utils::modern_spec(),
    };

    let failures_before = CALLBACK_FAILURES.get();
    dispatcher.dispatch(&change);
    dispatcher.dispatch(&change);

    // Errors are logged and counted, never retried or propagated.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(CALLBACK_FAILURES.get() >= failures_before + 2);
}
