// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::{Debounced, Dispatch, Invocation};
use pacer_test_utils::{CallRecorder, ManualRuntime};
use std::time::Duration;

fn debounced(
    runtime: &ManualRuntime,
    delay_ms: u64,
) -> (Debounced<(), u32, ManualRuntime>, CallRecorder<Vec<u32>>) {
    let recorder = CallRecorder::new(runtime);
    let log = recorder.clone();
    let wrapper = Debounced::new(
        move |invocation: Invocation<(), u32>| log.record(invocation.args().to_vec()),
        Duration::from_millis(delay_ms),
        runtime.clone(),
    );
    (wrapper, recorder)
}

#[test]
fn test_burst_fires_once_with_last_arguments() {
    // Arrange
    let runtime = ManualRuntime::new();
    let (wrapper, recorder) = debounced(&runtime, 300);

    // Act - calls at t=0, 50, 100
    wrapper.call_args([0]);
    runtime.advance(Duration::from_millis(50));
    wrapper.call_args([50]);
    runtime.advance(Duration::from_millis(50));
    wrapper.call_args([100]);

    // Assert
    runtime.advance(Duration::from_millis(299));
    assert!(recorder.is_empty());

    runtime.advance(Duration::from_millis(1));
    assert_eq!(recorder.times_ms(), vec![400]);
    assert_eq!(recorder.values(), vec![vec![100]]);

    runtime.advance(Duration::from_secs(5));
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_spaced_calls_each_fire() {
    // Arrange
    let runtime = ManualRuntime::new();
    let (wrapper, recorder) = debounced(&runtime, 300);

    // Act - calls at t=0, 300, 700
    wrapper.call_args([1]);
    runtime.advance(Duration::from_millis(300));
    wrapper.call_args([2]);
    runtime.advance(Duration::from_millis(400));
    wrapper.call_args([3]);
    runtime.advance(Duration::from_secs(1));

    // Assert
    assert_eq!(recorder.times_ms(), vec![300, 600, 1000]);
    assert_eq!(recorder.values(), vec![vec![1], vec![2], vec![3]]);
}

#[test]
fn test_every_call_is_scheduled() {
    let runtime = ManualRuntime::new();
    let (wrapper, _recorder) = debounced(&runtime, 300);

    assert_eq!(wrapper.call_args([1]), Dispatch::Scheduled);
    assert_eq!(wrapper.call_args([2]), Dispatch::Scheduled);
    assert!(wrapper.call_args([3]).is_scheduled());
}

#[test]
fn test_continuous_calls_never_fire() {
    // Arrange
    let runtime = ManualRuntime::new();
    let (wrapper, recorder) = debounced(&runtime, 300);

    // Act - a call every 100ms for ten seconds
    for i in 0..100 {
        wrapper.call_args([i]);
        runtime.advance(Duration::from_millis(100));
    }

    // Assert
    assert!(recorder.is_empty());
    assert_eq!(runtime.pending_count(), 1);
}

#[test]
fn test_single_pending_callback_per_wrapper() {
    // Arrange
    let runtime = ManualRuntime::new();
    let (wrapper, recorder) = debounced(&runtime, 300);

    // Act & Assert
    for i in 0..20 {
        wrapper.call_args([i]);
        assert_eq!(runtime.pending_count(), 1);
        runtime.advance(Duration::from_millis(10));
    }

    assert_eq!(runtime.scheduled_count(), 20);
    assert_eq!(runtime.cancelled_count(), 19);

    runtime.advance(Duration::from_secs(1));
    assert_eq!(recorder.len(), 1);
    assert_eq!(runtime.pending_count(), 0);
}

#[test]
fn test_receiver_is_forwarded() {
    // Arrange
    let runtime = ManualRuntime::new();
    let recorder = CallRecorder::new(&runtime);
    let log = recorder.clone();
    let wrapper = Debounced::new(
        move |invocation: Invocation<&'static str, u32>| {
            let (receiver, args) = invocation.into_parts();
            log.record((receiver, args));
        },
        Duration::from_millis(100),
        runtime.clone(),
    );

    // Act
    wrapper.call(Invocation::with_receiver("first", vec![1]));
    wrapper.call(Invocation::with_receiver("window", vec![800, 600]));
    runtime.advance(Duration::from_millis(100));

    // Assert
    assert_eq!(recorder.values(), vec![(Some("window"), vec![800, 600])]);
}

#[test]
fn test_zero_delay_fires_on_next_idle_turn() {
    // Arrange
    let runtime = ManualRuntime::new();
    let (wrapper, recorder) = debounced(&runtime, 0);

    // Act
    wrapper.call_args([1]);
    wrapper.call_args([2]);

    // Assert - not on the caller's stack
    assert!(recorder.is_empty());

    runtime.run_until_idle();
    assert_eq!(recorder.values(), vec![vec![2]]);
    assert_eq!(recorder.times_ms(), vec![0]);
}

#[test]
fn test_no_calls_no_state() {
    let runtime = ManualRuntime::new();
    let (wrapper, recorder) = debounced(&runtime, 300);

    runtime.advance(Duration::from_secs(1));

    assert!(recorder.is_empty());
    assert_eq!(runtime.scheduled_count(), 0);
    assert_eq!(wrapper.delay(), Duration::from_millis(300));
}

#[test]
fn test_clones_share_pending_callback() {
    // Arrange
    let runtime = ManualRuntime::new();
    let (wrapper, recorder) = debounced(&runtime, 300);
    let clone = wrapper.clone();

    // Act
    wrapper.call_args([1]);
    runtime.advance(Duration::from_millis(100));
    clone.call_args([2]);
    runtime.advance(Duration::from_secs(1));

    // Assert
    assert_eq!(recorder.values(), vec![vec![2]]);
    assert_eq!(recorder.times_ms(), vec![400]);
}

#[test]
fn test_dropping_wrapper_keeps_pending_callback() {
    // Arrange
    let runtime = ManualRuntime::new();
    let (wrapper, recorder) = debounced(&runtime, 300);

    // Act
    wrapper.call_args([7]);
    drop(wrapper);
    runtime.advance(Duration::from_millis(300));

    // Assert
    assert_eq!(recorder.values(), vec![vec![7]]);
}

#[test]
fn test_separate_wrappers_do_not_interfere() {
    // Arrange
    let runtime = ManualRuntime::new();
    let (first, first_log) = debounced(&runtime, 300);
    let (second, second_log) = debounced(&runtime, 300);

    // Act
    first.call_args([1]);
    runtime.advance(Duration::from_millis(100));
    second.call_args([2]);
    runtime.advance(Duration::from_secs(1));

    // Assert
    assert_eq!(first_log.times_ms(), vec![300]);
    assert_eq!(second_log.times_ms(), vec![400]);
}

#[test]
#[should_panic(expected = "action failed")]
fn test_action_panic_surfaces_on_scheduler() {
    let runtime = ManualRuntime::new();
    let wrapper = Debounced::new(
        |_: Invocation<(), ()>| panic!("action failed"),
        Duration::from_millis(10),
        runtime.clone(),
    );

    wrapper.call(Invocation::new(Vec::new()));
    runtime.advance(Duration::from_millis(10));
}
