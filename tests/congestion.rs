use std::{sync::Arc, time::Duration};

use crossbeam_queue::ArrayQueue;
use pacenet::{
    congestion::{CongestionController, CongestionRegistry, CongestionState, NewReno, NewRenoPlus},
    trace::{NoopSink, QueueSink, TraceEvent},
};

#[test]
fn slow_start_growth_matches_the_modified_law() {
    let controller = NewRenoPlus;
    let state = CongestionState::new(2000, 4000, 1000);

    // floor(1000^1.91 / 2000) = floor(268.515...) = 268
    let (cwnd, remaining) = controller.slow_start(&state, 1);

    assert_eq!(cwnd, 2268);
    assert_eq!(remaining, 0);
}

#[test]
fn slow_start_consumes_one_segment_per_step() {
    let controller = NewRenoPlus;
    let state = CongestionState::new(2000, 8000, 1000);

    let (cwnd, remaining) = controller.slow_start(&state, 5);
    assert_eq!(cwnd, 2268);
    assert_eq!(remaining, 4);

    // floor(1000^1.91 / 2268) = floor(236.786...) = 236
    let state = CongestionState::new(cwnd, 8000, 1000);
    let (cwnd, remaining) = controller.slow_start(&state, remaining);
    assert_eq!(cwnd, 2504);
    assert_eq!(remaining, 3);
}

#[test]
fn congestion_avoidance_adds_a_fixed_fraction_of_a_segment() {
    let controller = NewRenoPlus;
    let state = CongestionState::new(10000, 4000, 1000);

    // floor(1000 * 0.51) = 510
    assert_eq!(controller.congestion_avoidance(&state, 1), 10510);
    // The adder does not scale with the ack count.
    assert_eq!(controller.congestion_avoidance(&state, 7), 10510);
}

#[test]
fn zero_acks_change_nothing() {
    let controller = NewRenoPlus;
    let state = CongestionState::new(3000, 6000, 1460);

    assert_eq!(controller.slow_start(&state, 0), (3000, 0));
    assert_eq!(controller.congestion_avoidance(&state, 0), 3000);
}

#[test]
fn slow_start_is_strictly_increasing() {
    let controller = NewRenoPlus;

    for segment_size in [536, 1000, 1460] {
        let mut state = CongestionState::new(segment_size, 100 * segment_size, segment_size);

        for _ in 0..50 {
            let (cwnd, remaining) = controller.slow_start(&state, 3);
            assert!(cwnd > state.cwnd);
            assert_eq!(remaining, 2);
            state.cwnd = cwnd;
        }
    }
}

#[test]
fn increase_window_crosses_into_congestion_avoidance() {
    let controller = NewRenoPlus;
    let mut state = CongestionState::new(2000, 2100, 1000);

    // The first ack grows the window past ssthresh (2000 -> 2268), so the
    // remaining ack runs congestion avoidance.
    controller.increase_window(&mut state, 2, Duration::ZERO, &mut NoopSink);

    assert_eq!(state.cwnd, 2268 + 510);
}

#[test]
fn increase_window_spends_all_acks_in_slow_start() {
    let controller = NewRenoPlus;
    let mut state = CongestionState::new(2000, 8000, 1000);

    controller.increase_window(&mut state, 2, Duration::ZERO, &mut NoopSink);

    // 2000 -> 2268 -> 2504, both steps below ssthresh.
    assert_eq!(state.cwnd, 2504);
}

#[test]
fn window_changes_reach_the_trace_sink() {
    let controller = NewRenoPlus;
    let mut state = CongestionState::new(2000, 4000, 1000);

    let events = Arc::new(ArrayQueue::new(8));
    let mut sink = QueueSink::with_guid(7, events.clone());

    controller.increase_window(&mut state, 1, Duration::from_millis(1500), &mut sink);

    assert_eq!(
        events.pop(),
        Some(TraceEvent::CwndChange {
            at: Duration::from_millis(1500),
            guid: 7,
            old_cwnd: 2000,
            new_cwnd: 2268,
        })
    );
    assert!(events.pop().is_none());
}

#[test]
fn baseline_grows_one_segment_per_ack_in_slow_start() {
    let controller = NewReno;
    let state = CongestionState::new(2000, 8000, 1000);

    assert_eq!(controller.slow_start(&state, 3), (3000, 2));
}

#[test]
fn baseline_avoidance_grows_one_segment_per_window() {
    let controller = NewReno;
    let state = CongestionState::new(5000, 4000, 1000);

    // floor(1000 * 1000 / 5000) = 200
    assert_eq!(controller.congestion_avoidance(&state, 1), 5200);
}

#[test]
fn registry_builds_controllers_by_name() {
    let registry = CongestionRegistry::with_defaults();

    let plus = registry.create("NewRenoPlus").unwrap();
    assert_eq!(plus.name(), "NewRenoPlus");

    let baseline = registry.create("NewReno").unwrap();
    assert_eq!(baseline.name(), "NewReno");

    assert!(registry.create("Cubic").is_none());
}

#[test]
#[should_panic]
fn zero_window_is_rejected() {
    CongestionState::new(0, 4000, 1000);
}
