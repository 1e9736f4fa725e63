pub mod new_reno;
pub mod new_reno_plus;

use std::time::Duration;

use dashmap::DashMap;

use crate::trace::TraceSink;

pub use new_reno::NewReno;
pub use new_reno_plus::NewRenoPlus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CongestionState {
    pub cwnd: usize,
    pub ssthresh: usize,
    pub segment_size: usize,
}

impl CongestionState {
    pub fn new(cwnd: usize, ssthresh: usize, segment_size: usize) -> Self {
        assert!(cwnd > 0, "congestion window must be positive");
        assert!(segment_size > 0, "segment size must be positive");

        Self {
            cwnd,
            ssthresh,
            segment_size,
        }
    }

    pub fn is_in_slow_start(&self) -> bool {
        self.cwnd < self.ssthresh
    }
}

pub trait CongestionController {
    fn name(&self) -> &'static str;

    // Grows the window by one acknowledged segment's worth and returns the
    // new window together with the segments left for the caller to process.
    fn slow_start(&self, state: &CongestionState, segments_acked: u32) -> (usize, u32);

    fn congestion_avoidance(&self, state: &CongestionState, segments_acked: u32) -> usize;

    // Ack-feed entry point: the host transport calls this once per
    // acknowledgment event and stores the mutated window back into its own
    // connection state.
    fn increase_window(
        &self,
        state: &mut CongestionState,
        mut segments_acked: u32,
        now: Duration,
        sink: &mut dyn TraceSink,
    ) {
        let old_cwnd = state.cwnd;

        while segments_acked > 0 && state.is_in_slow_start() {
            let (cwnd, remaining) = self.slow_start(state, segments_acked);
            state.cwnd = cwnd;
            segments_acked = remaining;
        }

        if segments_acked > 0 {
            state.cwnd = self.congestion_avoidance(state, segments_acked);
        }

        if state.cwnd != old_cwnd {
            sink.cwnd_change(now, old_cwnd, state.cwnd);
        }
    }
}

pub type ControllerCtor = fn() -> Box<dyn CongestionController>;

#[derive(Debug)]
pub struct CongestionRegistry {
    ctors: DashMap<String, ControllerCtor>,
}

impl CongestionRegistry {
    pub fn new() -> Self {
        Self {
            ctors: DashMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register("NewReno", || Box::new(NewReno));
        registry.register("NewRenoPlus", || Box::new(NewRenoPlus));
        registry
    }

    pub fn register(&self, name: &str, ctor: ControllerCtor) {
        self.ctors.insert(name.to_string(), ctor);
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn CongestionController>> {
        self.ctors.get(name).map(|ctor| (*ctor)())
    }
}
