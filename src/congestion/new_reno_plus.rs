use super::{CongestionController, CongestionState};

const SLOW_START_EXPONENT: f64 = 1.91;
const AVOIDANCE_FACTOR: f64 = 0.51;

// NewReno with a super-linear slow-start step and a fixed sub-segment
// avoidance step. Both adders truncate to whole bytes.
#[derive(Debug)]
pub struct NewRenoPlus;

impl CongestionController for NewRenoPlus {
    fn name(&self) -> &'static str {
        "NewRenoPlus"
    }

    fn slow_start(&self, state: &CongestionState, segments_acked: u32) -> (usize, u32) {
        assert!(state.cwnd > 0, "congestion window must be positive");

        if segments_acked == 0 {
            return (state.cwnd, 0);
        }

        let adder = (state.segment_size as f64).powf(SLOW_START_EXPONENT) / state.cwnd as f64;

        (state.cwnd + adder as usize, segments_acked - 1)
    }

    fn congestion_avoidance(&self, state: &CongestionState, segments_acked: u32) -> usize {
        if segments_acked == 0 {
            return state.cwnd;
        }

        let adder = state.segment_size as f64 * AVOIDANCE_FACTOR;

        state.cwnd + adder as usize
    }
}
