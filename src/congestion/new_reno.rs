use super::{CongestionController, CongestionState};

// Standard NewReno growth: one segment per acknowledged segment during slow
// start, one segment's worth per window per ack batch afterwards.
#[derive(Debug)]
pub struct NewReno;

impl CongestionController for NewReno {
    fn name(&self) -> &'static str {
        "NewReno"
    }

    fn slow_start(&self, state: &CongestionState, segments_acked: u32) -> (usize, u32) {
        assert!(state.cwnd > 0, "congestion window must be positive");

        if segments_acked == 0 {
            return (state.cwnd, 0);
        }

        (state.cwnd + state.segment_size, segments_acked - 1)
    }

    fn congestion_avoidance(&self, state: &CongestionState, segments_acked: u32) -> usize {
        assert!(state.cwnd > 0, "congestion window must be positive");

        if segments_acked == 0 {
            return state.cwnd;
        }

        let adder =
            ((state.segment_size * state.segment_size) as f64 / state.cwnd as f64).max(1.0);

        state.cwnd + adder as usize
    }
}
