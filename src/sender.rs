use std::{net::SocketAddr, time::Duration};

use crate::{
    clock::{Clock, Scheduler},
    error::SenderError,
    pacenet_debug,
    rate::DataRate,
    trace::TraceSink,
    transport::{Transport, TransportKind},
};

// Warm-up period after which connectionless traffic is forced down to the
// throttled rate on every scheduling decision.
const THROTTLE_AFTER: Duration = Duration::from_secs(30);
const THROTTLED_RATE: DataRate = DataRate::from_bits_per_sec(500_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderPhase {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy)]
pub struct SenderConfig {
    pub peer: SocketAddr,
    pub packet_size: usize,
    pub total_to_send: u64,
    pub rate: DataRate,
}

pub struct AdaptiveSender<T: Transport, S: Scheduler> {
    transport: T,
    peer: SocketAddr,
    packet_size: usize,
    total_to_send: u64,
    rate: DataRate,
    packets_sent: u64,
    phase: SenderPhase,
    send_event: Option<S::Handle>,
}

impl<T: Transport, S: Scheduler> AdaptiveSender<T, S> {
    pub fn new(transport: T, config: SenderConfig) -> Self {
        assert!(config.packet_size > 0, "packet size must be positive");

        Self {
            transport,
            peer: config.peer,
            packet_size: config.packet_size,
            total_to_send: config.total_to_send,
            rate: config.rate,
            packets_sent: 0,
            phase: SenderPhase::Idle,
            send_event: None,
        }
    }

    pub fn phase(&self) -> SenderPhase {
        self.phase
    }

    pub fn packets_sent(&self) -> u64 {
        self.packets_sent
    }

    pub fn rate(&self) -> DataRate {
        self.rate
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn start(&mut self, sched: &mut S, sink: &mut dyn TraceSink) -> Result<(), SenderError> {
        if self.phase != SenderPhase::Idle {
            return Err(SenderError::AlreadyStarted);
        }

        self.transport.bind()?;
        self.transport.connect(self.peer)?;

        self.phase = SenderPhase::Running;
        self.packets_sent = 0;

        self.send_packet(sched, sink)
    }

    // Host callback for the scheduled emission timer. A timer that fires
    // after stop has run is ignored.
    pub fn on_timer(&mut self, sched: &mut S, sink: &mut dyn TraceSink) -> Result<(), SenderError> {
        self.send_event = None;

        if self.phase != SenderPhase::Running {
            return Ok(());
        }

        self.send_packet(sched, sink)
    }

    pub fn stop(&mut self, sched: &mut S) {
        if self.phase == SenderPhase::Stopped {
            return;
        }

        if let Some(handle) = self.send_event.take() {
            sched.cancel(handle);
        }

        self.phase = SenderPhase::Stopped;
        self.transport.close();
    }

    fn send_packet(&mut self, sched: &mut S, sink: &mut dyn TraceSink) -> Result<(), SenderError> {
        self.transport.send(self.packet_size)?;
        self.packets_sent += 1;

        sink.packet_sent(sched.now(), self.packet_size, self.packets_sent);

        if self.packets_sent < self.total_to_send {
            self.schedule_send(sched);
        } else {
            pacenet_debug!("Sender exhausted after {} packets.", self.packets_sent);
            self.phase = SenderPhase::Stopped;
            self.transport.close();
        }

        Ok(())
    }

    fn schedule_send(&mut self, sched: &mut S) {
        if self.phase != SenderPhase::Running {
            return;
        }

        if sched.now() >= THROTTLE_AFTER && self.transport.kind() == TransportKind::Connectionless {
            self.rate = THROTTLED_RATE;
        }

        let delay = self.rate.serialization_delay(self.packet_size);
        self.send_event = Some(sched.schedule_after(delay));
    }
}
