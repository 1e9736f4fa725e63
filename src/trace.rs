use std::{sync::Arc, time::Duration};

use crossbeam_queue::ArrayQueue;

use crate::pacenet_debug;

pub trait TraceSink {
    #[allow(unused_variables)]
    fn cwnd_change(&mut self, now: Duration, old_cwnd: usize, new_cwnd: usize) {}

    #[allow(unused_variables)]
    fn packet_sent(&mut self, now: Duration, size: usize, total_sent: u64) {}
}

#[derive(Debug)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    CwndChange {
        at: Duration,
        guid: u64,
        old_cwnd: usize,
        new_cwnd: usize,
    },
    PacketSent {
        at: Duration,
        guid: u64,
        size: usize,
        total_sent: u64,
    },
}

// Bounded trace stream the host drains at its own pace. Each sink instance
// tags its events with a guid so streams from several connections can share
// one queue.
#[derive(Debug)]
pub struct QueueSink {
    guid: u64,
    events: Arc<ArrayQueue<TraceEvent>>,
}

impl QueueSink {
    pub fn new(events: Arc<ArrayQueue<TraceEvent>>) -> Self {
        Self {
            guid: rand::random(),
            events,
        }
    }

    pub fn with_guid(guid: u64, events: Arc<ArrayQueue<TraceEvent>>) -> Self {
        Self { guid, events }
    }

    pub fn guid(&self) -> u64 {
        self.guid
    }

    fn push(&self, event: TraceEvent) {
        if self.events.push(event).is_err() {
            pacenet_debug!("Trace queue is full, dropping event.");
        }
    }
}

impl TraceSink for QueueSink {
    fn cwnd_change(&mut self, now: Duration, old_cwnd: usize, new_cwnd: usize) {
        self.push(TraceEvent::CwndChange {
            at: now,
            guid: self.guid,
            old_cwnd,
            new_cwnd,
        });
    }

    fn packet_sent(&mut self, now: Duration, size: usize, total_sent: u64) {
        self.push(TraceEvent::PacketSent {
            at: now,
            guid: self.guid,
            size,
            total_sent,
        });
    }
}
