use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
    time::Duration,
};

pub trait Clock {
    fn now(&self) -> Duration;
}

pub trait Scheduler: Clock {
    type Handle;

    fn schedule_after(&mut self, delay: Duration) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub(crate) u64);

#[derive(Debug)]
struct Timer {
    deadline: Duration,
    id: u64,
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.id == other.id
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.deadline.cmp(&other.deadline).then(self.id.cmp(&other.id))
    }
}

// Virtual-time timer queue. Time only moves when a timer fires, so a test or
// a simulation driver fully controls the clock.
#[derive(Debug)]
pub struct VirtualScheduler {
    now: Duration,
    next_id: u64,
    timers: BinaryHeap<Reverse<Timer>>,
    live: HashSet<u64>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: BinaryHeap::new(),
            live: HashSet::new(),
        }
    }

    // Advances the clock to the earliest live timer and returns its handle.
    pub fn fire_next(&mut self) -> Option<TimerHandle> {
        while let Some(Reverse(timer)) = self.timers.pop() {
            if !self.live.remove(&timer.id) {
                continue;
            }

            self.now = timer.deadline;
            return Some(TimerHandle(timer.id));
        }

        None
    }

    pub fn next_deadline(&mut self) -> Option<Duration> {
        while let Some(Reverse(timer)) = self.timers.peek() {
            if self.live.contains(&timer.id) {
                return Some(timer.deadline);
            }
            self.timers.pop();
        }

        None
    }

    pub fn pending(&self) -> usize {
        self.live.len()
    }
}

impl Clock for VirtualScheduler {
    fn now(&self) -> Duration {
        self.now
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = TimerHandle;

    fn schedule_after(&mut self, delay: Duration) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        self.timers.push(Reverse(Timer {
            deadline: self.now + delay,
            id,
        }));
        self.live.insert(id);

        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.live.remove(&handle.0);
    }
}
