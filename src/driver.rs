use std::{sync::Arc, time::Duration};

use tokio::{sync::Notify, task::JoinHandle, time::Instant};

use crate::{
    clock::{Clock, Scheduler, TimerHandle},
    pacenet_debug,
    sender::AdaptiveSender,
    trace::TraceSink,
    transport::Transport,
};

// Scheduler over the tokio clock. A sender keeps at most one timer in
// flight, so a single pending slot is enough.
#[derive(Debug)]
pub struct WallScheduler {
    epoch: Instant,
    next_id: u64,
    pending: Option<(Duration, u64)>,
}

impl WallScheduler {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            next_id: 0,
            pending: None,
        }
    }

    fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(at, _)| self.epoch + at)
    }
}

impl Clock for WallScheduler {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

impl Scheduler for WallScheduler {
    type Handle = TimerHandle;

    fn schedule_after(&mut self, delay: Duration) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        self.pending = Some((self.now() + delay, id));

        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some((_, id)) = self.pending {
            if id == handle.0 {
                self.pending = None;
            }
        }
    }
}

pub struct SenderDriver<T: Transport + Send + 'static> {
    stop_notify: Arc<Notify>,
    task: JoinHandle<AdaptiveSender<T, WallScheduler>>,
}

impl<T: Transport + Send + 'static> SenderDriver<T> {
    // Starts the sender on the tokio clock and drives it until exhaustion,
    // a transport failure, or an explicit stop. Must be called from within a
    // tokio runtime.
    pub fn spawn<K>(mut sender: AdaptiveSender<T, WallScheduler>, mut sink: K) -> Self
    where
        K: TraceSink + Send + 'static,
    {
        let stop_notify = Arc::new(Notify::new());
        let notify = stop_notify.clone();

        let task = tokio::spawn(async move {
            let mut sched = WallScheduler::new();

            if let Err(e) = sender.start(&mut sched, &mut sink) {
                pacenet_debug!("Failed to start sender: {:?}", e);
                return sender;
            }

            loop {
                let deadline = match sched.deadline() {
                    Some(deadline) => deadline,
                    None => break,
                };

                tokio::select! {
                    _ = notify.notified() => {
                        sender.stop(&mut sched);
                        break;
                    }
                    _ = tokio::time::sleep_until(deadline) => {
                        sched.pending = None;

                        if let Err(e) = sender.on_timer(&mut sched, &mut sink) {
                            pacenet_debug!("Failed to emit packet: {:?}", e);
                            sender.stop(&mut sched);
                            break;
                        }
                    }
                }
            }

            sender
        });

        Self { stop_notify, task }
    }

    pub fn stop(&self) {
        self.stop_notify.notify_one();
    }

    pub async fn join(self) -> Result<AdaptiveSender<T, WallScheduler>, tokio::task::JoinError> {
        self.task.await
    }
}
