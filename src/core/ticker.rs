//! Cancellable periodic task
//!
//! The tracking view advances its simulation on a fixed period. The timer
//! runs as a tokio task that sends a tick number over a channel; dropping
//! (or cancelling) the [`PeriodicTask`] aborts it, so the timer never
//! outlives the view that started it.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running periodic timer
#[derive(Debug)]
pub struct PeriodicTask {
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    /// Start ticking every `period`, first tick one period from now.
    ///
    /// Must be called inside a tokio runtime. Tick numbers start at 1.
    /// Periods under a millisecond are raised to one.
    pub fn start(period: Duration) -> (Self, mpsc::Receiver<u64>) {
        let period = period.max(MIN_PERIOD);
        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut tick = 0u64;
            loop {
                interval.tick().await;
                tick += 1;
                tracing::trace!(tick, "timer fired");
                if tx.send(tick).await.is_err() {
                    break;
                }
            }
        });
        (Self { handle }, rx)
    }

    /// Stop the timer; no further ticks are delivered
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_are_numbered() {
        let (_task, mut rx) = PeriodicTask::start(Duration::from_secs(2));
        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
        assert_eq!(rx.recv().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_closes_channel() {
        let (task, mut rx) = PeriodicTask::start(Duration::from_millis(10));
        assert_eq!(rx.recv().await, Some(1));
        task.cancel();
        let mut late = 0;
        while rx.recv().await.is_some() {
            late += 1;
        }
        assert!(late <= 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_still_ticks() {
        let (_task, mut rx) = PeriodicTask::start(Duration::ZERO);
        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_timer() {
        let (task, mut rx) = PeriodicTask::start(Duration::from_millis(10));
        drop(task);
        assert_eq!(rx.recv().await, None);
    }
}
