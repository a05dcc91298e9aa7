use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// One beat of the progress clock, tagged with the arm that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTick {
    pub generation: u64,
}

/// Something that can deliver periodic [`PlaybackTick`]s.
///
/// The sequencer arms it while a track is playing and disarms it on every
/// transition that pauses or swaps the track.
pub trait TickScheduler: Send {
    fn arm(&mut self, generation: u64, period: Duration);
    fn disarm(&mut self);
}

/// Tokio-backed scheduler: one interval task per arm.
pub struct ProgressTimer<E> {
    tx: mpsc::Sender<E>,
    task: Option<JoinHandle<()>>,
}

impl<E> ProgressTimer<E>
where
    E: From<PlaybackTick> + Send + 'static,
{
    pub fn new(tx: mpsc::Sender<E>) -> Self {
        Self { tx, task: None }
    }

    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl<E> TickScheduler for ProgressTimer<E>
where
    E: From<PlaybackTick> + Send + 'static,
{
    fn arm(&mut self, generation: u64, period: Duration) {
        self.disarm();
        let tx = self.tx.clone();
        debug!(generation, period_ms = period.as_millis() as u64, "arming progress timer");
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(PlaybackTick { generation }.into()).await.is_err() {
                    break;
                }
            }
        }));
    }

    fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<E> Drop for ProgressTimer<E> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_emits_ticks_after_each_period() {
        let (tx, mut rx) = mpsc::channel::<PlaybackTick>(8);
        let mut timer = ProgressTimer::new(tx);
        timer.arm(7, Duration::from_secs(1));

        let tick = rx.recv().await.unwrap();
        assert_eq!(tick, PlaybackTick { generation: 7 });
        let tick = rx.recv().await.unwrap();
        assert_eq!(tick.generation, 7);
        assert!(timer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_stops_ticks() {
        let (tx, mut rx) = mpsc::channel::<PlaybackTick>(8);
        let mut timer = ProgressTimer::new(tx);
        timer.arm(1, Duration::from_secs(1));
        assert!(rx.recv().await.is_some());

        timer.disarm();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert!(!timer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_previous_task() {
        let (tx, mut rx) = mpsc::channel::<PlaybackTick>(8);
        let mut timer = ProgressTimer::new(tx);
        timer.arm(1, Duration::from_secs(1));
        timer.arm(2, Duration::from_secs(1));

        let tick = rx.recv().await.unwrap();
        assert_eq!(tick.generation, 2);
        let tick = rx.recv().await.unwrap();
        assert_eq!(tick.generation, 2);
    }
}
