//! Non-blocking handoff of click events to the background worker.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;

/// Producer side of the click channel.
///
/// Scheduling never waits: when the queue is full the click is dropped and
/// counted, and the redirect goes out regardless.
#[derive(Clone)]
pub struct ClickScheduler {
    tx: mpsc::Sender<ClickEvent>,
}

impl ClickScheduler {
    pub fn new(tx: mpsc::Sender<ClickEvent>) -> Self {
        Self { tx }
    }

    /// Creates a scheduler and the receiver the worker drains.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ClickEvent>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }

    /// Enqueues `event`. Returns `false` if it was dropped.
    pub fn schedule(&self, event: ClickEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                debug!(link_id = %event.link_id, "Click queue full, dropping click");
                false
            }
            Err(TrySendError::Closed(event)) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                warn!(link_id = %event.link_id, "Click worker stopped, dropping click");
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Free slots left in the queue.
    pub fn capacity(&self) -> usize {
        self.tx.capacity()
    }

    pub fn max_capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}
