//! Background worker that persists click events off the response path.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickRepository;
use crate::utils::click_metadata;

/// Consumes click events until the channel closes.
///
/// At most `concurrency` writes run at once. Failures are logged and
/// dropped; there is no retry. When every sender is gone the worker waits
/// for in-flight writes before returning, which lets the server drain the
/// queue on shutdown.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn ClickRepository>,
    concurrency: usize,
) {
    let concurrency = concurrency.max(1);
    let mut in_flight = JoinSet::new();

    while let Some(event) = rx.recv().await {
        while in_flight.try_join_next().is_some() {}

        if in_flight.len() >= concurrency {
            in_flight.join_next().await;
        }

        in_flight.spawn(record(repository.clone(), event));
    }

    while let Some(result) = in_flight.join_next().await {
        if let Err(e) = result {
            warn!("Click task aborted: {}", e);
        }
    }

    info!("Click worker stopped");
}

async fn record(repository: Arc<dyn ClickRepository>, event: ClickEvent) {
    let click = click_metadata::to_new_click(&event);
    let link_id = click.link_id.clone();

    match repository.record_click(click).await {
        Ok(()) => {
            metrics::counter!("clicks_recorded_total").increment(1);
            debug!(link_id = %link_id, "Click recorded");
        }
        Err(e) => {
            metrics::counter!("clicks_failed_total").increment(1);
            warn!(link_id = %link_id, error = %e, "Failed to record click");
        }
    }
}
