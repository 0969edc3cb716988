//! Background refresh of the unread-notification count.
//!
//! [`NotificationPoller::spawn`] starts a task that asks the notification
//! collaborator to refresh immediately and then once per interval. The task
//! lives exactly as long as the returned [`PollerHandle`]: dropping the handle
//! or calling [`PollerHandle::shutdown`] cancels the timer and aborts any fetch
//! still in flight, so nothing starts after teardown.
//!
//! Fetches are spawned rather than awaited inline, so a slow backend can have
//! two requests in flight at once. The count cell takes whichever response
//! lands last.

use std::sync::Arc;
use std::time::Duration;

use neobank_api::NotificationProvider;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Refresh period used by the shell unless configured otherwise.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

pub struct NotificationPoller {
    provider: Arc<dyn NotificationProvider>,
    interval: Duration,
}

impl NotificationPoller {
    pub fn new(provider: Arc<dyn NotificationProvider>, interval: Duration) -> Self {
        Self { provider, interval }
    }

    /// Starts polling on the current Tokio runtime.
    pub fn spawn(self) -> PollerHandle {
        let cancellation_token = CancellationToken::new();
        let task = tokio::spawn(run_poll_loop(self.provider, self.interval, cancellation_token.child_token()));
        debug!(interval_secs = self.interval.as_secs_f64(), "notification polling started");
        PollerHandle {
            cancellation_token,
            task: Some(task),
        }
    }
}

/// Owned handle to a running poll loop.
#[derive(Debug)]
pub struct PollerHandle {
    cancellation_token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Cancels the loop and waits for it to wind down.
    pub async fn shutdown(mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take()
            && let Err(error) = task.await
            && !error.is_cancelled()
        {
            warn!("notification poll task failed: {error}");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_poll_loop(provider: Arc<dyn NotificationProvider>, period: Duration, cancellation_token: CancellationToken) {
    // The first tick completes immediately, which gives the fetch-on-mount.
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight: JoinSet<()> = JoinSet::new();

    loop {
        tokio::select! {
            biased;
            _ = cancellation_token.cancelled() => break,
            _ = ticker.tick() => {
                let provider = Arc::clone(&provider);
                in_flight.spawn(async move {
                    if let Err(error) = provider.fetch_unread_count().await {
                        // Left as-is until the next tick retries.
                        warn!(%error, "unread count refresh failed");
                    }
                });
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(error) = joined && error.is_panic() {
                    warn!("unread count refresh panicked: {error}");
                }
            }
        }
    }

    in_flight.abort_all();
    debug!("notification polling stopped");
}
