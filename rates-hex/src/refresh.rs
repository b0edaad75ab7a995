//! Background refresh loop lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use rates_types::RateProvider;

use crate::cache::RateCache;
use crate::retry::RetryPolicy;

/// Handle to a running refresh loop.
///
/// Startup is explicit (`start`), never a side effect of constructing a
/// service. Dropping the handle without calling [`stop`](Self::stop) also
/// ends the loop at its next cycle boundary.
pub struct RefreshHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Signals shutdown and waits for the loop to wind down.
    ///
    /// Shutdown stops scheduling new ticks; an in-flight fetch completes
    /// or fails naturally before the task exits.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// Spawns the refresh loop: every `interval`, run one retry-wrapped fetch
/// and write a successful result into the cache.
///
/// A cycle that resolves to no value leaves the cache untouched, so the
/// previous rate (if any) stays authoritative. The fetch is awaited
/// inside the loop, so at most one fetch is in flight; a tick falling due
/// mid-fetch is delayed rather than stacked.
pub fn start<P: RateProvider + 'static>(
    provider: P,
    cache: Arc<RateCache>,
    policy: RetryPolicy,
    interval: Duration,
) -> RefreshHandle {
    let (shutdown, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "starting rate refresh loop");

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown_rx.changed() => break,
            }

            match policy.run(&provider).await {
                Some(rate) => {
                    cache.write(rate);
                    info!(%rate, "rate cache updated");
                }
                None => {
                    debug!("no rate this cycle, keeping previous value");
                }
            }
        }

        info!("rate refresh loop stopped");
    });

    RefreshHandle { shutdown, task }
}
