//! Feed poller
//!
//! Keeps the feed's burned/active partition eventually consistent with
//! server time by re-running the active-confession fetch (including the
//! expiry sweep) on a fixed interval. Feed staleness is bounded by the
//! poll interval, not zero; that bound is the system's sole ordering
//! guarantee.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use ember_core::entities::Confession;

use super::confession::ConfessionService;
use super::context::ServiceContext;

/// One observation of the active feed
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub confessions: Vec<Confession>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl FeedSnapshot {
    /// Whether the poller has completed at least one refresh
    pub fn is_fresh(&self) -> bool {
        self.refreshed_at.is_some()
    }
}

/// Periodically refreshes the active feed and publishes snapshots
pub struct FeedPoller {
    ctx: ServiceContext,
    interval: Duration,
}

impl FeedPoller {
    /// Create a poller with the given refresh interval (the worst-case
    /// staleness bound; 30 seconds in the default configuration)
    pub fn new(ctx: ServiceContext, interval: Duration) -> Self {
        Self { ctx, interval }
    }

    /// Spawn the polling task. The first refresh happens immediately;
    /// subsequent refreshes follow the interval. The task stops once
    /// every receiver has been dropped.
    pub fn spawn(self) -> (watch::Receiver<FeedSnapshot>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(FeedSnapshot::default());
        let handle = tokio::spawn(self.run(tx));
        (rx, handle)
    }

    #[instrument(skip(self, tx))]
    async fn run(self, tx: watch::Sender<FeedSnapshot>) {
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            ticker.tick().await;

            let confessions = ConfessionService::new(&self.ctx).list_active().await;
            debug!(count = confessions.len(), "feed refreshed");

            let snapshot = FeedSnapshot {
                confessions,
                refreshed_at: Some(Utc::now()),
            };

            if tx.send(snapshot).is_err() {
                // No subscribers left; nothing to keep fresh.
                break;
            }
        }
    }
}
