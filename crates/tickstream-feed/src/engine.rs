//! The broadcast loop: one tick per interval, fanned out to every subscriber.

use std::sync::Arc;
use std::time::Duration;

use tickstream_core::Result;
use tickstream_protocol::Tick;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::registry::SubscriberRegistry;
use crate::walk::PriceWalk;

/// Drives the feed: advances the walk once per interval and delivers the
/// resulting tick to the current registry snapshot.
pub struct FeedEngine {
    walk: Arc<PriceWalk>,
    registry: Arc<SubscriberRegistry>,
    interval: Duration,
}

impl FeedEngine {
    pub fn new(
        walk: Arc<PriceWalk>,
        registry: Arc<SubscriberRegistry>,
        interval: Duration,
    ) -> Self {
        Self {
            walk,
            registry,
            interval,
        }
    }

    /// Execute one broadcast round and return the tick it produced.
    ///
    /// The walk advances even with zero subscribers — time and value keep
    /// moving without an audience. The tick is serialized once; each
    /// subscriber then gets a non-blocking hand-off, and any failure evicts
    /// only that subscriber.
    pub fn round(&self) -> Result<Tick> {
        let tick = Tick::live(self.walk.advance());
        let frame = serde_json::to_string(&tick)?;

        for subscriber in self.registry.snapshot() {
            if let Err(e) = subscriber.send(frame.clone()) {
                warn!(
                    conn_id = %subscriber.conn_id(),
                    error = %e,
                    "delivery failed, evicting subscriber"
                );
                self.registry.remove(subscriber.conn_id());
            }
        }
        Ok(tick)
    }

    /// Main loop. Broadcasts every interval until `shutdown` flips to `true`.
    ///
    /// A failed round is a programming defect (the tick is pure arithmetic
    /// and well-formed JSON); it is logged loudly and the cadence continues.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(interval_ms = self.interval.as_millis() as u64, "feed engine started");

        let mut interval = tokio::time::interval(self.interval);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = self.round() {
                        error!("broadcast round failed: {e}");
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("feed engine shutting down");
                        break;
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
