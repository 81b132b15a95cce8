//! Concurrent set of connected subscribers.

use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::mpsc;

/// Why a frame could not be handed to a subscriber.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The outbound queue's receiver is gone — the connection task exited.
    #[error("subscriber queue closed")]
    Closed,
    /// The bounded outbound queue is full — the consumer is too slow.
    #[error("subscriber queue full")]
    Backlogged,
}

/// Handle to one connected subscriber: its connection id plus the bounded
/// queue drained by the owning connection task.
#[derive(Clone)]
pub struct Subscriber {
    conn_id: String,
    tx: mpsc::Sender<String>,
}

impl Subscriber {
    pub fn new(conn_id: String, tx: mpsc::Sender<String>) -> Self {
        Self { conn_id, tx }
    }

    pub fn conn_id(&self) -> &str {
        &self.conn_id
    }

    /// Hand one serialized frame to this subscriber without blocking.
    ///
    /// The engine loop must never stall on a single connection, so a full
    /// queue is a failure here rather than a wait.
    pub fn send(&self, frame: String) -> Result<(), DeliveryError> {
        self.tx.try_send(frame).map_err(|e| match e {
            mpsc::error::TrySendError::Closed(_) => DeliveryError::Closed,
            mpsc::error::TrySendError::Full(_) => DeliveryError::Backlogged,
        })
    }
}

/// Active subscribers: conn_id → outbound queue sender.
///
/// Mutations and snapshots touch the map's shard locks only briefly;
/// delivery always happens outside any lock, against a snapshot. Removal is
/// idempotent — the engine's eviction path and a subscriber's own disconnect
/// path may both remove the same entry.
#[derive(Default)]
pub struct SubscriberRegistry {
    clients: DashMap<String, mpsc::Sender<String>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self {
            clients: DashMap::new(),
        }
    }

    /// Insert a subscriber. Re-adding an existing conn_id replaces its queue
    /// (should not occur in practice — ids are fresh UUIDs per connection).
    pub fn add(&self, subscriber: Subscriber) {
        self.clients
            .insert(subscriber.conn_id.clone(), subscriber.tx);
    }

    /// Remove a subscriber if present; a no-op otherwise.
    pub fn remove(&self, conn_id: &str) {
        self.clients.remove(conn_id);
    }

    /// Clone the current membership so callers can iterate without holding
    /// registry locks for the duration of delivery.
    pub fn snapshot(&self) -> Vec<Subscriber> {
        self.clients
            .iter()
            .map(|entry| Subscriber::new(entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
