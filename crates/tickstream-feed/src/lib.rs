//! `tickstream-feed` — the broadcast core of the tick stream.
//!
//! # Overview
//!
//! ```text
//!                      ┌─────────────┐
//!                      │  PriceWalk  │  shared current price (atomic)
//!                      └──────┬──────┘
//!            advance() │             │ current() (relaxed read)
//!                      ▼             ▼
//!               ┌────────────┐  ┌───────────┐
//!               │ FeedEngine │  │  backfill │  per-join history window
//!               └──────┬─────┘  └───────────┘
//!                      │ snapshot + try_send per round
//!                      ▼
//!           ┌────────────────────┐
//!           │ SubscriberRegistry │  conn_id → outbound queue
//!           └────────────────────┘
//! ```
//!
//! The [`engine::FeedEngine`] owns the cadence: once per interval it advances
//! the walk, serializes the resulting tick once, and pushes it into every
//! registered subscriber's outbound queue. Delivery failures evict only the
//! failing subscriber. Per-connection tasks (in the gateway crate) register
//! themselves, drain their queue onto the socket, and deregister on exit.

pub mod backfill;
pub mod engine;
pub mod registry;
pub mod walk;

pub use engine::FeedEngine;
pub use registry::{DeliveryError, Subscriber, SubscriberRegistry};
pub use walk::PriceWalk;
