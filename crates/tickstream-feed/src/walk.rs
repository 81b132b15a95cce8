//! Bounded-step random walk over a shared current price.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// One uniformly distributed step in [-1, +1].
pub fn uniform_step() -> f64 {
    (rand::thread_rng().gen::<f64>() - 0.5) * 2.0
}

/// The shared current price, stored as f64 bits in an atomic.
///
/// Only the feed engine calls [`advance`](Self::advance); everything else
/// (backfill seeding, health output) reads [`current`](Self::current) with
/// relaxed ordering. A reader may observe a value up to one in-flight round
/// stale, which is fine — backfill is synthetic, not authoritative history.
///
/// The walk is unclamped: the price may drift without limit.
pub struct PriceWalk {
    bits: AtomicU64,
}

impl PriceWalk {
    pub fn new(initial: f64) -> Self {
        Self {
            bits: AtomicU64::new(initial.to_bits()),
        }
    }

    /// Advisory read of the current price.
    pub fn current(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Apply one step and return the new price. Single-writer: callers must
    /// serialize invocations, which holds because only the engine loop
    /// advances the walk.
    pub fn advance(&self) -> f64 {
        let next = self.current() + uniform_step();
        self.bits.store(next.to_bits(), Ordering::Relaxed);
        next
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
