//! Synthetic trailing history for new subscribers.
//!
//! The window is a plausible-looking random walk ending near the current
//! live price, not a replay of what was actually broadcast: it is seeded
//! from the price at join time and uses fresh randomness per call, so two
//! simultaneous joins get independent windows.

use chrono::{Duration, Utc};
use tickstream_protocol::Tick;

use crate::walk::uniform_step;

/// How far below the live price the synthetic walk starts.
const SEED_OFFSET: f64 = 10.0;

/// Materialize `count` backdated ticks, oldest first.
///
/// Step `i` is stamped `now - (count - 1 - i) * spacing_ms`, so the last
/// tick lands at "now" and every tick carries `isNew = false`.
pub fn synthesize(now_price: f64, count: usize, spacing_ms: u64) -> Vec<Tick> {
    let now = Utc::now();
    let mut price = now_price - SEED_OFFSET;
    let mut points = Vec::with_capacity(count);

    for i in 0..count {
        price += uniform_step();
        let offset = (count - 1 - i) as i64 * spacing_ms as i64;
        points.push(Tick::backfill(now - Duration::milliseconds(offset), price));
    }
    points
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_count_points() {
        assert_eq!(synthesize(100.0, 20, 1_000).len(), 20);
        assert_eq!(synthesize(100.0, 1, 1_000).len(), 1);
        assert!(synthesize(100.0, 0, 1_000).is_empty());
    }

    #[test]
    fn all_points_are_historical() {
        for tick in synthesize(100.0, 20, 1_000) {
            assert!(!tick.is_new);
        }
    }

    #[test]
    fn timestamps_strictly_increase_and_end_at_now() {
        let points = synthesize(100.0, 20, 1_000);
        for pair in points.windows(2) {
            assert!(pair[0].time < pair[1].time);
            assert_eq!((pair[1].time - pair[0].time).num_milliseconds(), 1_000);
        }
        assert!(points.last().unwrap().time <= Utc::now());
    }

    #[test]
    fn walk_is_seeded_below_the_live_price() {
        // First point = (now_price - 10) plus one unit step.
        let points = synthesize(100.0, 20, 1_000);
        let first = points[0].price;
        assert!((89.0..=91.0).contains(&first), "first point {first}");
    }

    #[test]
    fn consecutive_points_step_by_at_most_one() {
        let points = synthesize(100.0, 50, 100);
        for pair in points.windows(2) {
            assert!((pair[1].price - pair[0].price).abs() <= 1.0);
        }
    }

    #[test]
    fn concurrent_joins_get_independent_windows() {
        // Fresh randomness per call: 20 steps colliding exactly is
        // vanishingly unlikely.
        let a = synthesize(100.0, 20, 1_000);
        let b = synthesize(100.0, 20, 1_000);
        assert!(a.iter().zip(&b).any(|(x, y)| x.price != y.price));
    }
}
