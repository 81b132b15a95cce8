use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped price sample, live or backfilled.
/// Wire: `{ "time": "2026-08-05T12:00:00Z", "price": 101.3, "isNew": true }`
///
/// `isNew` tells a rendering client whether to append the point to its
/// series (`true`) or treat it as pre-existing history (`false`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tick {
    pub time: DateTime<Utc>,
    pub price: f64,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

impl Tick {
    /// A live tick stamped with the current time.
    pub fn live(price: f64) -> Self {
        Self {
            time: Utc::now(),
            price,
            is_new: true,
        }
    }

    /// A backfilled (historical) tick at an explicit timestamp.
    pub fn backfill(time: DateTime<Utc>, price: f64) -> Self {
        Self {
            time,
            price,
            is_new: false,
        }
    }
}

/// Server → Client one-shot history frame, sent first on every connection.
/// Wire: `{ "type": "initial", "data": [ {...}, ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialFrame {
    #[serde(rename = "type")]
    pub frame_type: String,
    pub data: Vec<Tick>,
}

impl InitialFrame {
    pub fn new(data: Vec<Tick>) -> Self {
        Self {
            frame_type: "initial".to_string(),
            data,
        }
    }
}
