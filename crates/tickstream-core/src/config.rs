use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_INTERVAL_MS: u64 = 1_000; // one broadcast round per second
pub const DEFAULT_BACKFILL_LEN: usize = 20;
pub const DEFAULT_BACKFILL_SPACING_MS: u64 = 1_000;
pub const DEFAULT_INITIAL_PRICE: f64 = 100.0;
/// Frames buffered per subscriber before it counts as a slow consumer.
pub const OUTBOUND_QUEUE_FRAMES: usize = 64;

/// Top-level config (tickstream.toml + TICKSTREAM_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickstreamConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Tuning for the price feed itself: broadcast cadence, backfill window,
/// and the walk's starting value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_backfill_len")]
    pub backfill_len: usize,
    #[serde(default = "default_backfill_spacing_ms")]
    pub backfill_spacing_ms: u64,
    #[serde(default = "default_initial_price")]
    pub initial_price: f64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            backfill_len: DEFAULT_BACKFILL_LEN,
            backfill_spacing_ms: DEFAULT_BACKFILL_SPACING_MS,
            initial_price: DEFAULT_INITIAL_PRICE,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}
fn default_backfill_len() -> usize {
    DEFAULT_BACKFILL_LEN
}
fn default_backfill_spacing_ms() -> u64 {
    DEFAULT_BACKFILL_SPACING_MS
}
fn default_initial_price() -> f64 {
    DEFAULT_INITIAL_PRICE
}

impl TickstreamConfig {
    /// Load config from a TOML file with TICKSTREAM_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.tickstream/tickstream.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: TickstreamConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("TICKSTREAM_").split("_"))
            .extract()
            .map_err(|e| crate::error::TickstreamError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.tickstream/tickstream.toml", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = TickstreamConfig::default();
        assert_eq!(config.gateway.port, DEFAULT_PORT);
        assert_eq!(config.feed.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(config.feed.backfill_len, DEFAULT_BACKFILL_LEN);
        assert_eq!(config.feed.initial_price, DEFAULT_INITIAL_PRICE);
    }

    #[test]
    fn missing_file_yields_defaults() {
        // Figment treats a missing TOML file as an empty source, so every
        // field falls back to its serde default.
        let config = TickstreamConfig::load(Some("/nonexistent/tickstream.toml")).unwrap();
        assert_eq!(config.gateway.bind, DEFAULT_BIND);
        assert_eq!(config.feed.backfill_spacing_ms, DEFAULT_BACKFILL_SPACING_MS);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let dir = std::env::temp_dir().join("tickstream-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("partial.toml");
        std::fs::write(&path, "[feed]\nbackfill_len = 5\n").unwrap();

        let config = TickstreamConfig::load(path.to_str()).unwrap();
        assert_eq!(config.feed.backfill_len, 5);
        assert_eq!(config.feed.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(config.gateway.port, DEFAULT_PORT);
    }
}
