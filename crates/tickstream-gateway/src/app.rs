use axum::{routing::get, Router};
use std::sync::Arc;
use tickstream_core::TickstreamConfig;
use tickstream_feed::{PriceWalk, SubscriberRegistry};

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
///
/// The walk and registry are the only shared mutable pieces: the feed
/// engine advances the walk and evicts failed subscribers; connection
/// tasks register/deregister themselves and read the walk as a backfill
/// seed.
pub struct AppState {
    pub config: TickstreamConfig,
    pub walk: Arc<PriceWalk>,
    pub registry: Arc<SubscriberRegistry>,
}

impl AppState {
    pub fn new(config: TickstreamConfig) -> Self {
        let walk = Arc::new(PriceWalk::new(config.feed.initial_price));
        Self {
            config,
            walk,
            registry: Arc::new(SubscriberRegistry::new()),
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route("/ws", get(crate::ws::connection::ws_handler))
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
