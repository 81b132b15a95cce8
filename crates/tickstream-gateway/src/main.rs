use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tickstream_feed::FeedEngine;
use tracing::info;

mod app;
mod http;
mod ws;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickstream_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: explicit path via TICKSTREAM_CONFIG > ~/.tickstream/tickstream.toml
    let config_path = std::env::var("TICKSTREAM_CONFIG").ok();
    let config = tickstream_core::TickstreamConfig::load(config_path.as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed ({}), using defaults", e);
            tickstream_core::TickstreamConfig::default()
        });

    let bind = config.gateway.bind.clone();
    let port = config.gateway.port;
    let interval = Duration::from_millis(config.feed.interval_ms);

    let state = Arc::new(app::AppState::new(config));
    let router = app::build_router(state.clone());

    // spawn the broadcast loop in the background
    let engine = FeedEngine::new(
        Arc::clone(&state.walk),
        Arc::clone(&state.registry),
        interval,
    );
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move { engine.run(shutdown_rx).await });

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("tickstream gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    // signal the engine to stop
    let _ = shutdown_tx.send(true);
    Ok(())
}
