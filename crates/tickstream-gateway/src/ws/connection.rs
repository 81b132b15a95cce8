use axum::{
    extract::{ws::Message, ws::WebSocket, State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tickstream_core::config::OUTBOUND_QUEUE_FRAMES;
use tickstream_feed::{backfill, Subscriber};
use tickstream_protocol::InitialFrame;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::AppState;

/// Axum handler — upgrades HTTP to WebSocket at GET /ws.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| run_connection(socket, state))
}

/// Per-connection task — lives from registration to disconnect.
///
/// Registers the subscriber, puts its backfill on the wire, then forwards
/// queued live frames until either side goes away. Inbound frames carry no
/// semantics; the read half exists to notice the disconnect. Every exit
/// path deregisters, and the engine may already have evicted us — removal
/// is idempotent either way.
async fn run_connection(socket: WebSocket, state: Arc<AppState>) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    info!(conn_id = %conn_id, "new subscriber connection");

    let (mut tx, mut rx) = socket.split();

    let (out_tx, mut out_rx) = mpsc::channel::<String>(OUTBOUND_QUEUE_FRAMES);
    state
        .registry
        .add(Subscriber::new(conn_id.clone(), out_tx));

    // Backfill goes out before the first live frame can be forwarded: live
    // ticks only ever reach us through the queue drained below.
    let feed = &state.config.feed;
    let history = backfill::synthesize(
        state.walk.current(),
        feed.backfill_len,
        feed.backfill_spacing_ms,
    );
    match serde_json::to_string(&InitialFrame::new(history)) {
        Ok(payload) => {
            if tx.send(Message::Text(payload.into())).await.is_err() {
                state.registry.remove(&conn_id);
                info!(conn_id = %conn_id, "subscriber closed during backfill");
                return;
            }
        }
        Err(e) => {
            error!(conn_id = %conn_id, error = %e, "backfill serialization failed");
            state.registry.remove(&conn_id);
            return;
        }
    }

    loop {
        tokio::select! {
            frame = out_rx.recv() => {
                match frame {
                    Some(payload) => {
                        if tx.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    // Sender gone: the engine evicted us from the registry.
                    None => break,
                }
            }

            msg = rx.next() => {
                match msg {
                    // Client chatter (optional pings etc.) carries no semantics.
                    Some(Ok(Message::Text(_))) | Some(Ok(Message::Binary(_))) => {}
                    Some(Ok(Message::Ping(data))) => {
                        let _ = tx.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
        }
    }

    state.registry.remove(&conn_id);
    info!(conn_id = %conn_id, "subscriber connection closed");
}
