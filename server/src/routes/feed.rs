//! Change feed websocket.
//!
//! LIFECYCLE
//! =========
//! 1. `GET /api/feed?table=guest_messages` → validate table → upgrade
//! 2. Each change on that table → one JSON `ChangeEvent` text frame
//! 3. Client close (or a failed send) → drop the subscription
//!
//! The feed is one-way. Anything the client sends besides close is ignored.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, info};
use wire::{Table, encode_event};

use crate::feed::Subscription;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FeedParams {
    pub table: Option<String>,
}

/// `GET /api/feed?table=…`: subscribe to changes on one table.
pub async fn handle_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
    ws: WebSocketUpgrade,
) -> Response {
    let table = match parse_table(params.table.as_deref()) {
        Ok(table) => table,
        Err(reason) => return (StatusCode::BAD_REQUEST, reason).into_response(),
    };

    // Subscribe before the upgrade completes so no change is missed between
    // the client's initial fetch and the socket opening.
    let sub = state.feed.subscribe(table);
    ws.on_upgrade(move |socket| run_feed(socket, sub))
}

fn parse_table(raw: Option<&str>) -> Result<Table, String> {
    let Some(raw) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Err("table required".into());
    };
    raw.parse::<Table>().map_err(|e| e.to_string())
}

async fn run_feed(mut socket: WebSocket, mut sub: Subscription) {
    let table = sub.table();
    info!(%table, "feed: subscriber connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
            event = sub.next() => {
                let Some(event) = event else { break };
                if socket.send(Message::Text(encode_event(&event).into())).await.is_err() {
                    debug!(%table, "feed: send failed");
                    break;
                }
            }
        }
    }

    info!(%table, "feed: subscriber disconnected");
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
