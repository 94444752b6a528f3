use std::time::Duration;

use futures::StreamExt;
use tokio::time::timeout;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use wire::{ChangeOp, decode_event};

use super::*;
use crate::routes::test_helpers::spawn_api;
use crate::state::test_helpers::test_app;

#[test]
fn parse_table_accepts_known_tables() {
    assert_eq!(parse_table(Some("guest_messages")).unwrap(), Table::GuestMessages);
    assert_eq!(parse_table(Some(" guest_photos ")).unwrap(), Table::GuestPhotos);
}

#[test]
fn parse_table_rejects_missing_or_unknown() {
    assert!(parse_table(None).is_err());
    assert!(parse_table(Some("")).is_err());
    assert!(parse_table(Some("users")).is_err());
}

#[tokio::test]
async fn unknown_table_is_rejected_before_upgrade() {
    let addr = spawn_api(test_app().state).await;
    let res = connect_async(format!("ws://{addr}/api/feed?table=sessions")).await;
    assert!(res.is_err());
}

#[tokio::test]
async fn subscriber_receives_only_its_table() {
    let app = test_app();
    let addr = spawn_api(app.state.clone()).await;

    let (mut ws, _) = connect_async(format!("ws://{addr}/api/feed?table=guest_messages")).await.unwrap();
    // The subscription is registered before the upgrade response is sent.
    assert_eq!(app.state.feed.subscriber_count(), 1);

    let id = uuid::Uuid::new_v4();
    app.state.feed.publish(Table::Rsvps, ChangeOp::Insert, None);
    app.state.feed.publish(Table::GuestMessages, ChangeOp::Insert, Some(id));

    let msg = timeout(Duration::from_secs(2), ws.next()).await.unwrap().unwrap().unwrap();
    let WsMessage::Text(text) = msg else { panic!("expected text frame, got {msg:?}") };
    let event = decode_event(&text).unwrap();
    assert_eq!(event.table, Table::GuestMessages);
    assert_eq!(event.op, ChangeOp::Insert);
    assert_eq!(event.id, Some(id));
}

#[tokio::test]
async fn closing_the_socket_releases_the_subscription() {
    let app = test_app();
    let addr = spawn_api(app.state.clone()).await;

    let (mut ws, _) = connect_async(format!("ws://{addr}/api/feed?table=guest_photos")).await.unwrap();
    ws.close(None).await.unwrap();
    drop(ws);

    let released = timeout(Duration::from_secs(2), async {
        while app.state.feed.subscriber_count() > 0 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
    assert!(released.is_ok());
}
