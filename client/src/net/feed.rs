//! Change-feed subscription for the guest panels.
//!
//! `subscribe` opens `/api/feed?table=...` and calls `on_change` for every
//! event on that table. After a dropped connection it reconnects with
//! exponential backoff and, once reconnected, reports a synthetic refresh so
//! the panel reloads whatever it missed.
//!
//! The returned [`FeedHandle`] owns the subscription. Dropping it (or calling
//! [`FeedHandle::close`]) stops the loop and closes the socket; panels hand it
//! to `on_cleanup` so unmounting tears the feed down.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use wire::{ChangeEvent, Table};

pub const INITIAL_BACKOFF_MS: u32 = 1000;
pub const MAX_BACKOFF_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
fn next_backoff(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// Websocket URL for `table`, derived from the page location.
#[cfg(any(test, feature = "hydrate"))]
fn feed_url(href: &str, host: &str, table: Table) -> String {
    let proto = if href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{host}/api/feed?table={}", table.as_str())
}

/// Decode one text frame, keeping only events for `table`.
#[cfg(any(test, feature = "hydrate"))]
fn accept_event(text: &str, table: Table) -> Option<ChangeEvent> {
    wire::decode_event(text).ok().filter(|e| e.table == table)
}

/// Live subscription. Stops when dropped.
pub struct FeedHandle {
    alive: Arc<AtomicBool>,
    #[cfg(feature = "hydrate")]
    cancel: Option<futures::channel::oneshot::Sender<()>>,
}

impl FeedHandle {
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.alive.store(false, Ordering::Relaxed);
        #[cfg(feature = "hydrate")]
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Watch `table` and call `on_change` for each event.
///
/// Outside the browser this returns an inert handle.
pub fn subscribe<F>(table: Table, on_change: F) -> FeedHandle
where
    F: Fn(ChangeEvent) + 'static,
{
    let alive = Arc::new(AtomicBool::new(true));

    #[cfg(feature = "hydrate")]
    {
        let (tx, rx) = futures::channel::oneshot::channel::<()>();
        leptos::task::spawn_local(feed_loop(table, on_change, alive.clone(), rx));
        FeedHandle { alive, cancel: Some(tx) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table, on_change);
        alive.store(false, Ordering::Relaxed);
        FeedHandle { alive }
    }
}

#[cfg(feature = "hydrate")]
async fn feed_loop<F>(table: Table, on_change: F, alive: Arc<AtomicBool>, mut cancel: futures::channel::oneshot::Receiver<()>)
where
    F: Fn(ChangeEvent) + 'static,
{
    use futures::future::{Either, select};

    let mut backoff_ms = INITIAL_BACKOFF_MS;
    let mut connected_before = false;

    while alive.load(Ordering::Relaxed) {
        let href = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let url = feed_url(&href, &host, table);

        let run = Box::pin(connect_and_run(&url, table, &on_change, &mut connected_before, &mut backoff_ms));
        match select(run, &mut cancel).await {
            Either::Left((Ok(()), _)) => leptos::logging::log!("feed {table} closed"),
            Either::Left((Err(e), _)) => leptos::logging::warn!("feed {table} error: {e}"),
            Either::Right(_) => break,
        }

        if !alive.load(Ordering::Relaxed) {
            break;
        }
        let wait = Box::pin(gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))));
        if let Either::Right(_) = select(wait, &mut cancel).await {
            break;
        }
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Read events until the socket closes.
#[cfg(feature = "hydrate")]
async fn connect_and_run<F>(
    url: &str,
    table: Table,
    on_change: &F,
    connected_before: &mut bool,
    backoff_ms: &mut u32,
) -> Result<(), String>
where
    F: Fn(ChangeEvent),
{
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (_write, mut read) = ws.split();

    if *connected_before {
        on_change(ChangeEvent::refresh(table, crate::content::countdown::now_ms()));
    }

    while let Some(msg) = read.next().await {
        *connected_before = true;
        *backoff_ms = INITIAL_BACKOFF_MS;
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(event) = accept_event(&text, table) {
                    on_change(event);
                }
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
    *connected_before = true;
    Ok(())
}
