//! Table change feed.
//!
//! DESIGN
//! ======
//! One `tokio::sync::broadcast` channel carries every change event; each
//! [`Subscription`] filters it down to a single table. Events carry no row
//! payload, so subscribers reload the whole table on any event.
//!
//! A subscriber that falls behind the channel capacity receives one synthetic
//! `refresh` event instead of the dropped ones. Since every event already
//! means "reload", nothing is lost by collapsing them.
//!
//! Dropping a `Subscription` drops its receiver, which is the whole release
//! protocol: the websocket route owns exactly one per connection.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};
use uuid::Uuid;
use wire::{ChangeEvent, ChangeOp, Table};

use crate::state::now_ms;

const DEFAULT_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct ChangeFeed {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a change. Returns how many subscribers (of any table) saw it.
    pub fn publish(&self, table: Table, op: ChangeOp, id: Option<Uuid>) -> usize {
        let event = ChangeEvent::new(table, op, id, now_ms());
        // No receivers is not an error: nobody has a panel open.
        let delivered = self.tx.send(event).unwrap_or(0);
        debug!(%table, ?op, delivered, "feed: published");
        delivered
    }

    /// Subscribe to changes on one table.
    #[must_use]
    pub fn subscribe(&self, table: Table) -> Subscription {
        Subscription { table, rx: self.tx.subscribe() }
    }

    /// Number of live subscriptions across all tables.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-table view of the change feed.
pub struct Subscription {
    table: Table,
    rx: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    #[must_use]
    pub fn table(&self) -> Table {
        self.table
    }

    /// Wait for the next event on this subscription's table.
    ///
    /// Returns `None` once the feed itself has been dropped.
    pub async fn next(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if event.table == self.table => return Some(event),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(table = %self.table, skipped, "feed: subscriber lagged, forcing refresh");
                    return Some(ChangeEvent::refresh(self.table, now_ms()));
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
