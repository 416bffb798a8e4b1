//! Cache revalidation signalling
//!
//! After a successful mutation the owning action publishes the
//! dashboard path whose cached rendering must be discarded. The bus
//! uses `tokio::sync::broadcast` to decouple mutations from whatever
//! rendering layer subscribes; publishing is fire-and-forget, so a
//! deployment with no render cache loses nothing.
//!
//! # Usage
//!
//! ```rust,ignore
//! let bus = RevalidationBus::new(64);
//! let mut rx = bus.subscribe();
//!
//! bus.revalidate_path("/dashboard/invoices");
//!
//! if let Ok(event) = rx.recv().await {
//!     cache.discard(&event.path);
//! }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Notice that a path's cached rendering is stale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revalidation {
    /// The dashboard path to discard, e.g. `/dashboard/invoices`
    pub path: String,
}

/// Broadcast bus for revalidation notices
#[derive(Clone)]
pub struct RevalidationBus {
    sender: broadcast::Sender<Revalidation>,
}

impl RevalidationBus {
    /// Create a bus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to revalidation notices
    pub fn subscribe(&self) -> broadcast::Receiver<Revalidation> {
        self.sender.subscribe()
    }

    /// Publish a revalidation for the given path (non-blocking,
    /// fire-and-forget)
    pub fn revalidate_path(&self, path: &str) {
        let event = Revalidation {
            path: path.to_string(),
        };

        match self.sender.send(event) {
            Ok(subscribers) => {
                tracing::debug!(path, subscribers, "published revalidation");
            }
            Err(_) => {
                tracing::trace!(path, "no revalidation subscribers");
            }
        }
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for RevalidationBus {
    fn default() -> Self {
        Self::new(64)
    }
}
