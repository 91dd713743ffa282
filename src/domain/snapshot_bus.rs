//! Latest-value channel for published snapshots.
//!
//! [`SnapshotBus`] wraps a [`tokio::sync::watch`] channel. The refresh
//! scheduler publishes each completed [`QueueSnapshot`] through the bus;
//! the HTTP layer reads the latest value and long-lived consumers can
//! subscribe for change notifications. A failed cycle publishes nothing,
//! so the previous snapshot stays visible unchanged.

use tokio::sync::watch;

use super::QueueSnapshot;

/// Shared handle to the most recently published snapshot.
///
/// Starts out empty; [`SnapshotBus::latest`] returns `None` until the
/// first successful refresh cycle completes.
#[derive(Debug, Clone)]
pub struct SnapshotBus {
    sender: watch::Sender<Option<QueueSnapshot>>,
}

impl SnapshotBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Publishes a snapshot, replacing the previous one atomically.
    ///
    /// Succeeds even when no receiver is currently subscribed.
    pub fn publish(&self, snapshot: QueueSnapshot) {
        let _previous = self.sender.send_replace(Some(snapshot));
    }

    /// Returns a clone of the latest published snapshot, if any.
    #[must_use]
    pub fn latest(&self) -> Option<QueueSnapshot> {
        self.sender.borrow().clone()
    }

    /// Creates a receiver notified on every publish.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<QueueSnapshot>> {
        self.sender.subscribe()
    }
}

impl Default for SnapshotBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_snapshot(open: i64) -> QueueSnapshot {
        QueueSnapshot {
            arrivals: Vec::new(),
            departures: Vec::new(),
            delayed: Vec::new(),
            stats: format!("open: {open}"),
            refreshed_at: Utc::now(),
        }
    }

    #[test]
    fn starts_empty() {
        let bus = SnapshotBus::new();
        assert!(bus.latest().is_none());
    }

    #[test]
    fn publish_without_receivers_still_updates_latest() {
        let bus = SnapshotBus::new();
        bus.publish(make_snapshot(1));
        let Some(snapshot) = bus.latest() else {
            panic!("expected a snapshot");
        };
        assert_eq!(snapshot.stats, "open: 1");
    }

    #[test]
    fn publish_replaces_previous_snapshot() {
        let bus = SnapshotBus::new();
        bus.publish(make_snapshot(1));
        bus.publish(make_snapshot(2));
        let Some(snapshot) = bus.latest() else {
            panic!("expected a snapshot");
        };
        assert_eq!(snapshot.stats, "open: 2");
    }

    #[tokio::test]
    async fn subscriber_sees_new_snapshot() {
        let bus = SnapshotBus::new();
        let mut rx = bus.subscribe();

        bus.publish(make_snapshot(7));
        let Ok(()) = rx.changed().await else {
            panic!("sender dropped");
        };
        let seen = rx.borrow().clone();
        let Some(snapshot) = seen else {
            panic!("expected a snapshot");
        };
        assert_eq!(snapshot.stats, "open: 7");
    }

    #[test]
    fn clones_share_the_same_channel() {
        let bus = SnapshotBus::new();
        let other = bus.clone();
        bus.publish(make_snapshot(3));
        assert!(other.latest().is_some());
    }
}
