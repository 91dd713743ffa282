//! Shared application state injected into all Axum handlers.

use crate::domain::SnapshotBus;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest-snapshot bus fed by the refresh scheduler.
    pub bus: SnapshotBus,
}
