//! Persistence layer: the ticket store contract and its MySQL implementation.
//!
//! Provides the [`TicketSource`] trait for the seven fixed read queries the
//! refresh cycle issues. The concrete implementation uses `sqlx::MySqlPool`
//! against a KACE-style helpdesk schema.

pub mod models;
pub mod mysql;

use async_trait::async_trait;

use crate::error::MonitorError;
use models::TicketRow;

/// Read-only query contract consumed by the refresh scheduler.
///
/// All methods are independent reads; the scheduler issues them
/// concurrently within one cycle and aborts the cycle if any fails.
#[async_trait]
pub trait TicketSource: std::fmt::Debug + Send + Sync {
    /// Open new-starter tickets in the queue, ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Query`] on store failure.
    async fn arrivals(&self) -> Result<Vec<TicketRow>, MonitorError>;

    /// Open termination tickets in the queue, ascending creation date.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Query`] on store failure.
    async fn departures(&self) -> Result<Vec<TicketRow>, MonitorError>;

    /// Open unassigned tickets created before `cutoff` (a `yyyyMMdd`
    /// string), excluding the arrival/departure title prefixes and the
    /// exempt categories, ascending creation date.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Query`] on store failure.
    async fn delayed(&self, cutoff: &str) -> Result<Vec<TicketRow>, MonitorError>;

    /// Mean close duration over tickets created in the last `days` days,
    /// formatted `HHh MMm SSs`. `None` when no ticket qualifies.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Query`] on store failure.
    async fn avg_close_time(&self, days: u32) -> Result<Option<String>, MonitorError>;

    /// Number of unassigned tickets in the queue.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Query`] on store failure.
    async fn unassigned_count(&self) -> Result<i64, MonitorError>;

    /// Number of open or stalled tickets in the queue.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Query`] on store failure.
    async fn open_count(&self) -> Result<i64, MonitorError>;
}
