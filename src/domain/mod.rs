//! Domain layer: tickets, classification rules, and snapshots.
//!
//! This module contains the monitor's core model: the [`Ticket`] record,
//! title-embedded date extraction, the category classification rules, and
//! the [`QueueSnapshot`] publish unit with its latest-value bus.

pub mod classify;
pub mod snapshot;
pub mod snapshot_bus;
pub mod ticket;
pub mod title_date;

pub use snapshot::{QueueSnapshot, QueueStats};
pub use snapshot_bus::SnapshotBus;
pub use ticket::Ticket;
pub use title_date::extract_date_from_title;
