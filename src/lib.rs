//! # queue-watch
//!
//! Helpdesk queue monitor for a KACE-style ticketing database. A single
//! background task periodically re-queries the ticket store, classifies
//! open tickets into three operational categories (arrivals, departures,
//! delayed), renders a rolling statistics text, and republishes everything
//! as one atomic snapshot.
//!
//! ## Architecture
//!
//! ```text
//! Timer (fixed delay)
//!     │
//!     ├── RefreshScheduler (service/)
//!     │       │
//!     │       ├── TicketSource — 7 reads (persistence/)
//!     │       ├── Classifier + title dates (domain/)
//!     │       │
//!     │       ├── QueueDisplay (display)
//!     │       └── SnapshotBus (domain/)
//!     │
//!     └── HTTP snapshot surface (api/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
