//! Service layer: refresh orchestration.
//!
//! [`RefreshScheduler`] drives the periodic query → classify → publish
//! cycle over the [`crate::persistence::TicketSource`] contract.

pub mod refresh;

pub use refresh::RefreshScheduler;
