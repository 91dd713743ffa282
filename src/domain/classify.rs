//! Category post-processing for the three ticket queries.
//!
//! Each category query returns raw rows; the functions here turn them into
//! [`Ticket`] lists. Rows with an unparseable creation date are reported
//! and skipped without failing the cycle. Only the departures list applies
//! a client-side filter: a departure is shown on the day it happens, so a
//! row survives only when its title-embedded date is the cycle's `now`.

use chrono::{Datelike, NaiveDate};

use super::ticket::Ticket;
use crate::persistence::models::TicketRow;

/// Builds the arrivals list: every parseable row, input order preserved.
#[must_use]
pub fn arrivals(rows: Vec<TicketRow>) -> Vec<Ticket> {
    build(rows)
}

/// Builds the departures list, keeping only tickets whose title-embedded
/// date falls on the same calendar day as `now`.
///
/// Rows without an extractable title date, or with a date on a different
/// day, are dropped silently. That is an intentional filter, not an error.
#[must_use]
pub fn departures(rows: Vec<TicketRow>, now: NaiveDate) -> Vec<Ticket> {
    build(rows)
        .into_iter()
        .filter(|ticket| ticket.title_date().is_some_and(|date| same_day(date, now)))
        .collect()
}

/// Builds the delayed list: every parseable row, unfiltered.
///
/// The one-day cutoff is enforced by the query predicate, not here.
#[must_use]
pub fn delayed(rows: Vec<TicketRow>) -> Vec<Ticket> {
    build(rows)
}

/// Exact same-calendar-day comparison: (year, day-of-year), no tolerance.
#[must_use]
pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

fn build(rows: Vec<TicketRow>) -> Vec<Ticket> {
    rows.into_iter()
        .filter_map(|row| match Ticket::from_row(row) {
            Ok(ticket) => Some(ticket),
            Err(err) => {
                tracing::warn!(%err, "dropping unparseable ticket row");
                None
            }
        })
        .collect()
}
