//! Ticket record parsed from one query row.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::title_date::extract_date_from_title;
use crate::error::MonitorError;
use crate::persistence::models::TicketRow;

/// One helpdesk ticket as seen by the monitor.
///
/// Built once per row per refresh cycle and discarded when the cycle's
/// snapshot is replaced. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Ticket {
    /// Unique ticket identifier from the ticket store.
    pub id: i32,
    /// Free-text ticket title.
    pub title: String,
    /// Creation date, time-of-day discarded.
    pub created_at: NaiveDate,
}

impl Ticket {
    /// Builds a ticket from a raw query row.
    ///
    /// The `CREATED` column arrives as a `yyyy-MM-dd HH:mm:ss` string;
    /// only the leading date token is kept.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::RowParse`] when the creation timestamp does
    /// not start with a parseable `yyyy-MM-dd` date. The caller reports the
    /// row and drops it; the cycle itself proceeds.
    pub fn from_row(row: TicketRow) -> Result<Self, MonitorError> {
        let token = row.created.split_whitespace().next().unwrap_or("");
        let created_at =
            NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| MonitorError::RowParse {
                id: row.id,
                value: row.created.clone(),
            })?;
        Ok(Self {
            id: row.id,
            title: row.title,
            created_at,
        })
    }

    /// The calendar date embedded in this ticket's title, if any.
    ///
    /// See [`extract_date_from_title`] for the recognized patterns.
    #[must_use]
    pub fn title_date(&self) -> Option<NaiveDate> {
        extract_date_from_title(&self.title)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T#: {} ({})", self.id, self.created_at)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn row(id: i32, title: &str, created: &str) -> TicketRow {
        TicketRow {
            id,
            title: title.to_string(),
            created: created.to_string(),
        }
    }

    #[test]
    fn from_row_keeps_date_and_discards_time() {
        let ticket = Ticket::from_row(row(7, "Printer broken", "2024-03-15 09:30:00"));
        let Ok(ticket) = ticket else {
            panic!("expected parseable row");
        };
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.created_at, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default());
    }

    #[test]
    fn from_row_rejects_garbage_timestamp() {
        let result = Ticket::from_row(row(8, "Printer broken", "not-a-date"));
        assert!(matches!(result, Err(MonitorError::RowParse { id: 8, .. })));
    }

    #[test]
    fn from_row_rejects_empty_timestamp() {
        let result = Ticket::from_row(row(9, "Printer broken", ""));
        assert!(result.is_err());
    }

    #[test]
    fn title_date_delegates_to_extractor() {
        let ticket = Ticket::from_row(row(1, "[TERMINATION]: X 03/15/2024", "2024-03-15 08:00:00"));
        let Ok(ticket) = ticket else {
            panic!("expected parseable row");
        };
        assert_eq!(
            ticket.title_date(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn display_shows_id_and_date() {
        let ticket = Ticket::from_row(row(42, "Printer broken", "2024-03-15 08:00:00"));
        let Ok(ticket) = ticket else {
            panic!("expected parseable row");
        };
        assert_eq!(format!("{ticket}"), "T#: 42 (2024-03-15)");
    }
}
