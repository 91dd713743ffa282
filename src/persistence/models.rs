//! Raw row shapes returned by the ticket store.

/// One raw ticket row as returned by the category queries.
///
/// `created` is the `CREATED` column rendered as a `yyyy-MM-dd HH:mm:ss`
/// string; parsing it into a calendar date happens in
/// [`crate::domain::Ticket::from_row`] so that a malformed value surfaces
/// as a reported row error instead of a failed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    /// Unique ticket identifier.
    pub id: i32,
    /// Free-text ticket title.
    pub title: String,
    /// Creation timestamp string.
    pub created: String,
}
