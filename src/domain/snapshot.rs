//! Queue snapshot: the atomic publish unit of one refresh cycle.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::ticket::Ticket;

/// Placeholder shown when an average-close aggregate has no rows.
pub const NO_AVERAGE: &str = "n/a";

/// Rolling queue statistics, rebuilt fully every cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QueueStats {
    /// Mean close duration over the last 7 days, formatted `HHh MMm SSs`.
    pub avg_close_7d: String,
    /// Mean close duration over the last 30 days, formatted `HHh MMm SSs`.
    pub avg_close_30d: String,
    /// Number of unassigned tickets in the queue.
    pub unassigned: i64,
    /// Number of open or stalled tickets in the queue.
    pub open: i64,
}

impl QueueStats {
    /// Assembles statistics from the raw aggregate results.
    ///
    /// An average computed over zero closed tickets comes back as `None`
    /// from the store and is rendered as [`NO_AVERAGE`].
    #[must_use]
    pub fn new(
        avg_close_7d: Option<String>,
        avg_close_30d: Option<String>,
        unassigned: i64,
        open: i64,
    ) -> Self {
        Self {
            avg_close_7d: avg_close_7d.unwrap_or_else(|| NO_AVERAGE.to_string()),
            avg_close_30d: avg_close_30d.unwrap_or_else(|| NO_AVERAGE.to_string()),
            unassigned,
            open,
        }
    }

    /// Renders the four-line statistics text, fixed order and wording.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "Average closing time (last 7 days): {}\n\
             Average closing time (last 30 days): {}\n\
             Number of unassigned tickets in queue: {}\n\
             Number of open tickets in queue: {}",
            self.avg_close_7d, self.avg_close_30d, self.unassigned, self.open
        )
    }
}

/// Result of one complete refresh cycle.
///
/// All fields are produced from queries issued against the same logical
/// `now`, so the three lists and the statistics text are always mutually
/// consistent. Published as one value; never updated piecewise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QueueSnapshot {
    /// New-starter tickets, ascending id.
    pub arrivals: Vec<Ticket>,
    /// Termination tickets due today, ascending creation date.
    pub departures: Vec<Ticket>,
    /// Unassigned tickets older than the one-day cutoff.
    pub delayed: Vec<Ticket>,
    /// Rendered statistics text (see [`QueueStats::render`]).
    pub stats: String,
    /// Wall-clock instant the cycle completed.
    pub refreshed_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn render_matches_the_published_wording_exactly() {
        let stats = QueueStats::new(
            Some("02h 30m 00s".to_string()),
            Some("05h 00m 00s".to_string()),
            4,
            10,
        );
        assert_eq!(
            stats.render(),
            "Average closing time (last 7 days): 02h 30m 00s\n\
             Average closing time (last 30 days): 05h 00m 00s\n\
             Number of unassigned tickets in queue: 4\n\
             Number of open tickets in queue: 10"
        );
    }

    #[test]
    fn missing_averages_render_as_placeholder() {
        let stats = QueueStats::new(None, None, 0, 0);
        assert!(stats.render().contains("(last 7 days): n/a"));
        assert!(stats.render().contains("(last 30 days): n/a"));
    }

    #[test]
    fn render_has_exactly_four_lines() {
        let stats = QueueStats::new(None, None, 1, 2);
        assert_eq!(stats.render().lines().count(), 4);
    }

    #[test]
    fn snapshot_serializes_for_the_http_surface() {
        let snapshot = QueueSnapshot {
            arrivals: Vec::new(),
            departures: Vec::new(),
            delayed: Vec::new(),
            stats: "s".to_string(),
            refreshed_at: Utc::now(),
        };
        let Ok(json) = serde_json::to_value(&snapshot) else {
            panic!("snapshot must serialize");
        };
        assert_eq!(json.get("stats").and_then(|v| v.as_str()), Some("s"));
        assert!(json.get("refreshed_at").is_some());
    }
}
