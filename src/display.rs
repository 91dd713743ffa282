//! Display contract: the sink that receives classified queue updates.
//!
//! The refresh pipeline hands each completed snapshot to a
//! [`QueueDisplay`]. An empty panel list signals a healthy state, a
//! non-empty one an attention state; how that distinction is rendered is
//! the display's concern. The default [`LogDisplay`] writes panels through
//! the tracing pipeline, which is enough for a headless deployment where
//! the HTTP snapshot endpoint is the real wallboard.

use crate::domain::{QueueSnapshot, Ticket};

/// Sink for classified ticket lists and the statistics text.
///
/// Implementations must be cheap and non-blocking: the scheduler calls
/// them inline at the end of each cycle.
pub trait QueueDisplay: std::fmt::Debug + Send + Sync {
    /// Replaces the arrivals panel.
    fn update_arrivals(&self, tickets: &[Ticket]);

    /// Replaces the departures panel.
    fn update_departures(&self, tickets: &[Ticket]);

    /// Replaces the delayed-tickets panel.
    fn update_delays(&self, tickets: &[Ticket]);

    /// Replaces the statistics panel with the rendered four-line text.
    fn update_stats(&self, stats: &str);

    /// Applies one full snapshot: all four panels, back to back.
    fn update_all(&self, snapshot: &QueueSnapshot) {
        self.update_arrivals(&snapshot.arrivals);
        self.update_departures(&snapshot.departures);
        self.update_delays(&snapshot.delayed);
        self.update_stats(&snapshot.stats);
    }
}

/// Display that renders each panel as a structured tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDisplay;

impl QueueDisplay for LogDisplay {
    fn update_arrivals(&self, tickets: &[Ticket]) {
        log_panel("arrivals", tickets);
    }

    fn update_departures(&self, tickets: &[Ticket]) {
        log_panel("departures", tickets);
    }

    fn update_delays(&self, tickets: &[Ticket]) {
        log_panel("delayed", tickets);
    }

    fn update_stats(&self, stats: &str) {
        tracing::info!(panel = "stats", %stats, "panel updated");
    }
}

fn log_panel(panel: &str, tickets: &[Ticket]) {
    let state = if tickets.is_empty() { "healthy" } else { "attention" };
    let entries = tickets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(panel, state, count = tickets.len(), %entries, "panel updated");
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Records the order of panel updates for atomicity assertions.
    #[derive(Debug, Default)]
    struct RecordingDisplay {
        calls: Mutex<Vec<String>>,
    }

    impl QueueDisplay for RecordingDisplay {
        fn update_arrivals(&self, tickets: &[Ticket]) {
            self.record(format!("arrivals:{}", tickets.len()));
        }
        fn update_departures(&self, tickets: &[Ticket]) {
            self.record(format!("departures:{}", tickets.len()));
        }
        fn update_delays(&self, tickets: &[Ticket]) {
            self.record(format!("delayed:{}", tickets.len()));
        }
        fn update_stats(&self, stats: &str) {
            self.record(format!("stats:{stats}"));
        }
    }

    impl RecordingDisplay {
        fn record(&self, entry: String) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(entry);
            }
        }
    }

    #[test]
    fn update_all_hits_every_panel_in_order() {
        let display = RecordingDisplay::default();
        let snapshot = QueueSnapshot {
            arrivals: Vec::new(),
            departures: Vec::new(),
            delayed: Vec::new(),
            stats: "s".to_string(),
            refreshed_at: Utc::now(),
        };

        display.update_all(&snapshot);

        let Ok(calls) = display.calls.lock() else {
            panic!("poisoned lock");
        };
        assert_eq!(
            *calls,
            vec!["arrivals:0", "departures:0", "delayed:0", "stats:s"]
        );
    }
}
