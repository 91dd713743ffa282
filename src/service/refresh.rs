//! Refresh scheduler: drives the query → classify → publish cycle.
//!
//! One background task owns the whole pipeline. Cycles run on a
//! fixed-delay timer: the delay is measured from the end of the previous
//! cycle, so two cycles can never overlap. A failed cycle publishes
//! nothing and the previously published snapshot stays visible unchanged.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Days, Local, NaiveDate, Utc};

use crate::config::MonitorConfig;
use crate::display::QueueDisplay;
use crate::domain::{SnapshotBus, classify};
use crate::domain::snapshot::{QueueSnapshot, QueueStats};
use crate::error::MonitorError;
use crate::persistence::TicketSource;

/// Drives the fixed-delay refresh pipeline.
///
/// Owns no query logic itself: the seven reads go through the
/// [`TicketSource`] contract, classification is delegated to the domain
/// layer, and results are handed to the [`QueueDisplay`] and the
/// [`SnapshotBus`] as one atomic update.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    source: Arc<dyn TicketSource>,
    display: Arc<dyn QueueDisplay>,
    bus: SnapshotBus,
    initial_delay: Duration,
    interval: Duration,
}

impl RefreshScheduler {
    /// Creates a scheduler over the given source and display.
    #[must_use]
    pub fn new(
        source: Arc<dyn TicketSource>,
        display: Arc<dyn QueueDisplay>,
        bus: SnapshotBus,
        config: &MonitorConfig,
    ) -> Self {
        Self {
            source,
            display,
            bus,
            initial_delay: config.initial_delay(),
            interval: config.interval(),
        }
    }

    /// Runs the scheduler until the task is dropped or aborted.
    ///
    /// Sleeps the initial delay, then loops forever: run one cycle, sleep
    /// the configured interval. Cycle failures are logged and retried on
    /// the next tick; nothing here is fatal to the process.
    pub async fn run(&self) {
        tokio::time::sleep(self.initial_delay).await;
        loop {
            if let Err(err) = self.run_cycle().await {
                tracing::warn!(%err, "refresh cycle aborted; previous snapshot stays published");
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Executes one complete refresh cycle.
    ///
    /// Captures `now` once, issues the seven reads concurrently, classifies
    /// with the captured `now`, and publishes one [`QueueSnapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Query`] if any of the seven queries fails;
    /// in that case nothing is published.
    pub async fn run_cycle(&self) -> Result<(), MonitorError> {
        let now = Local::now().date_naive();
        self.run_cycle_at(now).await
    }

    async fn run_cycle_at(&self, now: NaiveDate) -> Result<(), MonitorError> {
        let cutoff = delay_cutoff(now);

        let (arrival_rows, departure_rows, delayed_rows, avg_7d, avg_30d, unassigned, open) =
            tokio::try_join!(
                self.source.arrivals(),
                self.source.departures(),
                self.source.delayed(&cutoff),
                self.source.avg_close_time(7),
                self.source.avg_close_time(30),
                self.source.unassigned_count(),
                self.source.open_count(),
            )?;

        let stats = QueueStats::new(avg_7d, avg_30d, unassigned, open);
        let snapshot = QueueSnapshot {
            arrivals: classify::arrivals(arrival_rows),
            departures: classify::departures(departure_rows, now),
            delayed: classify::delayed(delayed_rows),
            stats: stats.render(),
            refreshed_at: Utc::now(),
        };

        tracing::debug!(
            arrivals = snapshot.arrivals.len(),
            departures = snapshot.departures.len(),
            delayed = snapshot.delayed.len(),
            "cycle classified"
        );

        self.display.update_all(&snapshot);
        self.bus.publish(snapshot);
        Ok(())
    }
}

/// Formats `now - 1 day` as `yyyyMMdd` for the delayed-query predicate.
fn delay_cutoff(now: NaiveDate) -> String {
    let cutoff = now.checked_sub_days(Days::new(1)).unwrap_or(now);
    cutoff.format("%Y%m%d").to_string()
}
