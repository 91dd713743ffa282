//! MySQL implementation of the ticket store.
//!
//! Queries the KACE helpdesk schema (`HD_TICKET` joined to `HD_STATUS`).
//! The `CREATED` column is rendered server-side as a string so that date
//! parsing stays a per-row concern of the domain layer. All predicates are
//! parameterized; in particular the delayed-query cutoff is bound rather
//! than interpolated, keeping the logical predicate (one-day cutoff,
//! category exclusions 43/42/53) unchanged.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

use super::TicketSource;
use super::models::TicketRow;
use crate::config::MonitorConfig;
use crate::error::MonitorError;

/// MySQL-backed ticket store using `sqlx::MySqlPool`.
#[derive(Debug, Clone)]
pub struct MySqlTicketStore {
    pool: MySqlPool,
    queue_id: u32,
}

impl MySqlTicketStore {
    /// Creates a store around an existing connection pool.
    #[must_use]
    pub fn new(pool: MySqlPool, queue_id: u32) -> Self {
        Self { pool, queue_id }
    }

    /// Connects to the database described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Query`] when the pool cannot be established.
    pub async fn connect(config: &MonitorConfig) -> Result<Self, MonitorError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| MonitorError::Query(e.to_string()))?;
        Ok(Self::new(pool, config.queue_id))
    }

    async fn fetch_tickets(&self, sql: &str, cutoff: Option<&str>) -> Result<Vec<TicketRow>, MonitorError> {
        let mut query = sqlx::query_as::<_, (i32, String, String)>(sql).bind(self.queue_id);
        if let Some(cutoff) = cutoff {
            query = query.bind(cutoff);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| MonitorError::Query(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, title, created)| TicketRow { id, title, created })
            .collect())
    }
}

#[async_trait]
impl TicketSource for MySqlTicketStore {
    async fn arrivals(&self) -> Result<Vec<TicketRow>, MonitorError> {
        self.fetch_tickets(
            "SELECT HD_TICKET.ID, HD_TICKET.TITLE, \
             DATE_FORMAT(HD_TICKET.CREATED, '%Y-%m-%d %H:%i:%s') AS CREATED \
             FROM HD_TICKET \
             LEFT JOIN HD_STATUS ON HD_TICKET.HD_STATUS_ID = HD_STATUS.ID \
             WHERE HD_TICKET.HD_QUEUE_ID = ? \
             AND HD_STATUS.STATE = 'opened' \
             AND HD_TICKET.TITLE LIKE '[NEW STARTER]%' \
             AND HD_TICKET.HD_STATUS_ID = 4 \
             ORDER BY HD_TICKET.ID ASC",
            None,
        )
        .await
    }

    async fn departures(&self) -> Result<Vec<TicketRow>, MonitorError> {
        self.fetch_tickets(
            "SELECT HD_TICKET.ID, HD_TICKET.TITLE, \
             DATE_FORMAT(HD_TICKET.CREATED, '%Y-%m-%d %H:%i:%s') AS CREATED \
             FROM HD_TICKET \
             LEFT JOIN HD_STATUS ON HD_TICKET.HD_STATUS_ID = HD_STATUS.ID \
             WHERE HD_TICKET.HD_QUEUE_ID = ? \
             AND HD_STATUS.STATE = 'opened' \
             AND (HD_TICKET.TITLE LIKE '[TERMINATION]%' \
             OR HD_TICKET.TITLE LIKE 'New Term Notice%') \
             AND HD_TICKET.HD_STATUS_ID = 4 \
             ORDER BY HD_TICKET.CREATED ASC",
            None,
        )
        .await
    }

    async fn delayed(&self, cutoff: &str) -> Result<Vec<TicketRow>, MonitorError> {
        self.fetch_tickets(
            "SELECT HD_TICKET.ID, HD_TICKET.TITLE, \
             DATE_FORMAT(HD_TICKET.CREATED, '%Y-%m-%d %H:%i:%s') AS CREATED \
             FROM HD_TICKET \
             LEFT JOIN HD_STATUS ON HD_TICKET.HD_STATUS_ID = HD_STATUS.ID \
             WHERE HD_TICKET.HD_QUEUE_ID = ? \
             AND HD_TICKET.HD_CATEGORY_ID NOT IN (43, 42, 53) \
             AND HD_STATUS.STATE = 'opened' \
             AND HD_TICKET.OWNER_ID = 0 \
             AND HD_TICKET.TITLE NOT LIKE '[NEW STARTER]%' \
             AND HD_TICKET.TITLE NOT LIKE '[TERMINATION]%' \
             AND HD_TICKET.TITLE NOT LIKE 'New Term Notice%' \
             AND HD_TICKET.CREATED < ? \
             ORDER BY HD_TICKET.CREATED ASC",
            Some(cutoff),
        )
        .await
    }

    async fn avg_close_time(&self, days: u32) -> Result<Option<String>, MonitorError> {
        let (average,) = sqlx::query_as::<_, (Option<String>,)>(
            "SELECT TIME_FORMAT(SEC_TO_TIME(AVG(UNIX_TIMESTAMP(HD_TICKET.TIME_CLOSED) \
             - UNIX_TIMESTAMP(HD_TICKET.CREATED))), '%Hh %im %ss') AS AVERAGE_TIME \
             FROM HD_TICKET \
             LEFT JOIN HD_STATUS ON HD_TICKET.HD_STATUS_ID = HD_STATUS.ID \
             WHERE HD_TICKET.HD_QUEUE_ID = ? \
             AND HD_TICKET.TIME_CLOSED != '0000-00-00 00:00:00' \
             AND HD_TICKET.TIME_OPENED != '0000-00-00 00:00:00' \
             AND HD_TICKET.CREATED > DATE_SUB(NOW(), INTERVAL ? DAY)",
        )
        .bind(self.queue_id)
        .bind(days)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MonitorError::Query(e.to_string()))?;

        Ok(average)
    }

    async fn unassigned_count(&self) -> Result<i64, MonitorError> {
        let (count,) = sqlx::query_as::<_, (i64,)>(
            "SELECT COUNT(HD_TICKET.ID) AS count \
             FROM HD_TICKET \
             LEFT JOIN HD_STATUS ON HD_TICKET.HD_STATUS_ID = HD_STATUS.ID \
             WHERE HD_TICKET.HD_QUEUE_ID = ? \
             AND HD_TICKET.OWNER_ID = 0",
        )
        .bind(self.queue_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MonitorError::Query(e.to_string()))?;

        Ok(count)
    }

    async fn open_count(&self) -> Result<i64, MonitorError> {
        let (count,) = sqlx::query_as::<_, (i64,)>(
            "SELECT COUNT(HD_TICKET.TITLE) AS count \
             FROM HD_TICKET \
             LEFT JOIN HD_STATUS ON HD_TICKET.HD_STATUS_ID = HD_STATUS.ID \
             WHERE HD_TICKET.HD_QUEUE_ID = ? \
             AND (HD_STATUS.STATE = 'opened' OR HD_STATUS.STATE = 'stalled')",
        )
        .bind(self.queue_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MonitorError::Query(e.to_string()))?;

        Ok(count)
    }
}
