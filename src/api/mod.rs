//! REST API layer: the read-only snapshot surface.
//!
//! The monitor publishes, it does not accept commands; the HTTP surface
//! is two GET endpoints. `/health` reports liveness, `/api/v1/snapshot`
//! serves the latest published [`QueueSnapshot`] as JSON.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::QueueSnapshot;
use crate::error::MonitorError;

/// Builds the complete API router.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/snapshot", get(snapshot_handler))
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// `GET /api/v1/snapshot` — Latest published queue snapshot.
///
/// # Errors
///
/// Returns [`MonitorError::SnapshotUnavailable`] (503) before the first
/// successful refresh cycle.
#[utoipa::path(
    get,
    path = "/api/v1/snapshot",
    tag = "Queue",
    summary = "Latest queue snapshot",
    description = "Returns the most recently published classification and statistics snapshot.",
    responses(
        (status = 200, description = "Latest snapshot", body = QueueSnapshot),
        (status = 503, description = "No refresh cycle has completed yet"),
    )
)]
pub async fn snapshot_handler(
    State(state): State<AppState>,
) -> Result<Json<QueueSnapshot>, MonitorError> {
    state
        .bus
        .latest()
        .map(Json)
        .ok_or(MonitorError::SnapshotUnavailable)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::domain::SnapshotBus;

    fn app(bus: SnapshotBus) -> Router {
        build_router().with_state(AppState { bus })
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app(SnapshotBus::new())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn snapshot_is_503_before_first_cycle() {
        let response = app(SnapshotBus::new())
            .oneshot(
                Request::builder()
                    .uri("/api/v1/snapshot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn snapshot_is_200_after_publish() {
        let bus = SnapshotBus::new();
        bus.publish(QueueSnapshot {
            arrivals: Vec::new(),
            departures: Vec::new(),
            delayed: Vec::new(),
            stats: "stats".to_string(),
            refreshed_at: Utc::now(),
        });

        let response = app(bus)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/snapshot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
