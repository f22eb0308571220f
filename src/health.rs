use axum::{extract::State, Json};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub database: &'static str,
}

/// Always answers 200; a failed probe is reported in the body, not as an
/// HTTP error.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let timestamp = OffsetDateTime::now_utc();
    match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => Json(HealthResponse {
            status: "ok",
            timestamp,
            database: "connected",
        }),
        Err(e) => {
            warn!(error = %e, "health probe failed");
            Json(HealthResponse {
                status: "error",
                timestamp,
                database: "disconnected",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn response_shape_matches_contract() {
        let response = HealthResponse {
            status: "ok",
            timestamp: datetime!(2026-01-01 00:00:00 UTC),
            database: "connected",
        };
        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value["status"], "ok");
        assert_eq!(value["database"], "connected");
        assert_eq!(value["timestamp"], "2026-01-01T00:00:00Z");
    }
}
