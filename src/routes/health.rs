use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use crate::db::Database;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    database: String,
    timestamp: i64,
}

pub async fn health_check(State(db): State<Database>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, database) = match db.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    let response = HealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (code, Json(response))
}
