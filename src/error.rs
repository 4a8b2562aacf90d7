use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Path not recognized: {url}")]
    PathNotRecognized { url: String },
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct PathErrorResponse<'a> {
    error: &'static str,
    url: &'a str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::PathNotRecognized { url } => {
                tracing::warn!("Path not recognized: {}", url);
                let body = Json(PathErrorResponse {
                    error: "Path not recognized",
                    url: &url,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {}", err);
                let body = Json(ErrorResponse {
                    error: true,
                    message: err.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Anything that stops the server from coming up or shutting down cleanly.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
