//! Read-only JSON API over the `football` teams table.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::Database;

pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Football Teams API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Team endpoints
        .route("/teams", get(routes::teams::handle_get))
        .route("/teams/", get(routes::teams::handle_get))
        .route("/teams/{*path}", get(routes::teams::handle_get))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
