//! Player CRUD service backed by a SQLite `players` table.

use axum::{
    routing::{get, patch},
    Router,
};
use sqlx::sqlite::SqlitePool;

pub mod db;
pub mod models;
pub mod routes;

/// All routes of the service, with the pool as shared state.
pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        // Root and health
        .route("/", get(|| async { "Players API - v1.0" }))
        .route("/health", get(players_common::health::health_check))

        // Player endpoints
        .route(
            "/api/players",
            get(routes::players::get_players).post(routes::players::create_player),
        )
        .route(
            "/api/players/{id}",
            patch(routes::players::update_player).delete(routes::players::delete_player),
        )
        .with_state(pool)
}
