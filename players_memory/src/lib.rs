//! Player CRUD service over an in-memory collection.

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

pub mod models;
pub mod routes;
pub mod store;

use store::PlayerStore;

pub fn app(store: Arc<PlayerStore>) -> Router {
    Router::new()
        // Root and health
        .route("/", get(|| async { "Players API (in-memory) - v1.0" }))
        .route("/health", get(players_common::health::health_check))

        // Player endpoints
        .route(
            "/api/players",
            get(routes::players::get_players).post(routes::players::create_player),
        )
        .route(
            "/api/players/{id}",
            patch(routes::players::activate_player).delete(routes::players::delete_player),
        )
        .with_state(store)
}
