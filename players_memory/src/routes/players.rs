use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use players_common::error::{ApiError, MessageResponse};
use crate::models::{NewPlayer, Player};
use crate::store::PlayerStore;

fn player_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::Validation("Invalid player id"))
}

// GET /api/players - List all players
pub async fn get_players(State(store): State<Arc<PlayerStore>>) -> Json<Vec<Player>> {
    Json(store.list())
}

// POST /api/players - Create a player
pub async fn create_player(
    State(store): State<Arc<PlayerStore>>,
    payload: Result<Json<NewPlayer>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let Json(new) = payload.map_err(|err| {
        tracing::debug!(error = %err, "rejected player body");
        ApiError::Validation("Invalid input")
    })?;

    new.validate().map_err(ApiError::Validation)?;

    let player = store.insert(new);
    tracing::info!(player_id = player.id, "player created");

    Ok((StatusCode::CREATED, Json(player)))
}

// PATCH /api/players/:id - Mark a player active
pub async fn activate_player(
    State(store): State<Arc<PlayerStore>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let player_id = player_id(path)?;

    let player = store
        .activate(player_id)
        .ok_or(ApiError::NotFound("Player not found"))?;

    tracing::info!(player_id, "player activated");

    Ok(Json(player))
}

// DELETE /api/players/:id - Delete a player
pub async fn delete_player(
    State(store): State<Arc<PlayerStore>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let player_id = player_id(path)?;

    if !store.remove(player_id) {
        return Err(ApiError::NotFound("Player not found"));
    }

    tracing::info!(player_id, "player deleted");

    Ok(MessageResponse::new("Player deleted successfully"))
}
