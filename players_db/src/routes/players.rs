use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use players_common::error::{ApiError, MessageResponse};
use sqlx::sqlite::SqlitePool;
use crate::models::{NewPlayer, Player, UpdatePlayer};
use crate::db;

fn player_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::Validation("Invalid player id"))
}

/// Decode failures get their own message so a broken row is distinguishable
/// from a broken query.
pub(crate) fn list_error(err: &sqlx::Error) -> ApiError {
    match err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::Decode(_) => ApiError::storage("Failed to scan player"),
        _ => ApiError::storage("Failed to fetch players"),
    }
}

// GET /api/players - List all players
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::get_all_players(&pool).await.map_err(|err| {
        tracing::error!(error = %err, "failed to list players");
        list_error(&err)
    })?;

    Ok(Json(players))
}

// POST /api/players - Create a player
pub async fn create_player(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewPlayer>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let Json(player) = payload.map_err(|err| {
        tracing::debug!(error = %err, "rejected player body");
        ApiError::Validation("Invalid input")
    })?;

    player.validate().map_err(ApiError::Validation)?;

    let id = db::insert_player(&pool, &player).await.map_err(|err| {
        tracing::error!(error = %err, "failed to insert player");
        ApiError::storage("Failed to create player")
    })?;

    tracing::info!(player_id = id, "player created");

    Ok((StatusCode::CREATED, Json(player.into_player(id))))
}

// PATCH /api/players/:id - Update only the supplied fields
pub async fn update_player(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdatePlayer>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let player_id = player_id(path)?;
    let Json(update) = payload.map_err(|err| {
        tracing::debug!(error = %err, "rejected update body");
        ApiError::Validation("Invalid input")
    })?;

    let changes = update.changes();
    if changes.is_empty() {
        return Err(ApiError::Validation("No fields to update"));
    }

    let columns: Vec<&str> = changes.iter().map(|(column, _)| column.as_str()).collect();
    tracing::debug!(player_id, ?columns, "updating player");

    let rows = db::update_player(&pool, player_id, changes)
        .await
        .map_err(|err| {
            tracing::error!(player_id, error = %err, "failed to update player");
            ApiError::storage_with_details("Failed to update player", err)
        })?;

    tracing::info!(player_id, rows, "player updated");

    Ok(MessageResponse::new("Player updated successfully"))
}

// DELETE /api/players/:id - Delete a player
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let player_id = player_id(path)?;

    let rows = db::delete_player(&pool, player_id).await.map_err(|err| {
        tracing::error!(player_id, error = %err, "failed to delete player");
        ApiError::storage("Failed to delete player")
    })?;

    tracing::info!(player_id, rows, "player deleted");

    Ok(MessageResponse::new("Player deleted successfully"))
}
