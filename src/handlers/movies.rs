//! Movie CRUD handlers: list, create, update, delete on one collection path.
//!
//! Bodies are taken as raw bytes and parsed here, so a malformed body fails the
//! same way a store error does.

use crate::error::{ApiError, MovieOp};
use crate::model::{MovieId, MovieUpdate, NewMovie};
use crate::response::{created, message, ok};
use crate::state::AppState;
use axum::{body::Bytes, extract::State, response::IntoResponse};
use serde::de::DeserializeOwned;

fn parse_body<T: DeserializeOwned>(op: MovieOp, body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::new(op, e))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let movies = state
        .store
        .find_many()
        .await
        .map_err(|e| ApiError::new(MovieOp::List, e))?;
    tracing::debug!(count = movies.len(), "listed movies");
    Ok(ok(movies))
}

pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let data: NewMovie = parse_body(MovieOp::Create, &body)?;
    let movie = state
        .store
        .create(data)
        .await
        .map_err(|e| ApiError::new(MovieOp::Create, e))?;
    tracing::info!(id = %movie.id, title = %movie.title, "movie created");
    Ok(created(movie))
}

pub async fn update(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let data: MovieUpdate = parse_body(MovieOp::Update, &body)?;
    let movie = state
        .store
        .update(data)
        .await
        .map_err(|e| ApiError::new(MovieOp::Update, e))?;
    tracing::info!(id = %movie.id, "movie updated");
    Ok(ok(movie))
}

pub async fn delete(State(state): State<AppState>, body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let MovieId { id } = parse_body(MovieOp::Delete, &body)?;
    state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::new(MovieOp::Delete, e))?;
    tracing::info!(id = %id, "movie deleted");
    Ok(message("Movie deleted successfully"))
}
