//! Movie API routes. All four methods share the collection path; ids travel in the body.

use crate::handlers::movies::{create, delete, list, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn movie_routes(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(list).post(create).put(update).delete(delete))
        .with_state(state)
}
