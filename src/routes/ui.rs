//! UI pages.

use crate::handlers::ui::{home, movies_page};
use axum::{routing::get, Router};

pub fn ui_routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/movies", get(movies_page))
}
