//! Router assembly.

mod common;
mod movies;
mod ui;

pub use common::common_routes;
pub use movies::movie_routes;
pub use ui::ui_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: UI pages, common routes and `/api/movies`, with body limit and request tracing.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(ui_routes())
        .merge(common_routes(state.clone()))
        .nest("/api", movie_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.body_limit_bytes)),
        )
}
