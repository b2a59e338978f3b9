//! Movie catalog: REST API over a `movies` table plus a single-page UI.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreBackend};
pub use error::{ApiError, ConfigError, MovieOp, StoreError};
pub use model::{Movie, MovieId, MovieUpdate, NewMovie};
pub use routes::{app, common_routes, movie_routes, ui_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_movies_table, MemoryMovieStore, MovieStore, PgMovieStore};
