//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidVar { var: &'static str, value: String },
    #[error("unknown store backend: '{0}' (expected 'postgres' or 'memory')")]
    UnknownStore(String),
}

/// Failures raised by a [`crate::store::MovieStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("movie not found: {0}")]
    NotFound(Uuid),
    #[error("null value in non-nullable field '{0}'")]
    NullField(&'static str),
}

/// The API operation a failure belongs to. Selects the fixed text sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieOp {
    List,
    Create,
    Update,
    Delete,
}

impl MovieOp {
    pub fn failure_message(self) -> &'static str {
        match self {
            MovieOp::List => "Error fetching movies",
            MovieOp::Create => "Error adding movie",
            MovieOp::Update => "Error updating movie",
            MovieOp::Delete => "Error deleting movie",
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiErrorKind {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("request body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Handler failure. Every kind collapses to 500 with the operation's fixed message;
/// the detail only goes to the log.
#[derive(Error, Debug)]
#[error("{}: {}", .op.failure_message(), .kind)]
pub struct ApiError {
    pub op: MovieOp,
    #[source]
    pub kind: ApiErrorKind,
}

impl ApiError {
    pub fn new(op: MovieOp, kind: impl Into<ApiErrorKind>) -> Self {
        Self { op, kind: kind.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(op = ?self.op, error = %self.kind, "{}", self.op.failure_message());
        (StatusCode::INTERNAL_SERVER_ERROR, self.op.failure_message()).into_response()
    }
}
