#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use movie_catalog::{
    app, AppState, MemoryMovieStore, Movie, MovieStore, MovieUpdate, NewMovie, ServerConfig,
    StoreError,
};
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Full router over a fresh in-memory store, same layers as the server binary.
pub fn build_test_app() -> Router {
    app(AppState::new(MemoryMovieStore::new()), &test_config())
}

/// Full router over a store whose every call fails as if the pool were exhausted.
pub fn build_failing_app() -> Router {
    app(AppState::new(FailingMovieStore), &test_config())
}

/// Full router over an in-memory store with a custom body limit.
pub fn build_test_app_with_limit(body_limit_bytes: usize) -> Router {
    let config = ServerConfig {
        body_limit_bytes,
        ..test_config()
    };
    app(AppState::new(MemoryMovieStore::new()), &config)
}

pub struct FailingMovieStore;

fn unavailable() -> StoreError {
    StoreError::Db(sqlx::Error::PoolTimedOut)
}

#[async_trait::async_trait]
impl MovieStore for FailingMovieStore {
    async fn find_many(&self) -> Result<Vec<Movie>, StoreError> {
        Err(unavailable())
    }

    async fn create(&self, _data: NewMovie) -> Result<Movie, StoreError> {
        Err(unavailable())
    }

    async fn update(&self, _data: MovieUpdate) -> Result<Movie, StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: Uuid) -> Result<Movie, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(b)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(json.to_string())).await
}

pub async fn delete_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::DELETE, uri, Some(json.to_string())).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
