//! Response helpers: bare JSON bodies with a fixed status, and plain-text messages.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn message(text: &'static str) -> (StatusCode, &'static str) {
    (StatusCode::OK, text)
}
