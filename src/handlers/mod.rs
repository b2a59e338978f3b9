//! HTTP handlers for the movie API and the UI pages.

pub mod movies;
pub mod ui;
pub use movies::*;
