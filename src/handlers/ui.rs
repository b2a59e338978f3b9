//! Static HTML pages compiled into the binary.

use axum::response::Html;

const HOME_PAGE: &str = include_str!("../../assets/index.html");
const MOVIES_PAGE: &str = include_str!("../../assets/movies.html");

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn movies_page() -> Html<&'static str> {
    Html(MOVIES_PAGE)
}
