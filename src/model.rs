//! Movie record and request payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the `movies` table as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub actors: Vec<String>,
    pub release_year: i32,
}

/// POST body: a movie without its id. An `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub actors: Vec<String>,
    pub release_year: i32,
}

/// PUT body. The three fields overwrite the stored record as given; a missing
/// field is written as NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdate {
    pub id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub actors: Option<Vec<String>>,
    #[serde(default)]
    pub release_year: Option<i32>,
}

/// DELETE body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieId {
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn movie_serializes_release_year_in_camel_case() {
        let movie = Movie {
            id: Uuid::nil(),
            title: "Heat".into(),
            actors: vec!["Al Pacino".into(), "Robert De Niro".into()],
            release_year: 1995,
        };
        let v = serde_json::to_value(&movie).unwrap();
        assert_eq!(v["releaseYear"], 1995);
        assert_eq!(v["actors"], json!(["Al Pacino", "Robert De Niro"]));
        assert!(v.get("release_year").is_none());
    }

    #[test]
    fn new_movie_ignores_client_id() {
        let body = json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "title": "X",
            "actors": ["A"],
            "releaseYear": 2001
        });
        let new: NewMovie = serde_json::from_value(body).unwrap();
        assert_eq!(new.title, "X");
        assert_eq!(new.release_year, 2001);
    }

    #[test]
    fn update_keeps_omitted_fields_as_none() {
        let body = json!({ "id": Uuid::nil(), "title": "Only title" });
        let update: MovieUpdate = serde_json::from_value(body).unwrap();
        assert_eq!(update.title.as_deref(), Some("Only title"));
        assert!(update.actors.is_none());
        assert!(update.release_year.is_none());
    }

    #[test]
    fn update_requires_id() {
        let body = json!({ "title": "t", "actors": [], "releaseYear": 1 });
        assert!(serde_json::from_value::<MovieUpdate>(body).is_err());
    }
}
