//! In-process store. Same contract as the PostgreSQL store, no persistence across restarts.

use super::MovieStore;
use crate::error::StoreError;
use crate::model::{Movie, MovieUpdate, NewMovie};
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn find_many(&self) -> Result<Vec<Movie>, StoreError> {
        let guard = self.movies.read().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    async fn create(&self, data: NewMovie) -> Result<Movie, StoreError> {
        let movie = Movie {
            id: Uuid::new_v4(),
            title: data.title,
            actors: data.actors,
            release_year: data.release_year,
        };
        let mut guard = self.movies.write().unwrap_or_else(PoisonError::into_inner);
        guard.push(movie.clone());
        Ok(movie)
    }

    async fn update(&self, data: MovieUpdate) -> Result<Movie, StoreError> {
        let mut guard = self.movies.write().unwrap_or_else(PoisonError::into_inner);
        let slot = guard
            .iter_mut()
            .find(|m| m.id == data.id)
            .ok_or(StoreError::NotFound(data.id))?;
        let title = data.title.ok_or(StoreError::NullField("title"))?;
        let actors = data.actors.ok_or(StoreError::NullField("actors"))?;
        let release_year = data.release_year.ok_or(StoreError::NullField("release_year"))?;
        slot.title = title;
        slot.actors = actors;
        slot.release_year = release_year;
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Movie, StoreError> {
        let mut guard = self.movies.write().unwrap_or_else(PoisonError::into_inner);
        let pos = guard
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(guard.remove(pos))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
