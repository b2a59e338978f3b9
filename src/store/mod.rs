//! Persistence for the `movies` table behind the [`MovieStore`] trait.

mod memory;
mod postgres;

pub use memory::MemoryMovieStore;
pub use postgres::{ensure_database_exists, ensure_movies_table, PgMovieStore};

use crate::error::StoreError;
use crate::model::{Movie, MovieUpdate, NewMovie};
use async_trait::async_trait;
use uuid::Uuid;

/// Data access for movies: `find_many`, `create`, `update`, `delete` over one table.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// All records, in insertion order.
    async fn find_many(&self) -> Result<Vec<Movie>, StoreError>;

    /// Insert one record; the store assigns its id.
    async fn create(&self, data: NewMovie) -> Result<Movie, StoreError>;

    /// Overwrite title, actors and release year of the record with `data.id`.
    async fn update(&self, data: MovieUpdate) -> Result<Movie, StoreError>;

    /// Remove the record with `id`, returning it.
    async fn delete(&self, id: Uuid) -> Result<Movie, StoreError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}
