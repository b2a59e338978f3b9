//! PostgreSQL store, table bootstrap and database creation.

use super::MovieStore;
use crate::error::StoreError;
use crate::model::{Movie, MovieUpdate, NewMovie};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

const COLUMNS: &str = "id, title, actors, release_year";

pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn find_many(&self) -> Result<Vec<Movie>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM movies ORDER BY created_at, id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Movie>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, data: NewMovie) -> Result<Movie, StoreError> {
        let sql = format!(
            "INSERT INTO movies (title, actors, release_year) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, title = %data.title, "query");
        let row = sqlx::query_as::<_, Movie>(&sql)
            .bind(&data.title)
            .bind(&data.actors)
            .bind(data.release_year)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, data: MovieUpdate) -> Result<Movie, StoreError> {
        // All three columns are written; NULLs are left for the NOT NULL constraints to reject.
        let sql = format!(
            "UPDATE movies SET title = $2, actors = $3, release_year = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id = %data.id, "query");
        let row = sqlx::query_as::<_, Movie>(&sql)
            .bind(data.id)
            .bind(&data.title)
            .bind(&data.actors)
            .bind(data.release_year)
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or(StoreError::NotFound(data.id))
    }

    async fn delete(&self, id: Uuid) -> Result<Movie, StoreError> {
        let sql = format!("DELETE FROM movies WHERE id = $1 RETURNING {COLUMNS}");
        tracing::debug!(sql = %sql, id = %id, "query");
        let row = sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or(StoreError::NotFound(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the `movies` table if it does not exist. `gen_random_uuid()` is built in from PostgreSQL 13.
pub async fn ensure_movies_table(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            title TEXT NOT NULL,
            actors TEXT[] NOT NULL,
            release_year INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure the database named in `database_url` exists; create it if not. Connects to the
/// `postgres` maintenance database with the same host, credentials and TLS settings.
/// Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin, db_name) = admin_options(database_url)?;
    let db_name = match db_name {
        Some(name) if !name.is_empty() && name != "postgres" => name,
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the maintenance connection, plus the database the URL points at (if any).
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), StoreError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = opts.get_database().map(str::to_string);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
