//! Movie catalog server: loads config, connects the store, serves API and UI.

use movie_catalog::{
    app, ensure_database_exists, ensure_movies_table, AppState, MemoryMovieStore, PgMovieStore,
    ServerConfig, StoreBackend,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("movie_catalog=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = match config.store {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_movies_table(&pool).await?;
            tracing::info!(max_connections = config.max_connections, "connected to PostgreSQL");
            AppState::new(PgMovieStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on restart");
            AppState::new(MemoryMovieStore::new())
        }
    };

    let router = app(state, &config);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
