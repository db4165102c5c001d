/**
 * Server Configuration
 *
 * Turns an `AppConfig` into running services, focusing on the optional
 * PostgreSQL connection.
 *
 * # Error Handling
 *
 * Database errors are logged but do not prevent server startup. Without a
 * database the server keeps snippets in memory.
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::backend::snippets::{InMemorySnippetStore, PgSnippetStore, SharedSnippetStore};
use crate::shared::AppConfig;

/// Database configuration result
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool
///
/// 1. Connects to `database_url`
/// 2. Runs migrations from `migrations/`
///
/// Returns `None` if no URL is configured or the connection fails.
pub async fn load_database(database_url: Option<&str>) -> DatabaseConfig {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set. Snippets will be kept in memory.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory snippet store.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - schema might not be up to date");
        }
    }

    Some(pool)
}

/// Pick the snippet store for this configuration
pub async fn load_snippet_store(config: &AppConfig) -> SharedSnippetStore {
    match load_database(config.database_url.as_deref()).await {
        Some(pool) => {
            tracing::info!("Using PostgreSQL snippet store");
            Arc::new(PgSnippetStore::new(pool))
        }
        None => {
            tracing::info!("Using in-memory snippet store");
            Arc::new(InMemorySnippetStore::new())
        }
    }
}
