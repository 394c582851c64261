/**
 * Server Configuration
 *
 * This module handles loading server configuration from the environment
 * and opening the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables, with defaults for
 * local development:
 * - `SERVER_PORT` - listen port (default 8000)
 * - `DATABASE_URL` - sqlx connection string
 *   (default `sqlite:shopfront.db?mode=rwc`, which creates the file)
 *
 * Unlike optional side services, the store is a required collaborator:
 * every catalog route needs it, so a connection failure aborts startup
 * instead of degrading.
 */

use sqlx::SqlitePool;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// sqlx connection string for the catalog store
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults; a bad
    /// `SERVER_PORT` falls back to 8000.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(8000);
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:shopfront.db?mode=rwc".to_string());

        Self { port, database_url }
    }
}

/// Open the connection pool and run migrations
///
/// # Errors
///
/// Returns the sqlx error if the pool cannot be opened or migrations
/// fail; the caller aborts startup in both cases.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("[Server] Connecting to database...");

    let pool = SqlitePool::connect(database_url).await?;

    tracing::info!("[Server] Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("[Server] Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        // Env vars are not set under `cargo test`
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 8000);
        assert!(config.database_url.starts_with("sqlite:"));
    }

    #[tokio::test]
    async fn test_connect_database_runs_migrations() {
        let path = std::env::temp_dir().join("shopfront-config-test.db");
        let url = format!("sqlite:{}?mode=rwc", path.display());

        let pool = connect_database(&url).await.unwrap();
        // The migrated tables exist
        sqlx::query("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();
        sqlx::query("SELECT COUNT(*) FROM messages")
            .fetch_one(&pool)
            .await
            .unwrap();

        pool.close().await;
        let _ = std::fs::remove_file(&path);
    }
}
