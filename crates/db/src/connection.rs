use std::time::Duration;

use shopfront_core::config::StorageConfig;
use sqlx::sqlite::SqlitePoolOptions;

pub type DbPool = sqlx::SqlitePool;

pub async fn connect_storage(storage: &StorageConfig) -> Result<DbPool, sqlx::Error> {
    connect_with_settings(&storage.url, storage.max_connections, storage.timeout_secs).await
}

/// `sqlite::memory:` databases are private to a connection, so callers using
/// them should pass `max_connections = 1`.
pub async fn connect_with_settings(
    database_url: &str,
    max_connections: u32,
    timeout_secs: u64,
) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(timeout_secs.max(1)))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA journal_mode = WAL").execute(&mut *conn).await?;
                sqlx::query("PRAGMA busy_timeout = 5000").execute(&mut *conn).await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use shopfront_core::config::StorageConfig;

    use super::connect_storage;

    #[tokio::test]
    async fn connects_to_file_database_from_storage_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("shopfront.db");
        let storage = StorageConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            max_connections: 2,
            timeout_secs: 5,
            state_key: "storefront".to_string(),
        };

        let pool = connect_storage(&storage).await.expect("connect");
        let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await.expect("select");

        assert_eq!(one, 1);
        assert!(path.exists());
    }
}
