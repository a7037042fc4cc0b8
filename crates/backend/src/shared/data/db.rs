use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, FromQueryResult, Statement,
};

use crate::shared::config::WarehouseConfig;
use crate::shared::warehouse::WarehouseError;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Open a warehouse connection pool from configuration
pub async fn connect(config: &WarehouseConfig) -> Result<DatabaseConnection, WarehouseError> {
    ensure_sqlite_parent_dir(&config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| WarehouseError::Connect(e.to_string()))
}

/// Connect, run the smoke test and keep the connection for request handlers
pub async fn initialize_database(config: &WarehouseConfig) -> anyhow::Result<()> {
    let conn = connect(config).await?;

    let now = smoke_test(&conn).await?;
    tracing::info!(
        "Warehouse connection established ({:?}), server time {}",
        conn.get_database_backend(),
        now
    );

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

pub fn get_connection() -> Result<&'static DatabaseConnection, WarehouseError> {
    DB_CONN.get().ok_or(WarehouseError::NotInitialized)
}

#[derive(Debug, FromQueryResult)]
struct SmokeTestRow {
    now: String,
}

/// Trivial round trip proving the session works; returns the warehouse clock
pub async fn smoke_test(db: &DatabaseConnection) -> Result<String, WarehouseError> {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        "SELECT CAST(CURRENT_TIMESTAMP AS VARCHAR(32)) AS now".to_string(),
    );

    SmokeTestRow::find_by_statement(stmt)
        .one(db)
        .await?
        .map(|row| row.now)
        .ok_or(WarehouseError::EmptySmokeTest)
}

/// SQLite creates the file but not its directory
fn ensure_sqlite_parent_dir(url: &str) {
    let Some(rest) = url.strip_prefix("sqlite://") else {
        return;
    };
    let path = rest.split('?').next().unwrap_or_default();
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Could not create {}: {}", parent.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_smoke_test_returns_timestamp() {
        let config = WarehouseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let db = connect(&config).await.unwrap();
        let now = smoke_test(&db).await.unwrap();
        // CURRENT_TIMESTAMP on SQLite is "YYYY-MM-DD HH:MM:SS"
        assert_eq!(now.len(), 19);
        assert!(now.starts_with("20"));
    }

    #[tokio::test]
    async fn test_bad_url_is_a_connect_error() {
        let config = WarehouseConfig {
            url: "nosuchdriver://nowhere".to_string(),
            max_connections: 1,
        };
        let err = connect(&config).await.unwrap_err();
        assert!(matches!(err, WarehouseError::Connect(_)));
    }
}
