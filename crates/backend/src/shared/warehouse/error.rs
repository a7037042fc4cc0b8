use sea_orm::DbErr;
use thiserror::Error;

/// Warehouse access errors
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Database connection has not been initialized")]
    NotInitialized,

    #[error("Smoke test returned no rows")]
    EmptySmokeTest,

    #[error("{0}")]
    Query(#[from] DbErr),
}
