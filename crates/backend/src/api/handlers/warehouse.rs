use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::shared::data::db::{get_connection, smoke_test};

#[derive(Debug, Serialize)]
pub struct WarehouseHealth {
    pub backend: String,
    pub server_time: String,
}

/// GET /api/warehouse/health
pub async fn health() -> Result<Json<WarehouseHealth>, (StatusCode, String)> {
    use sea_orm::ConnectionTrait;

    let db = get_connection().map_err(|e| (StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?;

    match smoke_test(db).await {
        Ok(server_time) => Ok(Json(WarehouseHealth {
            backend: format!("{:?}", db.get_database_backend()),
            server_time,
        })),
        Err(e) => {
            tracing::error!("Warehouse smoke test failed: {}", e);
            Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string()))
        }
    }
}
