use axum::{routing::get, Router};

use crate::api::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/warehouse/health", get(handlers::warehouse::health))
        // ========================================
        // DASHBOARD TABS
        // ========================================
        .route("/api/d100/overview", get(handlers::dashboards::get_overview))
        .route(
            "/api/d101/store_performance",
            get(handlers::dashboards::get_store_performance),
        )
        .route(
            "/api/d102/product_sales",
            get(handlers::dashboards::get_product_sales),
        )
        .route(
            "/api/d103/customer_insights",
            get(handlers::dashboards::get_customer_insights),
        )
        .route("/api/d104/inventory", get(handlers::dashboards::get_inventory))
        .route("/api/d105/promotions", get(handlers::dashboards::get_promotions))
        .route("/api/d106/search", get(handlers::dashboards::search))
}
