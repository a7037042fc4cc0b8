use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d100_overview::OverviewResponse;
use contracts::dashboards::d101_store_performance::{
    StorePerformanceRequest, StorePerformanceResponse,
};
use contracts::dashboards::d102_product_sales::{ProductSalesRequest, ProductSalesResponse};
use contracts::dashboards::d103_customer_insights::{
    CustomerInsightsRequest, CustomerInsightsResponse,
};
use contracts::dashboards::d104_inventory::{InventoryRequest, InventoryResponse};
use contracts::dashboards::d105_promotions::PromotionsResponse;
use contracts::dashboards::d106_search::{SearchRequest, SearchResponse};
use sea_orm::DatabaseConnection;

use crate::dashboards::{
    d100_overview, d101_store_performance, d102_product_sales, d103_customer_insights,
    d104_inventory, d105_promotions, d106_search,
};
use crate::shared::data::db::get_connection;

fn connection() -> Result<&'static DatabaseConnection, StatusCode> {
    get_connection().map_err(|e| {
        tracing::error!("Dashboard request rejected: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/d100/overview
pub async fn get_overview() -> Result<Json<OverviewResponse>, StatusCode> {
    let db = connection()?;
    Ok(Json(d100_overview::service::get_overview(db).await))
}

/// GET /api/d101/store_performance?stores=Store%20A&stores=Store%20B
pub async fn get_store_performance(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<StorePerformanceResponse>, StatusCode> {
    let db = connection()?;
    let request = StorePerformanceRequest::from_query(&pairs);
    let view = d101_store_performance::service::get_store_performance(db, request.stores).await;
    Ok(Json(view))
}

/// GET /api/d102/product_sales?categories=Dairy&categories=Fruit
pub async fn get_product_sales(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ProductSalesResponse>, StatusCode> {
    let db = connection()?;
    let request = ProductSalesRequest::from_query(&pairs);
    let view = d102_product_sales::service::get_product_sales(db, request.categories).await;
    Ok(Json(view))
}

/// GET /api/d103/customer_insights?tiers=Gold&tiers=Silver
pub async fn get_customer_insights(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CustomerInsightsResponse>, StatusCode> {
    let db = connection()?;
    let request = CustomerInsightsRequest::from_query(&pairs);
    let view = d103_customer_insights::service::get_customer_insights(db, request.tiers).await;
    Ok(Json(view))
}

/// GET /api/d104/inventory?store=Store%20A
pub async fn get_inventory(
    Query(request): Query<InventoryRequest>,
) -> Result<Json<InventoryResponse>, StatusCode> {
    let db = connection()?;
    let view = d104_inventory::service::get_inventory(db, request.store.as_deref()).await;
    Ok(Json(view))
}

/// GET /api/d105/promotions
pub async fn get_promotions() -> Result<Json<PromotionsResponse>, StatusCode> {
    let db = connection()?;
    Ok(Json(d105_promotions::service::get_promotions(db).await))
}

/// GET /api/d106/search?q=apple
pub async fn search(
    Query(request): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, StatusCode> {
    let db = connection()?;
    Ok(Json(d106_search::service::search(db, &request.q).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::FilterSet;
    use axum::http::Uri;

    fn pairs(uri: &str) -> Vec<(String, String)> {
        let uri: Uri = uri.parse().unwrap();
        Query::<Vec<(String, String)>>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_absent_stores_means_every_store() {
        let request = StorePerformanceRequest::from_query(&pairs("/api/d101/store_performance"));
        assert_eq!(request.stores, None);
    }

    #[test]
    fn test_blank_stores_is_explicit_empty_selection() {
        let request =
            StorePerformanceRequest::from_query(&pairs("/api/d101/store_performance?stores="));
        assert_eq!(request.stores, Some(vec![]));
    }

    #[test]
    fn test_store_name_with_comma_is_selectable() {
        let request = StorePerformanceRequest::from_query(&pairs(
            "/api/d101/store_performance?stores=Colombo%2C%20Fort",
        ));
        let options = vec!["Colombo, Fort".to_string(), "Kandy".to_string()];
        let selected = FilterSet::resolve(&options, request.stores);
        assert_eq!(selected.values(), &["Colombo, Fort".to_string()]);
    }

    #[test]
    fn test_repeated_parameters_select_several_values() {
        let request = ProductSalesRequest::from_query(&pairs(
            "/api/d102/product_sales?categories=Dairy&categories=Fruit",
        ));
        assert_eq!(
            request.categories,
            Some(vec!["Dairy".to_string(), "Fruit".to_string()])
        );

        let request = CustomerInsightsRequest::from_query(&pairs(
            "/api/d103/customer_insights?tiers=Gold&stores=Store%20A",
        ));
        assert_eq!(request.tiers, Some(vec!["Gold".to_string()]));
    }

    #[test]
    fn test_search_term_extraction() {
        let uri: Uri = "/api/d106/search?q=whole+milk".parse().unwrap();
        let Query(request) = Query::<SearchRequest>::try_from_uri(&uri).unwrap();
        assert_eq!(request.q, "whole milk");

        let uri: Uri = "/api/d106/search?q=".parse().unwrap();
        let Query(request) = Query::<SearchRequest>::try_from_uri(&uri).unwrap();
        assert_eq!(request.q, "");

        let uri: Uri = "/api/d106/search".parse().unwrap();
        let Query(request) = Query::<SearchRequest>::try_from_uri(&uri).unwrap();
        assert_eq!(request.q, "");
    }

    #[test]
    fn test_inventory_store_extraction() {
        let uri: Uri = "/api/d104/inventory?store=Store%20B".parse().unwrap();
        let Query(request) = Query::<InventoryRequest>::try_from_uri(&uri).unwrap();
        assert_eq!(request.store.as_deref(), Some("Store B"));
    }

    #[tokio::test]
    async fn test_missing_connection_is_internal_error() {
        assert!(matches!(
            get_overview().await,
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        ));
        assert!(matches!(
            get_store_performance(Query(vec![])).await,
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }
}
