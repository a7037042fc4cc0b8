use sea_orm::FromQueryResult;

use crate::shared::filters::FilterSet;
use crate::shared::warehouse::{BoundQuery, QueryBuilder, QueryRunner};

#[derive(Debug, Clone, FromQueryResult)]
struct StoreName {
    store_name: Option<String>,
}

/// Line revenue of one store on one day
#[derive(Debug, Clone, FromQueryResult)]
pub struct StoreDailySales {
    pub store_name: String,
    pub full_date: String,
    pub sales: Option<f64>,
}

/// Store names for the store filters, alphabetical.
///
/// Shared by the store performance and inventory tabs.
pub async fn get_store_names(runner: &mut QueryRunner<'_>) -> Vec<String> {
    let sql = "SELECT store_name FROM DIM_STORE ORDER BY store_name";
    runner
        .run::<StoreName>(&BoundQuery::new(sql))
        .await
        .into_iter()
        .filter_map(|r| r.store_name)
        .collect()
}

pub fn store_sales_query(stores: &FilterSet) -> BoundQuery {
    QueryBuilder::new(
        r#"
        SELECT
            ds.store_name,
            CAST(dd.full_date AS VARCHAR(10)) AS full_date,
            CAST(SUM(fol.quantity * fol.unit_price) AS DOUBLE PRECISION) AS sales
        FROM FACT_ORDER_LINES fol
        JOIN FACT_ORDERS fo ON fol.order_id = fo.order_id
        JOIN DIM_DATE dd ON fo.order_date_id = dd.date_id
        JOIN DIM_STORE ds ON fo.store_id = ds.store_id
        WHERE "#,
    )
    .in_list("ds.store_name", stores.values())
    .push(
        r#"
        GROUP BY ds.store_name, dd.full_date
        ORDER BY dd.full_date
    "#,
    )
    .build()
}

/// Daily line revenue per selected store
pub async fn get_store_sales(
    runner: &mut QueryRunner<'_>,
    stores: &FilterSet,
) -> Vec<StoreDailySales> {
    runner.run(&store_sales_query(stores)).await
}
