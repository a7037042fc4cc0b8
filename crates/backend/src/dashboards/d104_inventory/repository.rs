use contracts::shared::dashboard::CellValue;
use sea_orm::FromQueryResult;

use crate::shared::warehouse::{BoundQuery, QueryBuilder, QueryParam, QueryRunner, TableRow};

/// Stock position of one product in a store
#[derive(Debug, Clone, FromQueryResult)]
pub struct StockPosition {
    pub product_name: String,
    pub stock_level: Option<i64>,
    pub on_order_qty: Option<i64>,
    pub safety_stock: Option<i64>,
}

impl TableRow for StockPosition {
    const COLUMNS: &'static [&'static str] =
        &["PRODUCT_NAME", "STOCK_LEVEL", "ON_ORDER_QTY", "SAFETY_STOCK"];

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.product_name.clone().into(),
            self.stock_level.into(),
            self.on_order_qty.into(),
            self.safety_stock.into(),
        ]
    }
}

pub fn stock_query(store_name: &str) -> BoundQuery {
    QueryBuilder::new(
        r#"
        SELECT
            dp.product_name,
            CAST(fi.stock_level AS BIGINT) AS stock_level,
            CAST(fi.on_order_qty AS BIGINT) AS on_order_qty,
            CAST(fi.safety_stock AS BIGINT) AS safety_stock
        FROM FACT_INVENTORY fi
        JOIN DIM_SKU sku ON fi.sku_id = sku.sku_id
        JOIN DIM_PRODUCT dp ON sku.product_id = dp.product_id
        JOIN DIM_STORE ds ON fi.store_id = ds.store_id
        WHERE "#,
    )
    .eq("ds.store_name", QueryParam::Text(store_name.to_string()))
    .push(
        r#"
        ORDER BY fi.stock_level ASC
        LIMIT 100
    "#,
    )
    .build()
}

/// Up to 100 lowest-stock products of a store
pub async fn get_stock_positions(
    runner: &mut QueryRunner<'_>,
    store_name: &str,
) -> Vec<StockPosition> {
    runner.run(&stock_query(store_name)).await
}
