use contracts::shared::dashboard::CellValue;
use sea_orm::FromQueryResult;

use crate::shared::warehouse::{BoundQuery, QueryBuilder, QueryParam, QueryRunner, TableRow};

#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductMatch {
    pub product_id: i64,
    pub product_name: String,
    pub category: Option<String>,
}

impl TableRow for ProductMatch {
    const COLUMNS: &'static [&'static str] = &["PRODUCT_ID", "PRODUCT_NAME", "CATEGORY"];

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.product_id.into(),
            self.product_name.clone().into(),
            self.category.clone().into(),
        ]
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct OrderMatch {
    pub order_id: i64,
    pub order_date_id: Option<i64>,
    pub total_value: Option<f64>,
}

impl TableRow for OrderMatch {
    const COLUMNS: &'static [&'static str] = &["ORDER_ID", "ORDER_DATE_ID", "TOTAL_VALUE"];

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.order_id.into(),
            self.order_date_id.into(),
            self.total_value.into(),
        ]
    }
}

/// Case-insensitive partial match on product name.
///
/// `%` and `_` typed by the user keep their LIKE meaning.
pub fn product_search_query(term: &str) -> BoundQuery {
    QueryBuilder::new(
        r#"
        SELECT
            CAST(dp.product_id AS BIGINT) AS product_id,
            dp.product_name,
            dp.category
        FROM DIM_PRODUCT dp
        WHERE "#,
    )
    .like("LOWER(dp.product_name)", format!("%{}%", term.to_lowercase()))
    .push(" LIMIT 20")
    .build()
}

/// Exact order lookup; `None` unless the term is entirely ASCII digits
/// and fits an order id
pub fn order_lookup_query(term: &str) -> Option<BoundQuery> {
    let order_id = parse_order_id(term)?;
    Some(
        QueryBuilder::new(
            r#"
        SELECT
            CAST(order_id AS BIGINT) AS order_id,
            CAST(order_date_id AS BIGINT) AS order_date_id,
            CAST(total_value AS DOUBLE PRECISION) AS total_value
        FROM FACT_ORDERS
        WHERE "#,
        )
        .eq("order_id", QueryParam::Integer(order_id))
        .build(),
    )
}

/// True when the term should also be looked up as an order id
pub fn is_numeric(term: &str) -> bool {
    !term.is_empty() && term.chars().all(|c| c.is_ascii_digit())
}

fn parse_order_id(term: &str) -> Option<i64> {
    if !is_numeric(term) {
        return None;
    }
    term.parse::<i64>().ok()
}

pub async fn find_products(runner: &mut QueryRunner<'_>, term: &str) -> Vec<ProductMatch> {
    runner.run(&product_search_query(term)).await
}

pub async fn find_order(runner: &mut QueryRunner<'_>, query: &BoundQuery) -> Vec<OrderMatch> {
    runner.run(query).await
}
