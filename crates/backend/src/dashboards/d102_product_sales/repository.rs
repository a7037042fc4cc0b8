use contracts::shared::dashboard::CellValue;
use sea_orm::FromQueryResult;

use crate::shared::filters::FilterSet;
use crate::shared::warehouse::{BoundQuery, QueryBuilder, QueryRunner, TableRow};

#[derive(Debug, Clone, FromQueryResult)]
struct Category {
    category: Option<String>,
}

/// Quantity and revenue of one product
#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductSales {
    pub product_name: String,
    pub category: Option<String>,
    pub quantity_sold: Option<i64>,
    pub revenue: Option<f64>,
}

impl TableRow for ProductSales {
    const COLUMNS: &'static [&'static str] =
        &["PRODUCT_NAME", "CATEGORY", "QUANTITY_SOLD", "REVENUE"];

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.product_name.clone().into(),
            self.category.clone().into(),
            self.quantity_sold.into(),
            self.revenue.into(),
        ]
    }
}

/// Distinct non-null categories, alphabetical
pub async fn get_categories(runner: &mut QueryRunner<'_>) -> Vec<String> {
    let sql = r#"
        SELECT DISTINCT category
        FROM DIM_PRODUCT
        WHERE category IS NOT NULL
        ORDER BY category
    "#;
    runner
        .run::<Category>(&BoundQuery::new(sql))
        .await
        .into_iter()
        .filter_map(|r| r.category)
        .collect()
}

pub fn product_sales_query(categories: &FilterSet) -> BoundQuery {
    QueryBuilder::new(
        r#"
        SELECT
            dp.product_name,
            dp.category,
            CAST(SUM(fol.quantity) AS BIGINT) AS quantity_sold,
            CAST(SUM(fol.quantity * fol.unit_price) AS DOUBLE PRECISION) AS revenue
        FROM FACT_ORDER_LINES fol
        JOIN DIM_PRODUCT dp ON fol.product_id = dp.product_id
        WHERE "#,
    )
    .in_list("dp.category", categories.values())
    .push(
        r#"
        GROUP BY dp.product_name, dp.category
        ORDER BY revenue DESC
        LIMIT 50
    "#,
    )
    .build()
}

/// Top 50 products by revenue within the selected categories
pub async fn get_product_sales(
    runner: &mut QueryRunner<'_>,
    categories: &FilterSet,
) -> Vec<ProductSales> {
    runner.run(&product_sales_query(categories)).await
}
