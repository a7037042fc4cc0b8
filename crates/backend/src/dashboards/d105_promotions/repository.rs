use contracts::shared::dashboard::CellValue;
use sea_orm::FromQueryResult;

use crate::shared::warehouse::{BoundQuery, QueryRunner, TableRow};

#[derive(Debug, Clone, FromQueryResult)]
pub struct Promotion {
    pub promo_id: i64,
    pub product_name: String,
    pub promo_type: Option<String>,
    pub discount_rate: Option<f64>,
    pub expected_uplift: Option<f64>,
    pub start_date_id: Option<i64>,
    pub end_date_id: Option<i64>,
}

impl TableRow for Promotion {
    const COLUMNS: &'static [&'static str] = &[
        "PROMO_ID",
        "PRODUCT_NAME",
        "PROMO_TYPE",
        "DISCOUNT_RATE",
        "EXPECTED_UPLIFT",
        "START_DATE_ID",
        "END_DATE_ID",
    ];

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.promo_id.into(),
            self.product_name.clone().into(),
            self.promo_type.clone().into(),
            self.discount_rate.into(),
            self.expected_uplift.into(),
            self.start_date_id.into(),
            self.end_date_id.into(),
        ]
    }
}

/// 50 most recently started promotions
pub async fn get_recent_promotions(runner: &mut QueryRunner<'_>) -> Vec<Promotion> {
    let sql = r#"
        SELECT
            CAST(fp.promo_id AS BIGINT) AS promo_id,
            dp.product_name,
            fp.promo_type,
            CAST(fp.discount_rate AS DOUBLE PRECISION) AS discount_rate,
            CAST(fp.expected_uplift AS DOUBLE PRECISION) AS expected_uplift,
            CAST(fp.start_date_id AS BIGINT) AS start_date_id,
            CAST(fp.end_date_id AS BIGINT) AS end_date_id
        FROM FACT_PROMOTION fp
        JOIN DIM_SKU sku ON fp.sku_id = sku.sku_id
        JOIN DIM_PRODUCT dp ON sku.product_id = dp.product_id
        ORDER BY fp.start_date_id DESC
        LIMIT 50
    "#;
    runner.run(&BoundQuery::new(sql)).await
}
