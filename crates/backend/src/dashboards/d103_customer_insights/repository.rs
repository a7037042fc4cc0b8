use contracts::shared::dashboard::CellValue;
use sea_orm::FromQueryResult;

use crate::shared::filters::FilterSet;
use crate::shared::warehouse::{BoundQuery, QueryBuilder, QueryRunner, TableRow};

#[derive(Debug, Clone, FromQueryResult)]
struct LoyaltyTier {
    loyalty_tier: Option<String>,
}

/// Customers and average order value of one region
#[derive(Debug, Clone, FromQueryResult)]
pub struct RegionCustomers {
    pub region: Option<String>,
    pub customer_count: i64,
    pub avg_spent: Option<f64>,
}

impl TableRow for RegionCustomers {
    const COLUMNS: &'static [&'static str] = &["REGION", "CUSTOMER_COUNT", "AVG_SPENT"];

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.region.clone().into(),
            self.customer_count.into(),
            self.avg_spent.into(),
        ]
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct TierCustomers {
    pub loyalty_tier: String,
    pub customer_count: i64,
}

pub async fn get_loyalty_tiers(runner: &mut QueryRunner<'_>) -> Vec<String> {
    let sql = r#"
        SELECT DISTINCT loyalty_tier
        FROM FACT_ORDERS
        WHERE loyalty_tier IS NOT NULL
        ORDER BY loyalty_tier
    "#;
    runner
        .run::<LoyaltyTier>(&BoundQuery::new(sql))
        .await
        .into_iter()
        .filter_map(|r| r.loyalty_tier)
        .collect()
}

pub fn region_customers_query(tiers: &FilterSet) -> BoundQuery {
    QueryBuilder::new(
        r#"
        SELECT
            fc.region,
            COUNT(DISTINCT fc.customer_id) AS customer_count,
            CAST(AVG(fo.total_value) AS DOUBLE PRECISION) AS avg_spent
        FROM DIM_CUSTOMER fc
        JOIN FACT_ORDERS fo ON fc.customer_id = fo.customer_id
        WHERE "#,
    )
    .in_list("fo.loyalty_tier", tiers.values())
    .push(
        r#"
        GROUP BY fc.region
        ORDER BY customer_count DESC, fc.region
    "#,
    )
    .build()
}

/// Customers per region for orders in the selected tiers
pub async fn get_region_customers(
    runner: &mut QueryRunner<'_>,
    tiers: &FilterSet,
) -> Vec<RegionCustomers> {
    runner.run(&region_customers_query(tiers)).await
}

/// Distinct customers per selected tier
pub async fn get_tier_customers(
    runner: &mut QueryRunner<'_>,
    tiers: &FilterSet,
) -> Vec<TierCustomers> {
    let query = QueryBuilder::new(
        r#"
        SELECT loyalty_tier, COUNT(DISTINCT customer_id) AS customer_count
        FROM FACT_ORDERS
        WHERE "#,
    )
    .in_list("loyalty_tier", tiers.values())
    .push(" GROUP BY loyalty_tier")
    .build();
    runner.run(&query).await
}
