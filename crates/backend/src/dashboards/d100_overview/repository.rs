use sea_orm::FromQueryResult;

use crate::shared::warehouse::{BoundQuery, QueryRunner};

#[derive(Debug, Clone, FromQueryResult)]
struct TotalSales {
    total_sales: f64,
}

#[derive(Debug, Clone, FromQueryResult)]
struct TotalOrders {
    total_orders: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
struct ActiveCustomers {
    active_customers: i64,
}

/// Daily line revenue
#[derive(Debug, Clone, FromQueryResult)]
pub struct DailySales {
    pub full_date: String,
    pub sales: Option<f64>,
}

/// Sum of order totals; `None` only when the query failed
pub async fn get_total_sales(runner: &mut QueryRunner<'_>) -> Option<f64> {
    let sql = r#"
        SELECT CAST(COALESCE(SUM(total_value), 0) AS DOUBLE PRECISION) AS total_sales
        FROM FACT_ORDERS
    "#;
    runner
        .run_first::<TotalSales>(&BoundQuery::new(sql))
        .await
        .map(|r| r.total_sales)
}

pub async fn get_total_orders(runner: &mut QueryRunner<'_>) -> Option<i64> {
    let sql = "SELECT COUNT(order_id) AS total_orders FROM FACT_ORDERS";
    runner
        .run_first::<TotalOrders>(&BoundQuery::new(sql))
        .await
        .map(|r| r.total_orders)
}

pub async fn get_active_customers(runner: &mut QueryRunner<'_>) -> Option<i64> {
    let sql = "SELECT COUNT(DISTINCT customer_id) AS active_customers FROM FACT_ORDERS";
    runner
        .run_first::<ActiveCustomers>(&BoundQuery::new(sql))
        .await
        .map(|r| r.active_customers)
}

/// First 100 days of line revenue, oldest first
pub async fn get_sales_over_time(runner: &mut QueryRunner<'_>) -> Vec<DailySales> {
    let sql = r#"
        SELECT
            CAST(dd.full_date AS VARCHAR(10)) AS full_date,
            CAST(SUM(fol.quantity * fol.unit_price) AS DOUBLE PRECISION) AS sales
        FROM FACT_ORDER_LINES fol
        JOIN FACT_ORDERS fo ON fol.order_id = fo.order_id
        JOIN DIM_DATE dd ON fo.order_date_id = dd.date_id
        GROUP BY dd.full_date
        ORDER BY dd.full_date
        LIMIT 100
    "#;
    runner.run(&BoundQuery::new(sql)).await
}
