//! In-memory star schema used by the dashboard tests.
//!
//! Seed data:
//! - Store A: orders 1..=10, one line each (2 x 250.00), Gold/Silver tiers
//! - Store B: orders 11..=14 (5 x 50.00, Bronze) and order 15 (1 x 100.00, no tier)
//! - Store C: no orders, no inventory
//! - Household category and the uncategorised product have no sales
//! - Line revenue overall: 5000 + 1000 + 100 = 6100

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

const SCHEMA: &str = r#"
CREATE TABLE DIM_STORE (store_id INTEGER PRIMARY KEY, store_name TEXT NOT NULL);
CREATE TABLE DIM_DATE (date_id INTEGER PRIMARY KEY, full_date TEXT NOT NULL);
CREATE TABLE DIM_PRODUCT (product_id INTEGER PRIMARY KEY, product_name TEXT NOT NULL, category TEXT);
CREATE TABLE DIM_SKU (sku_id INTEGER PRIMARY KEY, product_id INTEGER NOT NULL);
CREATE TABLE DIM_CUSTOMER (customer_id INTEGER PRIMARY KEY, region TEXT);
CREATE TABLE FACT_ORDERS (order_id INTEGER PRIMARY KEY, order_date_id INTEGER, store_id INTEGER, customer_id INTEGER, total_value REAL, loyalty_tier TEXT);
CREATE TABLE FACT_ORDER_LINES (order_id INTEGER, product_id INTEGER, quantity INTEGER, unit_price REAL);
CREATE TABLE FACT_INVENTORY (store_id INTEGER, sku_id INTEGER, stock_level INTEGER, on_order_qty INTEGER, safety_stock INTEGER);
CREATE TABLE FACT_PROMOTION (promo_id INTEGER PRIMARY KEY, sku_id INTEGER, promo_type TEXT, discount_rate REAL, expected_uplift REAL, start_date_id INTEGER, end_date_id INTEGER);
"#;

const DIMENSIONS: &str = r#"
INSERT INTO DIM_STORE VALUES (1, 'Store A'), (2, 'Store B'), (3, 'Store C');
INSERT INTO DIM_DATE VALUES (1, '2024-01-01'), (2, '2024-01-02'), (3, '2024-01-03');
INSERT INTO DIM_PRODUCT VALUES (1, 'Red Apple', 'Fruit'), (2, 'Green Apple', 'Fruit'), (3, 'Whole Milk', 'Dairy'), (4, 'Sourdough Bread', 'Bakery'), (5, 'Mystery Item', NULL), (6, 'Dish Soap', 'Household');
INSERT INTO DIM_SKU VALUES (11, 1), (12, 2), (13, 3), (14, 4);
INSERT INTO DIM_CUSTOMER VALUES (100, 'Western'), (101, 'Western'), (102, 'Central'), (103, 'Southern');
INSERT INTO FACT_INVENTORY VALUES (1, 11, 5, 10, 8), (1, 13, 40, 0, 12), (1, 12, 17, NULL, 6), (2, 14, 3, 20, 5);
INSERT INTO FACT_PROMOTION VALUES (1, 11, 'BOGO', 0.5, 0.2, 1, 2), (2, 13, 'Discount', 0.1, 0.05, 2, 3), (3, 14, 'Discount', 0.3, 0.1, 3, 3);
"#;

/// Seeded warehouse
pub async fn warehouse() -> DatabaseConnection {
    let db = empty_warehouse().await;
    execute_script(&db, SCHEMA).await;
    execute_script(&db, DIMENSIONS).await;
    execute_script(&db, &orders_script()).await;
    db
}

/// Warehouse with no tables at all; every dashboard query fails
pub async fn empty_warehouse() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).sqlx_logging(false);
    Database::connect(options)
        .await
        .expect("in-memory sqlite should open")
}

fn orders_script() -> String {
    let mut sql = String::new();
    for order_id in 1..=10 {
        let date_id = (order_id - 1) % 3 + 1;
        let customer_id = if order_id % 2 == 0 { 100 } else { 101 };
        let tier = if order_id <= 6 { "Gold" } else { "Silver" };
        sql.push_str(&format!(
            "INSERT INTO FACT_ORDERS VALUES ({order_id}, {date_id}, 1, {customer_id}, 500.0, '{tier}');\n\
             INSERT INTO FACT_ORDER_LINES VALUES ({order_id}, 1, 2, 250.0);\n"
        ));
    }
    for order_id in 11..=14 {
        let customer_id = if order_id % 2 == 0 { 102 } else { 103 };
        sql.push_str(&format!(
            "INSERT INTO FACT_ORDERS VALUES ({order_id}, 2, 2, {customer_id}, 250.0, 'Bronze');\n\
             INSERT INTO FACT_ORDER_LINES VALUES ({order_id}, 3, 5, 50.0);\n"
        ));
    }
    sql.push_str(
        "INSERT INTO FACT_ORDERS VALUES (15, 3, 2, 103, 100.0, NULL);\n\
         INSERT INTO FACT_ORDER_LINES VALUES (15, 4, 1, 100.0);\n",
    );
    sql
}

async fn execute_script(db: &DatabaseConnection, script: &str) {
    for statement in script.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        db.execute_unprepared(statement)
            .await
            .unwrap_or_else(|e| panic!("fixture statement failed: {statement}: {e}"));
    }
}
