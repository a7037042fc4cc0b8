pub mod d100_overview;
pub mod d101_store_performance;
pub mod d102_product_sales;
pub mod d103_customer_insights;
pub mod d104_inventory;
pub mod d105_promotions;
pub mod d106_search;
