pub mod error;
pub mod query;
pub mod runner;
pub mod table;

pub use error::WarehouseError;
pub use query::*;
pub use runner::QueryRunner;
pub use table::{to_table, TableRow};
