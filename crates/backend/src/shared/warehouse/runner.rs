use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult};

use super::error::WarehouseError;
use super::query::BoundQuery;

/// Executes dashboard queries for one render pass.
///
/// Failures never propagate: each one is logged, recorded as a banner and
/// answered with an empty result, so callers treat "failed" and "no rows"
/// the same way.
pub struct QueryRunner<'a> {
    db: &'a DatabaseConnection,
    banners: Vec<String>,
    executed: usize,
}

impl<'a> QueryRunner<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            banners: Vec::new(),
            executed: 0,
        }
    }

    /// Execute a query and decode every row
    pub async fn run<T: FromQueryResult>(&mut self, query: &BoundQuery) -> Vec<T> {
        self.executed += 1;
        let stmt = query.statement(self.db.get_database_backend());

        match T::find_by_statement(stmt).all(self.db).await {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "Query returned");
                rows
            }
            Err(e) => {
                let error = WarehouseError::from(e);
                tracing::error!(sql = %query.sql, "Query failed: {}", error);
                self.banners.push(format!("Query error: {}", error));
                Vec::new()
            }
        }
    }

    /// Execute a query and keep only the first row
    pub async fn run_first<T: FromQueryResult>(&mut self, query: &BoundQuery) -> Option<T> {
        self.run(query).await.into_iter().next()
    }

    /// Number of queries sent so far
    pub fn executed(&self) -> usize {
        self.executed
    }

    pub fn into_banners(self) -> Vec<String> {
        self.banners
    }
}
