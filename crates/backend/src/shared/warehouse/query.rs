use sea_orm::{DatabaseBackend, Statement};

/// Query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Integer(i64),
}

impl From<&QueryParam> for sea_orm::Value {
    fn from(param: &QueryParam) -> Self {
        match param {
            QueryParam::Text(s) => s.clone().into(),
            QueryParam::Integer(i) => (*i).into(),
        }
    }
}

/// SQL text with `?` placeholders plus the values bound to them, in order
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    pub sql: String,
    pub params: Vec<QueryParam>,
}

impl BoundQuery {
    /// Query without parameters
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Build a statement for the given backend
    pub fn statement(&self, backend: DatabaseBackend) -> Statement {
        let values: Vec<sea_orm::Value> = self.params.iter().map(Into::into).collect();
        Statement::from_sql_and_values(backend, render_placeholders(&self.sql, backend), values)
    }
}

/// Incremental builder for a `BoundQuery`.
///
/// User-supplied values only ever go through `bind`; fragments are trusted
/// SQL written in this crate.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    sql: String,
    params: Vec<QueryParam>,
}

impl QueryBuilder {
    pub fn new(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
            params: Vec::new(),
        }
    }

    /// Append a trusted SQL fragment
    pub fn push(mut self, fragment: &str) -> Self {
        self.sql.push_str(fragment);
        self
    }

    /// Append a single placeholder bound to `param`
    pub fn bind(mut self, param: QueryParam) -> Self {
        self.sql.push('?');
        self.params.push(param);
        self
    }

    /// `column = ?`
    pub fn eq(self, column: &str, param: QueryParam) -> Self {
        self.push(column).push(" = ").bind(param)
    }

    /// `expr LIKE ?` with the pattern bound as text
    pub fn like(self, expr: &str, pattern: String) -> Self {
        self.push(expr).push(" LIKE ").bind(QueryParam::Text(pattern))
    }

    /// `column IN (?, ?, ...)` with one text parameter per value.
    ///
    /// An empty list renders `1 = 0` so the predicate matches nothing.
    pub fn in_list<S: AsRef<str>>(mut self, column: &str, values: &[S]) -> Self {
        if values.is_empty() {
            return self.push("1 = 0");
        }
        let placeholders = vec!["?"; values.len()].join(", ");
        self.sql
            .push_str(&format!("{} IN ({})", column, placeholders));
        self.params.extend(
            values
                .iter()
                .map(|v| QueryParam::Text(v.as_ref().to_string())),
        );
        self
    }

    pub fn build(self) -> BoundQuery {
        BoundQuery {
            sql: self.sql,
            params: self.params,
        }
    }
}

/// Rewrite `?` placeholders into the backend's native form.
///
/// PostgreSQL takes `$1, $2, ...`; SQLite and MySQL take `?` as written.
/// Question marks inside quoted literals are left alone.
pub fn render_placeholders(sql: &str, backend: DatabaseBackend) -> String {
    if backend != DatabaseBackend::Postgres {
        return sql.to_string();
    }

    let mut out = String::with_capacity(sql.len() + 8);
    let mut index = 0;
    let mut quote: Option<char> = None;

    for ch in sql.chars() {
        match (quote, ch) {
            (None, '\'') | (None, '"') => {
                quote = Some(ch);
                out.push(ch);
            }
            (Some(q), c) if c == q => {
                quote = None;
                out.push(ch);
            }
            (None, '?') => {
                index += 1;
                out.push_str(&format!("${}", index));
            }
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_list_binds_every_value() {
        let query = QueryBuilder::new("SELECT 1 FROM DIM_STORE ds WHERE ")
            .in_list("ds.store_name", &["Store A", "Store B"])
            .build();

        assert_eq!(
            query.sql,
            "SELECT 1 FROM DIM_STORE ds WHERE ds.store_name IN (?, ?)"
        );
        assert_eq!(
            query.params,
            vec![
                QueryParam::Text("Store A".to_string()),
                QueryParam::Text("Store B".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_in_list_matches_nothing() {
        let query = QueryBuilder::new("SELECT 1 WHERE ")
            .in_list::<&str>("x", &[])
            .build();
        assert_eq!(query.sql, "SELECT 1 WHERE 1 = 0");
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_quotes_in_values_never_reach_sql() {
        let query = QueryBuilder::new("SELECT 1 WHERE ")
            .in_list("c", &["x') OR ('1'='1"])
            .build();
        assert!(!query.sql.contains("OR"));
        assert_eq!(query.params.len(), 1);
    }

    #[test]
    fn test_eq_binds_integer() {
        let query = QueryBuilder::new("SELECT order_id FROM FACT_ORDERS WHERE ")
            .eq("order_id", QueryParam::Integer(42))
            .build();
        assert!(query.sql.ends_with("order_id = ?"));
        assert_eq!(query.params, vec![QueryParam::Integer(42)]);
    }

    #[test]
    fn test_postgres_placeholders_are_numbered() {
        let sql = "SELECT '?' AS q WHERE a IN (?, ?) AND b = ?";
        assert_eq!(
            render_placeholders(sql, DatabaseBackend::Postgres),
            "SELECT '?' AS q WHERE a IN ($1, $2) AND b = $3"
        );
        assert_eq!(render_placeholders(sql, DatabaseBackend::Sqlite), sql);
    }

    #[test]
    fn test_statement_carries_values() {
        let query = QueryBuilder::new("SELECT 1 WHERE ")
            .like("LOWER(name)", "%milk%".to_string())
            .build();
        let stmt = query.statement(DatabaseBackend::Sqlite);
        assert_eq!(stmt.sql, "SELECT 1 WHERE LOWER(name) LIKE ?");
        assert_eq!(stmt.values.map(|v| v.0.len()), Some(1));
    }
}
