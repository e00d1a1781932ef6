//! Positional-parameter SELECT builder.
//!
//! Identifiers (columns, sort expressions, the base `SELECT ... FROM`) are
//! `&'static str` and therefore come from code, never from callers. Caller
//! data only ever travels as bound [`Value`]s behind `?N` placeholders.

use crate::traits::Value;

/// Sort direction of one ORDER BY term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A finished query: SQL text plus the values for its `?1..?N` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Folds a typed list of equality predicates, order terms and a limit into
/// a [`Statement`].
///
/// ```
/// use mindfood_sql::{Direction, SelectBuilder, Value};
///
/// let stmt = SelectBuilder::new("SELECT * FROM product")
///     .filter_eq("universe_id", Value::Integer(1))
///     .order_by("created_on", Direction::Desc)
///     .limit(4)
///     .build();
/// assert_eq!(
///     stmt.sql,
///     "SELECT * FROM product WHERE universe_id = ?1 ORDER BY created_on DESC LIMIT ?2"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    base: &'static str,
    filters: Vec<(&'static str, Value)>,
    order: Vec<(&'static str, Direction)>,
    limit: Option<i64>,
}

impl SelectBuilder {
    /// Start from a `SELECT ... FROM ... [JOIN ...]` fragment without WHERE.
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Add a `column = ?N` predicate. Predicates are AND-ed in insertion order.
    pub fn filter_eq(mut self, column: &'static str, value: Value) -> Self {
        self.filters.push((column, value));
        self
    }

    /// Add a predicate only when a value is present.
    pub fn filter_eq_opt(self, column: &'static str, value: Option<Value>) -> Self {
        match value {
            Some(v) => self.filter_eq(column, v),
            None => self,
        }
    }

    /// Append an ORDER BY term.
    pub fn order_by(mut self, expr: &'static str, dir: Direction) -> Self {
        self.order.push((expr, dir));
        self
    }

    /// Cap the result set; the value is bound, not inlined.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Number of predicates collected so far.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    pub fn build(self) -> Statement {
        let mut sql = String::from(self.base.trim_end());
        let mut params = Vec::with_capacity(self.filters.len() + 1);

        if !self.filters.is_empty() {
            let clauses: Vec<String> = self
                .filters
                .iter()
                .enumerate()
                .map(|(i, (col, _))| format!("{col} = ?{}", i + 1))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
            params.extend(self.filters.into_iter().map(|(_, v)| v));
        }

        if !self.order.is_empty() {
            let terms: Vec<String> = self
                .order
                .iter()
                .map(|(expr, dir)| format!("{expr} {}", dir.as_sql()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&terms.join(", "));
        }

        if let Some(n) = self.limit {
            sql.push_str(&format!(" LIMIT ?{}", params.len() + 1));
            params.push(Value::Integer(n));
        }

        Statement { sql, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_select_has_no_clauses() {
        let stmt = SelectBuilder::new("SELECT * FROM t").build();
        assert_eq!(stmt.sql, "SELECT * FROM t");
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn filters_are_anded_and_numbered() {
        let stmt = SelectBuilder::new("SELECT * FROM t")
            .filter_eq("a", Value::Integer(1))
            .filter_eq("b", Value::Text("x".into()))
            .filter_eq("c", Value::Integer(3))
            .build();
        assert_eq!(stmt.sql, "SELECT * FROM t WHERE a = ?1 AND b = ?2 AND c = ?3");
        assert_eq!(
            stmt.params,
            vec![Value::Integer(1), Value::Text("x".into()), Value::Integer(3)]
        );
    }

    #[test]
    fn absent_optional_filter_adds_nothing() {
        let builder = SelectBuilder::new("SELECT * FROM t")
            .filter_eq_opt("a", None)
            .filter_eq_opt("b", Some(Value::Integer(2)));
        assert_eq!(builder.filter_count(), 1);
        let stmt = builder.build();
        assert_eq!(stmt.sql, "SELECT * FROM t WHERE b = ?1");
    }

    #[test]
    fn limit_placeholder_follows_filters() {
        let stmt = SelectBuilder::new("SELECT * FROM t")
            .filter_eq("a", Value::Integer(1))
            .order_by("x", Direction::Asc)
            .order_by("y", Direction::Desc)
            .limit(10)
            .build();
        assert_eq!(
            stmt.sql,
            "SELECT * FROM t WHERE a = ?1 ORDER BY x ASC, y DESC LIMIT ?2"
        );
        assert_eq!(stmt.params, vec![Value::Integer(1), Value::Integer(10)]);
    }

    #[test]
    fn limit_without_filters_is_first_param() {
        let stmt = SelectBuilder::new("SELECT * FROM t\n").limit(5).build();
        assert_eq!(stmt.sql, "SELECT * FROM t LIMIT ?1");
        assert_eq!(stmt.params, vec![Value::Integer(5)]);
    }
}
