//! Statement rewriters applied to generated SQL before execution.
//!
//! Generic statements use backticks for quoting, `?` for parameters and
//! `(id)` for "the primary key"; each dialect lists the filters that turn
//! those tokens into its own syntax.

use crate::dialect::Dialect;
use crate::schema::Table;

pub trait Filter: Send + Sync {
    fn apply(&self, sql: &str, dialect: &dyn Dialect, table: Option<&Table>) -> String;
}

/// Replaces the `(id)` token with the table's single primary-key column.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdFilter;

impl Filter for IdFilter {
    fn apply(&self, sql: &str, dialect: &dyn Dialect, table: Option<&Table>) -> String {
        let Some(table) = table else {
            return sql.to_string();
        };
        let pks = table.primary_keys();
        let [pk] = pks.as_slice() else {
            return sql.to_string();
        };

        let quoted_pk = dialect.quote(pk);
        sql.replace("`(id)`", &quoted_pk)
            .replace(&dialect.quote("(id)"), &quoted_pk)
            .replace("(id)", &quoted_pk)
    }
}

/// Replaces the generic backtick quote with the dialect's quote string.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteFilter;

impl Filter for QuoteFilter {
    fn apply(&self, sql: &str, dialect: &dyn Dialect, _table: Option<&Table>) -> String {
        sql.replace('`', dialect.quote_str())
    }
}

/// Numbers `?` placeholders as `<prefix><n>`, starting at `start` for
/// every statement.
#[derive(Debug, Clone)]
pub struct SeqFilter {
    pub prefix: String,
    pub start: usize,
}

impl SeqFilter {
    pub fn new(prefix: impl Into<String>, start: usize) -> Self {
        Self {
            prefix: prefix.into(),
            start,
        }
    }
}

impl Filter for SeqFilter {
    fn apply(&self, sql: &str, _dialect: &dyn Dialect, _table: Option<&Table>) -> String {
        let mut out = String::with_capacity(sql.len() + 8);
        let mut position = self.start;
        for (i, segment) in sql.split('?').enumerate() {
            if i > 0 {
                out.push_str(&self.prefix);
                out.push_str(&position.to_string());
                position += 1;
            }
            out.push_str(segment);
        }
        out
    }
}

/// Run `sql` through a filter pipeline in order.
pub fn apply_filters(
    filters: &[Box<dyn Filter>],
    sql: &str,
    dialect: &dyn Dialect,
    table: Option<&Table>,
) -> String {
    filters
        .iter()
        .fold(sql.to_string(), |acc, filter| filter.apply(&acc, dialect, table))
}
