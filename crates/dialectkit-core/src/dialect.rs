use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::filter::Filter;
use crate::index::Index;
use crate::schema::{Column, Table};

/// Connection parameters handed to a dialect when it is opened.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub driver_name: String,
    pub uri: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DataSource {
    pub fn new(driver_name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            driver_name: driver_name.into(),
            uri: uri.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

/// A statement with generic `?` placeholders and its arguments.
pub type CheckSql = (String, Vec<String>);

/// Columns in physical order plus a lookup by name.
pub type ColumnSet = (Vec<String>, HashMap<String, Column>);

/// Capability contract implemented once per database engine.
///
/// Instances are immutable after construction; every reflective method
/// issues one catalog query and returns fresh model values.
#[async_trait]
pub trait Dialect: Send + Sync {
    /// Engine identifier (e.g. `postgres`).
    fn name(&self) -> &'static str;

    fn data_source(&self) -> &DataSource;

    /// Native type syntax for a column.
    ///
    /// Takes the column mutably: engines may derive column attributes from
    /// the declared type (a serial type implies auto-increment and NOT NULL).
    fn sql_type(&self, column: &mut Column) -> String;

    /// Case-insensitive reserved-word test.
    fn is_reserved(&self, name: &str) -> bool;

    fn quote_str(&self) -> &'static str;

    /// Keyword appended to auto-increment columns; empty when the engine
    /// expresses auto-increment through the type instead.
    fn auto_incr_str(&self) -> &'static str;

    fn quote(&self, name: &str) -> String {
        let quote = self.quote_str();
        format!("{quote}{name}{quote}")
    }

    /// Quote `name` only when it collides with a reserved word.
    fn checked_quote(&self, name: &str) -> String {
        if self.is_reserved(name) {
            self.quote(name)
        } else {
            name.to_string()
        }
    }

    fn supports_insert_many(&self) -> bool;
    fn supports_engine(&self) -> bool;
    fn supports_charset(&self) -> bool;
    /// Whether indexes may be declared inside `CREATE TABLE`.
    fn index_on_table(&self) -> bool;

    fn index_check_sql(&self, table: &str, index: &str) -> CheckSql;
    fn table_check_sql(&self, table: &str) -> CheckSql;

    /// Change a column's type; nullability and default are left untouched.
    fn modify_column_sql(&self, table: &str, column: &mut Column) -> String;
    fn drop_index_sql(&self, table: &str, index: &Index) -> String;

    async fn is_column_exist(&self, table: &str, column: &str) -> Result<bool>;
    async fn get_columns(&self, table: &str) -> Result<ColumnSet>;
    /// Table shells (name only) of the default schema.
    async fn get_tables(&self) -> Result<Vec<Table>>;
    /// Indexes keyed by logical name, primary-key indexes excluded.
    async fn get_indexes(&self, table: &str) -> Result<HashMap<String, Index>>;

    /// Statement rewriters the execution layer applies, in order.
    fn filters(&self) -> Vec<Box<dyn Filter>>;

    /// Reflect one table with its columns and indexes populated.
    async fn load_table(&self, name: &str) -> Result<Table> {
        let (order, mut columns) = self.get_columns(name).await?;
        let mut table = Table::new(name);
        for col_name in order {
            if let Some(column) = columns.remove(&col_name) {
                table.add_column(column);
            }
        }
        for (_, index) in self.get_indexes(name).await? {
            table.add_index(index);
        }
        Ok(table)
    }
}
