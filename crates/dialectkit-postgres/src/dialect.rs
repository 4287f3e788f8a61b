use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use dialectkit_core::{
    CheckSql, Column, ColumnSet, DataSource, Dialect, Filter, IdFilter, Index, QuoteFilter,
    Result, SeqFilter, Table,
};

use crate::{mapper, queries, reserved, typemap};

/// Adapter for PostgreSQL databases.
#[derive(Debug, Clone)]
pub struct PostgresDialect {
    source: DataSource,
    pool: PgPool,
}

impl PostgresDialect {
    /// Create a new adapter using a pre-configured pool.
    pub fn new(source: DataSource, pool: PgPool) -> Self {
        Self { source, pool }
    }

    /// Build the pool from the data source without connecting yet.
    pub fn connect_lazy(source: &DataSource) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(source.max_connections)
            .acquire_timeout(source.acquire_timeout)
            .connect_lazy(&source.uri)?;
        Ok(Self::new(source.clone(), pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Registry factory for the `postgres` driver names.
pub fn open(source: &DataSource) -> Result<Arc<dyn Dialect>> {
    Ok(Arc::new(PostgresDialect::connect_lazy(source)?))
}

#[async_trait]
impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn data_source(&self) -> &DataSource {
        &self.source
    }

    fn sql_type(&self, column: &mut Column) -> String {
        typemap::sql_type(column)
    }

    fn is_reserved(&self, name: &str) -> bool {
        reserved::is_reserved(name)
    }

    fn quote_str(&self) -> &'static str {
        "\""
    }

    fn auto_incr_str(&self) -> &'static str {
        ""
    }

    fn supports_insert_many(&self) -> bool {
        true
    }

    fn supports_engine(&self) -> bool {
        false
    }

    fn supports_charset(&self) -> bool {
        false
    }

    fn index_on_table(&self) -> bool {
        false
    }

    fn index_check_sql(&self, table: &str, index: &str) -> CheckSql {
        (
            queries::INDEX_CHECK_SQL.to_string(),
            vec![table.to_string(), index.to_string()],
        )
    }

    fn table_check_sql(&self, table: &str) -> CheckSql {
        (queries::TABLE_CHECK_SQL.to_string(), vec![table.to_string()])
    }

    fn modify_column_sql(&self, table: &str, column: &mut Column) -> String {
        let native = self.sql_type(column);
        format!("ALTER TABLE {table} ALTER COLUMN {} TYPE {native}", column.name)
    }

    fn drop_index_sql(&self, table: &str, index: &Index) -> String {
        format!("DROP INDEX {}", self.quote(&index.physical_name(table)))
    }

    async fn is_column_exist(&self, table: &str, column: &str) -> Result<bool> {
        queries::column_exists(&self.pool, table, column).await
    }

    async fn get_columns(&self, table: &str) -> Result<ColumnSet> {
        let raw = queries::list_columns(&self.pool, table).await?;
        mapper::map_columns(raw)
    }

    async fn get_tables(&self) -> Result<Vec<Table>> {
        let names = queries::list_tables(&self.pool).await?;
        Ok(mapper::map_tables(names))
    }

    async fn get_indexes(&self, table: &str) -> Result<HashMap<String, Index>> {
        let raw = queries::list_indexes(&self.pool, table).await?;
        mapper::map_indexes(table, raw)
    }

    fn filters(&self) -> Vec<Box<dyn Filter>> {
        vec![
            Box::new(IdFilter),
            Box::new(QuoteFilter),
            Box::new(SeqFilter::new("$", 1)),
        ]
    }
}
