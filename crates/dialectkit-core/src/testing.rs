use std::collections::HashMap;

use async_trait::async_trait;

use crate::dialect::{CheckSql, ColumnSet, DataSource, Dialect};
use crate::error::Result;
use crate::filter::{Filter, QuoteFilter, SeqFilter};
use crate::index::{Index, IndexKind};
use crate::schema::{Column, Table};
use crate::types::{SqlType, SqlTypeName};

/// In-memory dialect with a fixed catalog, used by unit tests.
pub struct StubDialect {
    source: DataSource,
}

impl StubDialect {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }
}

impl Default for StubDialect {
    fn default() -> Self {
        Self::new(DataSource::new("stub", "stub://memory"))
    }
}

#[async_trait]
impl Dialect for StubDialect {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn data_source(&self) -> &DataSource {
        &self.source
    }

    fn sql_type(&self, column: &mut Column) -> String {
        column.sql_type.name.to_string()
    }

    fn is_reserved(&self, name: &str) -> bool {
        matches!(name.to_uppercase().as_str(), "SELECT" | "USER")
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
            "SELECT 1 WHERE ?=?".to_string(),
            vec![table.to_string(), index.to_string()],
        )
    }

    fn table_check_sql(&self, table: &str) -> CheckSql {
        ("SELECT 1 WHERE ?".to_string(), vec![table.to_string()])
    }

    fn modify_column_sql(&self, table: &str, column: &mut Column) -> String {
        let native = self.sql_type(column);
        format!("ALTER {table} {} {native}", column.name)
    }

    fn drop_index_sql(&self, table: &str, index: &Index) -> String {
        format!("DROP INDEX {}", self.quote(&index.physical_name(table)))
    }

    async fn is_column_exist(&self, _table: &str, column: &str) -> Result<bool> {
        Ok(column == "id")
    }

    async fn get_columns(&self, _table: &str) -> Result<ColumnSet> {
        let mut id = Column::new("id", SqlType::new(SqlTypeName::Serial));
        id.is_primary_key = true;
        let email = Column::new("email", SqlType::new(SqlTypeName::Varchar));

        let order = vec!["id".to_string(), "email".to_string()];
        let columns = HashMap::from([("id".to_string(), id), ("email".to_string(), email)]);
        Ok((order, columns))
    }

    async fn get_tables(&self) -> Result<Vec<Table>> {
        Ok(vec![Table::new("user")])
    }

    async fn get_indexes(&self, _table: &str) -> Result<HashMap<String, Index>> {
        let index = Index::new("email", IndexKind::Unique, vec!["email".to_string()]);
        Ok(HashMap::from([(index.name.clone(), index)]))
    }

    fn filters(&self) -> Vec<Box<dyn Filter>> {
        vec![Box::new(QuoteFilter), Box::new(SeqFilter::new("$", 1))]
    }
}

#[tokio::test]
async fn load_table_populates_columns_and_indexes() {
    let dialect = StubDialect::default();
    let table = dialect.load_table("user").await.unwrap();

    assert_eq!(table.name, "user");
    assert_eq!(table.column_order, vec!["id", "email"]);
    assert_eq!(table.primary_keys(), vec!["id"]);
    assert!(table.indexes.contains_key("email"));
    assert!(table.column("email").unwrap().indexes.contains("email"));
}

#[test]
fn checked_quote_only_quotes_reserved_words() {
    let dialect = StubDialect::default();
    assert_eq!(dialect.checked_quote("select"), "\"select\"");
    assert_eq!(dialect.checked_quote("username"), "username");
}
