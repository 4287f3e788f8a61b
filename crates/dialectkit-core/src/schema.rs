use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::index::Index;
use crate::types::SqlType;

/// Column metadata shared by declared and reflected schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub sql_type: SqlType,
    pub length: u32,
    pub length2: u32,
    pub nullable: bool,
    pub is_primary_key: bool,
    pub is_autoincrement: bool,
    /// Engine-syntax default literal; empty when the column has none.
    pub default: String,
    pub default_is_empty: bool,
    /// Names of the indexes this column participates in.
    pub indexes: BTreeSet<String>,
}

impl Column {
    /// Create a nullable column sized by the type's default lengths.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            length: sql_type.default_length,
            length2: sql_type.default_length2,
            nullable: true,
            is_primary_key: false,
            is_autoincrement: false,
            default: String::new(),
            default_is_empty: false,
            indexes: BTreeSet::new(),
        }
    }
}

/// A table: its columns in physical order plus its indexes.
///
/// `column_order` is the authority on ordering; `columns` is only a lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub column_order: Vec<String>,
    pub columns: HashMap<String, Column>,
    pub indexes: HashMap<String, Index>,
}

impl Table {
    /// A table shell with no columns or indexes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a column. Re-adding a name replaces the column in place.
    pub fn add_column(&mut self, column: Column) {
        if !self.columns.contains_key(&column.name) {
            self.column_order.push(column.name.clone());
        }
        self.columns.insert(column.name.clone(), column);
    }

    /// Register an index and mark its member columns.
    pub fn add_index(&mut self, index: Index) {
        for col_name in &index.cols {
            if let Some(column) = self.columns.get_mut(col_name) {
                column.indexes.insert(index.name.clone());
            }
        }
        self.indexes.insert(index.name.clone(), index);
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Columns in physical order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.column_order
            .iter()
            .filter_map(|name| self.columns.get(name))
    }

    pub fn primary_keys(&self) -> Vec<&str> {
        self.columns()
            .filter(|column| column.is_primary_key)
            .map(|column| column.name.as_str())
            .collect()
    }
}
