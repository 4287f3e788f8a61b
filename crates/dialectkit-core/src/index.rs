use serde::{Deserialize, Serialize};

use crate::naming::physical_index_name;

/// Index kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    Plain,
    Unique,
}

/// Index definition preserving column order.
///
/// `name` is always the logical name; the engine-side name is derived on
/// demand by [`Index::physical_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    pub kind: IndexKind,
    pub cols: Vec<String>,
}

impl Index {
    pub fn new(name: impl Into<String>, kind: IndexKind, cols: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            cols,
        }
    }

    pub fn physical_name(&self, table: &str) -> String {
        physical_index_name(table, &self.name, self.kind)
    }
}
