//! Core contracts for dialectkit.
//!
//! This crate defines the vendor-neutral schema model, the [`Dialect`]
//! capability contract implemented once per engine, the index naming
//! convention, the statement filter pipeline and the dialect registry.

pub mod dialect;
pub mod error;
pub mod filter;
pub mod index;
pub mod naming;
pub mod registry;
pub mod schema;
pub mod types;

#[cfg(test)]
mod testing;

pub use dialect::{CheckSql, ColumnSet, DataSource, Dialect};
pub use error::{Error, Result};
pub use filter::{apply_filters, Filter, IdFilter, QuoteFilter, SeqFilter};
pub use index::{Index, IndexKind};
pub use naming::{logical_index_name, physical_index_name, PLAIN_INDEX_PREFIX, UNIQUE_INDEX_PREFIX};
pub use registry::{DialectFactory, DialectRegistry};
pub use schema::{Column, Table};
pub use types::{SqlType, SqlTypeName, UnknownSqlType};
