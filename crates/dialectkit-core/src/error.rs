use std::num::ParseIntError;

use thiserror::Error;

/// Core error type shared across dialectkit crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The query-execution layer failed (connectivity, syntax, scan).
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// A catalog value could not be converted to the model's type.
    #[error("cannot convert {field} value `{value}`: {source}")]
    Conversion {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// The catalog reported a native type with no generic counterpart.
    #[error("unknown column type `{0}`")]
    UnknownColumnType(String),
    /// An index definition returned by the catalog has no column list.
    #[error("malformed index definition: {0}")]
    MalformedIndexDefinition(String),
    /// No dialect is registered under the requested driver name.
    #[error("unsupported driver: {0}")]
    UnsupportedDriver(String),
    /// The caller supplied an unusable configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn conversion(field: &'static str, value: impl Into<String>, source: ParseIntError) -> Self {
        Error::Conversion {
            field,
            value: value.into(),
            source,
        }
    }
}

/// Convenience alias for results returned by dialectkit crates.
pub type Result<T> = std::result::Result<T, Error>;
