use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Engine-neutral SQL type names used by the schema model.
///
/// The string form is the uppercase keyword; [`FromStr`] accepts exactly
/// those keywords, which makes this enum the authority on whether a name is
/// a known generic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlTypeName {
    Bit,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
    Enum,
    Set,
    Char,
    Varchar,
    NVarchar,
    TinyText,
    Text,
    MediumText,
    LongText,
    Clob,
    Uuid,
    Date,
    DateTime,
    Time,
    TimeStamp,
    TimeStampz,
    Decimal,
    Numeric,
    Real,
    Float,
    Double,
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Bytea,
    Bool,
    Serial,
    BigSerial,
}

impl SqlTypeName {
    pub const ALL: [SqlTypeName; 38] = [
        SqlTypeName::Bit,
        SqlTypeName::TinyInt,
        SqlTypeName::SmallInt,
        SqlTypeName::MediumInt,
        SqlTypeName::Int,
        SqlTypeName::Integer,
        SqlTypeName::BigInt,
        SqlTypeName::Enum,
        SqlTypeName::Set,
        SqlTypeName::Char,
        SqlTypeName::Varchar,
        SqlTypeName::NVarchar,
        SqlTypeName::TinyText,
        SqlTypeName::Text,
        SqlTypeName::MediumText,
        SqlTypeName::LongText,
        SqlTypeName::Clob,
        SqlTypeName::Uuid,
        SqlTypeName::Date,
        SqlTypeName::DateTime,
        SqlTypeName::Time,
        SqlTypeName::TimeStamp,
        SqlTypeName::TimeStampz,
        SqlTypeName::Decimal,
        SqlTypeName::Numeric,
        SqlTypeName::Real,
        SqlTypeName::Float,
        SqlTypeName::Double,
        SqlTypeName::Binary,
        SqlTypeName::VarBinary,
        SqlTypeName::TinyBlob,
        SqlTypeName::Blob,
        SqlTypeName::MediumBlob,
        SqlTypeName::LongBlob,
        SqlTypeName::Bytea,
        SqlTypeName::Bool,
        SqlTypeName::Serial,
        SqlTypeName::BigSerial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SqlTypeName::Bit => "BIT",
            SqlTypeName::TinyInt => "TINYINT",
            SqlTypeName::SmallInt => "SMALLINT",
            SqlTypeName::MediumInt => "MEDIUMINT",
            SqlTypeName::Int => "INT",
            SqlTypeName::Integer => "INTEGER",
            SqlTypeName::BigInt => "BIGINT",
            SqlTypeName::Enum => "ENUM",
            SqlTypeName::Set => "SET",
            SqlTypeName::Char => "CHAR",
            SqlTypeName::Varchar => "VARCHAR",
            SqlTypeName::NVarchar => "NVARCHAR",
            SqlTypeName::TinyText => "TINYTEXT",
            SqlTypeName::Text => "TEXT",
            SqlTypeName::MediumText => "MEDIUMTEXT",
            SqlTypeName::LongText => "LONGTEXT",
            SqlTypeName::Clob => "CLOB",
            SqlTypeName::Uuid => "UUID",
            SqlTypeName::Date => "DATE",
            SqlTypeName::DateTime => "DATETIME",
            SqlTypeName::Time => "TIME",
            SqlTypeName::TimeStamp => "TIMESTAMP",
            SqlTypeName::TimeStampz => "TIMESTAMPZ",
            SqlTypeName::Decimal => "DECIMAL",
            SqlTypeName::Numeric => "NUMERIC",
            SqlTypeName::Real => "REAL",
            SqlTypeName::Float => "FLOAT",
            SqlTypeName::Double => "DOUBLE",
            SqlTypeName::Binary => "BINARY",
            SqlTypeName::VarBinary => "VARBINARY",
            SqlTypeName::TinyBlob => "TINYBLOB",
            SqlTypeName::Blob => "BLOB",
            SqlTypeName::MediumBlob => "MEDIUMBLOB",
            SqlTypeName::LongBlob => "LONGBLOB",
            SqlTypeName::Bytea => "BYTEA",
            SqlTypeName::Bool => "BOOL",
            SqlTypeName::Serial => "SERIAL",
            SqlTypeName::BigSerial => "BIGSERIAL",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            SqlTypeName::Char
                | SqlTypeName::Varchar
                | SqlTypeName::NVarchar
                | SqlTypeName::TinyText
                | SqlTypeName::Text
                | SqlTypeName::MediumText
                | SqlTypeName::LongText
                | SqlTypeName::Clob
                | SqlTypeName::Enum
                | SqlTypeName::Set
                | SqlTypeName::Uuid
        )
    }

    pub fn is_time(self) -> bool {
        matches!(
            self,
            SqlTypeName::Date
                | SqlTypeName::DateTime
                | SqlTypeName::Time
                | SqlTypeName::TimeStamp
                | SqlTypeName::TimeStampz
        )
    }
}

impl fmt::Display for SqlTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the generic type keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSqlType(pub String);

impl fmt::Display for UnknownSqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sql type `{}`", self.0)
    }
}

impl std::error::Error for UnknownSqlType {}

impl FromStr for SqlTypeName {
    type Err = UnknownSqlType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SqlTypeName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownSqlType(s.to_string()))
    }
}

/// A generic SQL type with its optional size parameters.
///
/// Two types compare equal when their names match; the default lengths are
/// hints for new columns, not part of the type's identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SqlType {
    pub name: SqlTypeName,
    pub default_length: u32,
    pub default_length2: u32,
}

impl SqlType {
    pub fn new(name: SqlTypeName) -> Self {
        Self {
            name,
            default_length: 0,
            default_length2: 0,
        }
    }

    pub fn with_lengths(name: SqlTypeName, default_length: u32, default_length2: u32) -> Self {
        Self {
            name,
            default_length,
            default_length2,
        }
    }

    pub fn is_text(&self) -> bool {
        self.name.is_text()
    }

    pub fn is_time(&self) -> bool {
        self.name.is_time()
    }
}

impl PartialEq for SqlType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SqlType {}

impl From<SqlTypeName> for SqlType {
    fn from(name: SqlTypeName) -> Self {
        SqlType::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_parses_back() {
        for name in SqlTypeName::ALL {
            assert_eq!(name.as_str().parse::<SqlTypeName>(), Ok(name));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("varchar".parse::<SqlTypeName>().is_err());
        assert!("JSONB".parse::<SqlTypeName>().is_err());
        assert_eq!("TIMESTAMPZ".parse(), Ok(SqlTypeName::TimeStampz));
    }

    #[test]
    fn equality_ignores_lengths() {
        let short = SqlType::with_lengths(SqlTypeName::Varchar, 32, 0);
        let long = SqlType::with_lengths(SqlTypeName::Varchar, 255, 0);
        assert_eq!(short, long);
        assert_ne!(short, SqlType::new(SqlTypeName::Text));
    }

    #[test]
    fn categories() {
        assert!(SqlTypeName::Uuid.is_text());
        assert!(SqlTypeName::TimeStampz.is_time());
        assert!(!SqlTypeName::Bytea.is_text());
        assert!(!SqlTypeName::Bool.is_time());
    }
}
