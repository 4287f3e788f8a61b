use dialectkit_core::{Column, SqlTypeName};

/// Render the PostgreSQL type for a column's generic type.
///
/// Side effect: a `SERIAL`/`BIGSERIAL` column is marked auto-increment and
/// NOT NULL, since the serial types imply both.
pub fn sql_type(column: &mut Column) -> String {
    let name = column.sql_type.name;
    let base = match name {
        SqlTypeName::TinyInt => return SqlTypeName::SmallInt.to_string(),
        SqlTypeName::MediumInt | SqlTypeName::Int | SqlTypeName::Integer => {
            return if column.is_autoincrement {
                SqlTypeName::Serial.to_string()
            } else {
                SqlTypeName::Integer.to_string()
            };
        }
        SqlTypeName::Serial | SqlTypeName::BigSerial => {
            column.is_autoincrement = true;
            column.nullable = false;
            name.as_str()
        }
        SqlTypeName::Binary | SqlTypeName::VarBinary => return SqlTypeName::Bytea.to_string(),
        SqlTypeName::DateTime => SqlTypeName::TimeStamp.as_str(),
        SqlTypeName::TimeStampz => return "timestamp with time zone".to_string(),
        SqlTypeName::Float => SqlTypeName::Real.as_str(),
        SqlTypeName::TinyText | SqlTypeName::MediumText | SqlTypeName::LongText => {
            SqlTypeName::Text.as_str()
        }
        SqlTypeName::Uuid => SqlTypeName::Uuid.as_str(),
        SqlTypeName::Blob
        | SqlTypeName::TinyBlob
        | SqlTypeName::MediumBlob
        | SqlTypeName::LongBlob => return SqlTypeName::Bytea.to_string(),
        SqlTypeName::Double => return "DOUBLE PRECISION".to_string(),
        _ if column.is_autoincrement => return SqlTypeName::Serial.to_string(),
        other => other.as_str(),
    };

    if column.length2 > 0 {
        format!("{base}({},{})", column.length, column.length2)
    } else if column.length > 0 {
        format!("{base}({})", column.length)
    } else {
        base.to_string()
    }
}
