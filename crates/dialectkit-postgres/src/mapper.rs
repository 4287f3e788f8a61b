use std::collections::HashMap;

use dialectkit_core::{
    logical_index_name, Column, ColumnSet, Error, Index, IndexKind, Result, SqlType, SqlTypeName,
    Table,
};

use crate::queries::{RawColumn, RawIndex};

pub const PRIMARY_KEY_SUFFIX: &str = "_pkey";
pub const SEQUENCE_DEFAULT_PREFIX: &str = "nextval(";
pub const UNIQUE_INDEX_DEFINITION_PREFIX: &str = "CREATE UNIQUE INDEX";

const TRIM_CHARS: &[char] = &['"', ' '];

/// Translate a catalog `data_type` into a generic SQL type.
pub fn map_data_type(data_type: &str) -> Result<SqlType> {
    let name = match data_type {
        "character varying" | "character" => SqlTypeName::Varchar,
        "timestamp without time zone" => SqlTypeName::DateTime,
        "timestamp with time zone" => SqlTypeName::TimeStampz,
        "double precision" => SqlTypeName::Double,
        "boolean" => SqlTypeName::Bool,
        "time without time zone" => SqlTypeName::Time,
        other => other
            .to_uppercase()
            .parse()
            .map_err(|_| Error::UnknownColumnType(data_type.to_string()))?,
    };
    Ok(SqlType::new(name))
}

fn parse_length(field: &'static str, raw: Option<&str>) -> Result<u32> {
    match raw {
        None => Ok(0),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err| Error::conversion(field, value, err)),
    }
}

pub fn map_column(raw: RawColumn) -> Result<Column> {
    let sql_type = map_data_type(&raw.data_type)?;
    let length = parse_length(
        "character_maximum_length",
        raw.character_maximum_length.as_deref(),
    )?;

    let mut column = Column::new(raw.column_name.trim_matches(TRIM_CHARS), sql_type);
    column.length = length;
    column.nullable = raw.is_nullable == "YES";

    if raw.primarykey {
        column.is_primary_key = true;
    } else if let Some(default) = &raw.column_default {
        column.default = default.clone();
    }

    if raw
        .column_default
        .as_deref()
        .is_some_and(|default| default.starts_with(SEQUENCE_DEFAULT_PREFIX))
    {
        column.is_autoincrement = true;
    }

    quote_default_literal(&mut column);
    Ok(column)
}

/// Turn a text or time default into a SQL string literal.
///
/// Catalog rows never set `default_is_empty`; the `''` case only applies to
/// columns whose flag was set by the caller.
pub fn quote_default_literal(column: &mut Column) {
    if !(column.sql_type.is_text() || column.sql_type.is_time()) {
        return;
    }
    if !column.default.is_empty() {
        column.default = format!("'{}'", column.default);
    } else if column.default_is_empty {
        column.default = "''".to_string();
    }
}

/// Map catalog rows (ordered by attribute number) into a column set.
///
/// A column bound by several constraints comes back once per constraint;
/// later rows are folded into the first one so the order stays physical.
pub fn map_columns(raw: Vec<RawColumn>) -> Result<ColumnSet> {
    let mut order = Vec::with_capacity(raw.len());
    let mut columns: HashMap<String, Column> = HashMap::with_capacity(raw.len());

    for row in raw {
        let column = map_column(row)?;
        match columns.get_mut(&column.name) {
            Some(existing) => {
                tracing::debug!(event = "duplicate_catalog_row", column = %column.name);
                if column.is_primary_key && !existing.is_primary_key {
                    existing.is_primary_key = true;
                    existing.default.clear();
                }
            }
            None => {
                order.push(column.name.clone());
                columns.insert(column.name.clone(), column);
            }
        }
    }

    Ok((order, columns))
}

pub fn map_tables(names: Vec<String>) -> Vec<Table> {
    names.into_iter().map(Table::new).collect()
}

/// Kind and column list of a `pg_indexes.indexdef` string.
///
/// This is a textual read of the first parenthesised group, not a DDL
/// parser: expressions, or quoted names containing `(`, `)` or `,`, are not
/// handled.
pub fn parse_index_definition(definition: &str) -> Result<(IndexKind, Vec<String>)> {
    let kind = if definition.starts_with(UNIQUE_INDEX_DEFINITION_PREFIX) {
        IndexKind::Unique
    } else {
        IndexKind::Plain
    };

    let group = definition
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(inside, _)| inside)
        .ok_or_else(|| Error::MalformedIndexDefinition(definition.to_string()))?;

    let cols = group
        .split(',')
        .map(|col| col.trim_matches(TRIM_CHARS).to_string())
        .collect();

    Ok((kind, cols))
}

/// Map `pg_indexes` rows into indexes keyed by logical name.
pub fn map_indexes(table: &str, raw: Vec<RawIndex>) -> Result<HashMap<String, Index>> {
    let mut indexes = HashMap::with_capacity(raw.len());

    for row in raw {
        let physical = row.name.trim_matches(TRIM_CHARS);
        if physical.ends_with(PRIMARY_KEY_SUFFIX) {
            continue;
        }

        let (kind, cols) = parse_index_definition(&row.definition)?;
        let name = logical_index_name(physical, table);
        indexes.insert(name.clone(), Index::new(name, kind, cols));
    }

    Ok(indexes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_column(name: &str, data_type: &str) -> RawColumn {
        RawColumn {
            column_name: name.to_string(),
            column_default: None,
            is_nullable: "YES".to_string(),
            data_type: data_type.to_string(),
            character_maximum_length: None,
            primarykey: false,
        }
    }

    fn raw_index(name: &str, definition: &str) -> RawIndex {
        RawIndex {
            name: name.to_string(),
            definition: definition.to_string(),
        }
    }

    #[test]
    fn maps_catalog_type_names() {
        let cases = [
            ("character varying", SqlTypeName::Varchar),
            ("character", SqlTypeName::Varchar),
            ("timestamp without time zone", SqlTypeName::DateTime),
            ("timestamp with time zone", SqlTypeName::TimeStampz),
            ("double precision", SqlTypeName::Double),
            ("boolean", SqlTypeName::Bool),
            ("time without time zone", SqlTypeName::Time),
            ("integer", SqlTypeName::Integer),
            ("bigint", SqlTypeName::BigInt),
            ("text", SqlTypeName::Text),
            ("bytea", SqlTypeName::Bytea),
            ("numeric", SqlTypeName::Numeric),
        ];
        for (native, expected) in cases {
            assert_eq!(map_data_type(native).unwrap().name, expected, "{native}");
        }
    }

    #[test]
    fn unknown_catalog_type_fails() {
        let err = map_data_type("jsonb").unwrap_err();
        assert!(matches!(err, Error::UnknownColumnType(ref name) if name == "jsonb"));

        let err = map_columns(vec![raw_column("id", "integer"), raw_column("doc", "jsonb")])
            .unwrap_err();
        assert!(matches!(err, Error::UnknownColumnType(_)));
    }

    #[test]
    fn keeps_catalog_order() {
        let names = ["zeta", "alpha", "mid", "beta", "omega"];
        let raw = names
            .iter()
            .map(|name| raw_column(name, "integer"))
            .collect();
        let (order, columns) = map_columns(raw).unwrap();
        assert_eq!(order, names);
        assert_eq!(columns.len(), names.len());
    }

    #[test]
    fn primary_key_drops_default_and_serial_is_auto_increment() {
        let mut id = raw_column("id", "integer");
        id.primarykey = true;
        id.is_nullable = "NO".to_string();
        id.column_default = Some("nextval('user_id_seq'::regclass)".to_string());

        let column = map_column(id).unwrap();
        assert!(column.is_primary_key);
        assert!(column.is_autoincrement);
        assert!(!column.nullable);
        assert_eq!(column.default, "");
    }

    #[test]
    fn text_and_time_defaults_are_quoted() {
        let mut name = raw_column("name", "character varying");
        name.column_default = Some("anon".to_string());
        name.character_maximum_length = Some("64".to_string());
        let column = map_column(name).unwrap();
        assert_eq!(column.default, "'anon'");
        assert_eq!(column.length, 64);

        let mut created = raw_column("created", "timestamp without time zone");
        created.column_default = Some("2020-01-01".to_string());
        assert_eq!(map_column(created).unwrap().default, "'2020-01-01'");

        let mut count = raw_column("count", "integer");
        count.column_default = Some("0".to_string());
        assert_eq!(map_column(count).unwrap().default, "0");
    }

    #[test]
    fn empty_default_flag_yields_empty_literal() {
        let mut nick = Column::new("nick", SqlType::new(SqlTypeName::Varchar));
        nick.default_is_empty = true;
        quote_default_literal(&mut nick);
        assert_eq!(nick.default, "''");

        let mut unflagged = Column::new("nick", SqlType::new(SqlTypeName::Text));
        quote_default_literal(&mut unflagged);
        assert_eq!(unflagged.default, "");

        let mut count = Column::new("count", SqlType::new(SqlTypeName::Integer));
        count.default_is_empty = true;
        quote_default_literal(&mut count);
        assert_eq!(count.default, "");
    }

    #[test]
    fn trims_quote_artifacts_from_names() {
        let column = map_column(raw_column("\"order\" ", "integer")).unwrap();
        assert_eq!(column.name, "order");
    }

    #[test]
    fn malformed_length_is_a_conversion_error() {
        let mut row = raw_column("name", "character varying");
        row.character_maximum_length = Some("12x".to_string());
        let err = map_column(row).unwrap_err();
        assert!(matches!(
            err,
            Error::Conversion { field: "character_maximum_length", .. }
        ));
    }

    #[test]
    fn folds_rows_repeated_per_constraint() {
        let plain = raw_column("id", "integer");
        let mut pk = raw_column("id", "integer");
        pk.primarykey = true;

        let (order, columns) =
            map_columns(vec![plain, pk, raw_column("email", "text")]).unwrap();
        assert_eq!(order, vec!["id", "email"]);
        assert!(columns["id"].is_primary_key);
    }

    #[test]
    fn parses_unique_index_definition() {
        let (kind, cols) =
            parse_index_definition("CREATE UNIQUE INDEX idx on public.user (email, phone)")
                .unwrap();
        assert_eq!(kind, IndexKind::Unique);
        assert_eq!(cols, vec!["email", "phone"]);
    }

    #[test]
    fn parses_plain_index_with_method_and_predicate() {
        let (kind, cols) = parse_index_definition(
            "CREATE INDEX \"IDX_user_created\" ON public.\"user\" USING btree (\"created\") WHERE (active)",
        )
        .unwrap();
        assert_eq!(kind, IndexKind::Plain);
        assert_eq!(cols, vec!["created"]);
    }

    #[test]
    fn definition_without_columns_is_rejected() {
        let err = parse_index_definition("CREATE INDEX broken").unwrap_err();
        assert!(matches!(err, Error::MalformedIndexDefinition(_)));
    }

    #[test]
    fn index_mapping_skips_primary_keys_and_recovers_logical_names() {
        let rows = vec![
            raw_index("user_pkey", "CREATE UNIQUE INDEX user_pkey ON public.\"user\" USING btree (id)"),
            raw_index(
                "UQE_user_email",
                "CREATE UNIQUE INDEX \"UQE_user_email\" ON public.\"user\" USING btree (email)",
            ),
            raw_index(
                "IDX_user_name_age",
                "CREATE INDEX \"IDX_user_name_age\" ON public.\"user\" USING btree (name, age)",
            ),
            raw_index(
                "manual_idx",
                "CREATE INDEX manual_idx ON public.\"user\" USING btree (nick)",
            ),
        ];

        let indexes = map_indexes("user", rows).unwrap();
        assert_eq!(indexes.len(), 3);
        assert!(indexes.keys().all(|name| !name.ends_with(PRIMARY_KEY_SUFFIX)));

        let email = &indexes["email"];
        assert_eq!(email.kind, IndexKind::Unique);
        assert_eq!(email.cols, vec!["email"]);

        let name_age = &indexes["name_age"];
        assert_eq!(name_age.kind, IndexKind::Plain);
        assert_eq!(name_age.cols, vec!["name", "age"]);

        assert_eq!(indexes["manual_idx"].cols, vec!["nick"]);
    }

    #[test]
    fn table_shells_have_no_columns() {
        let tables = map_tables(vec!["user".to_string(), "orders".to_string()]);
        assert_eq!(tables.len(), 2);
        assert!(tables.iter().all(|table| table.columns.is_empty()));
        assert_eq!(tables[1].name, "orders");
    }
}
