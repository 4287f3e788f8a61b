use sqlx::PgPool;

use dialectkit_core::Result;

pub const TABLE_CHECK_SQL: &str = "SELECT tablename FROM pg_tables WHERE tablename=?";

pub const INDEX_CHECK_SQL: &str =
    "SELECT indexname FROM pg_indexes WHERE tablename=? AND indexname=?";

const COLUMN_EXISTS_SQL: &str = "SELECT column_name FROM INFORMATION_SCHEMA.COLUMNS \
     WHERE table_name~*$1 AND column_name~*$2";

// numeric_precision, numeric_precision_radix and uniquekey are not mapped;
// they stay in the select list to keep the catalog row shape stable.
const COLUMNS_SQL: &str = r#"
SELECT s.column_name::text AS column_name,
    s.column_default::text AS column_default,
    s.is_nullable::text AS is_nullable,
    s.data_type::text AS data_type,
    s.character_maximum_length::text AS character_maximum_length,
    s.numeric_precision::text AS numeric_precision,
    s.numeric_precision_radix::text AS numeric_precision_radix,
    CASE WHEN p.contype='p' THEN true ELSE false END AS primarykey,
    CASE WHEN p.contype='u' THEN true ELSE false END AS uniquekey
FROM pg_attribute f
    JOIN pg_class c ON c.oid=f.attrelid JOIN pg_type t ON t.oid=f.atttypid
    LEFT JOIN pg_attrdef d ON d.adrelid=c.oid AND d.adnum=f.attnum
    JOIN pg_namespace n ON n.oid=c.relnamespace
    LEFT JOIN pg_constraint p ON p.conrelid=c.oid AND f.attnum = ANY (p.conkey)
    LEFT JOIN pg_class AS g ON p.confrelid=g.oid
    LEFT JOIN INFORMATION_SCHEMA.COLUMNS s ON s.column_name=f.attname AND c.relname=s.table_name
        AND s.table_schema=n.nspname
WHERE c.relkind='r'::char AND n.nspname='public' AND c.relname=$1
    AND f.attnum > 0 AND NOT f.attisdropped
ORDER BY f.attnum
"#;

const TABLES_SQL: &str = "SELECT tablename::text AS name FROM pg_tables WHERE schemaname='public'";

const INDEXES_SQL: &str = "SELECT indexname::text AS name, indexdef AS definition \
     FROM pg_indexes WHERE schemaname='public' AND tablename=$1";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawColumn {
    pub column_name: String,
    pub column_default: Option<String>,
    pub is_nullable: String,
    pub data_type: String,
    pub character_maximum_length: Option<String>,
    pub primarykey: bool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawIndex {
    pub name: String,
    pub definition: String,
}

pub async fn column_exists(pool: &PgPool, table: &str, column: &str) -> Result<bool> {
    tracing::debug!(event = "catalog_query", query = "column_exists", table, column);

    let row = sqlx::query(COLUMN_EXISTS_SQL)
        .bind(format!("^{table}$"))
        .bind(format!("^{column}$"))
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn list_columns(pool: &PgPool, table: &str) -> Result<Vec<RawColumn>> {
    tracing::debug!(event = "catalog_query", query = "columns", table);

    let rows = sqlx::query_as::<_, RawColumn>(COLUMNS_SQL)
        .bind(table)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn list_tables(pool: &PgPool) -> Result<Vec<String>> {
    tracing::debug!(event = "catalog_query", query = "tables");

    let names = sqlx::query_scalar::<_, String>(TABLES_SQL)
        .fetch_all(pool)
        .await?;
    Ok(names)
}

pub async fn list_indexes(pool: &PgPool, table: &str) -> Result<Vec<RawIndex>> {
    tracing::debug!(event = "catalog_query", query = "indexes", table);

    let rows = sqlx::query_as::<_, RawIndex>(INDEXES_SQL)
        .bind(table)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
