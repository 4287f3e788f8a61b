mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use config::{ConfigError, LogFormat, Overrides, Settings};
use dialectkit_core::{
    apply_filters, Column, Dialect, DialectRegistry, Error as CoreError, Index, IndexKind,
    SqlType, SqlTypeName, Table,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "dialectkit", version, about = "Schema dialect adapter CLI")]
struct Cli {
    /// Optional TOML settings file.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Driver name used to select the dialect.
    #[arg(long, global = true)]
    driver: Option<String>,
    /// Database connection string.
    #[arg(long, global = true, env = "DATABASE_URL", value_name = "CONNECTION_STRING")]
    conn: Option<String>,
    /// Log level or filter directive (error, warn, info, debug, off).
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Emit logs as JSON.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered driver names.
    Drivers,
    /// List tables of the default schema.
    Tables,
    /// Show a table's columns (physical order) and indexes.
    Describe { table: String },
    /// Check whether a column exists (case-insensitive).
    ColumnExists { table: String, column: String },
    /// Print the statement dropping an index.
    DropIndexSql(DropIndexArgs),
    /// Print the statement changing a column's type.
    ModifyColumnSql(ModifyColumnArgs),
    /// Print the filtered table or index existence probe.
    CheckSql {
        table: String,
        #[arg(long)]
        index: Option<String>,
    },
}

#[derive(Args, Debug)]
struct DropIndexArgs {
    table: String,
    /// Logical or already-prefixed index name.
    index: String,
    #[arg(long, default_value_t = false)]
    unique: bool,
}

#[derive(Args, Debug)]
struct ModifyColumnArgs {
    table: String,
    column: String,
    /// Generic SQL type (e.g. VARCHAR, INTEGER, TIMESTAMPZ).
    #[arg(value_parser = parse_sql_type)]
    sql_type: SqlTypeName,
    #[arg(long, default_value_t = 0)]
    length: u32,
    #[arg(long, default_value_t = 0)]
    length2: u32,
    #[arg(long, default_value_t = false)]
    auto_increment: bool,
}

fn parse_sql_type(value: &str) -> Result<SqlTypeName, String> {
    value
        .to_uppercase()
        .parse()
        .map_err(|err: dialectkit_core::UnknownSqlType| err.to_string())
}

#[derive(Debug, Serialize)]
struct TableReport<'a> {
    name: &'a str,
    columns: Vec<&'a Column>,
    indexes: Vec<&'a Index>,
}

impl<'a> TableReport<'a> {
    fn new(table: &'a Table) -> Self {
        let mut indexes: Vec<&Index> = table.indexes.values().collect();
        indexes.sort_by(|left, right| left.name.cmp(&right.name));
        Self {
            name: &table.name,
            columns: table.columns().collect(),
            indexes,
        }
    }
}

fn builtin_registry() -> DialectRegistry {
    let mut registry = DialectRegistry::new();
    dialectkit_postgres::register(&mut registry);
    registry
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?.apply(Overrides {
        driver: cli.driver,
        data_source: cli.conn,
        log_level: cli.log_level,
        log_format: cli.log_json.then_some(LogFormat::Json),
    });
    logging::init_logging(&settings.log_level, settings.log_format).map_err(CliError::Logging)?;

    let registry = builtin_registry();
    if let Command::Drivers = cli.command {
        for name in registry.drivers() {
            println!("{name}");
        }
        return Ok(());
    }

    let source = settings.data_source()?;
    tracing::info!(event = "dialect_opening", driver = %source.driver_name);
    let dialect = registry.open(&source)?;

    run(cli.command, dialect).await
}

async fn run(command: Command, dialect: Arc<dyn Dialect>) -> Result<(), CliError> {
    match command {
        Command::Drivers => {}
        Command::Tables => {
            let names: Vec<String> = dialect
                .get_tables()
                .await?
                .into_iter()
                .map(|table| table.name)
                .collect();
            tracing::info!(event = "tables_listed", count = names.len());
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        Command::Describe { table } => {
            let table = dialect.load_table(&table).await?;
            tracing::info!(
                event = "table_described",
                table = %table.name,
                columns = table.column_order.len(),
                indexes = table.indexes.len()
            );
            println!("{}", serde_json::to_string_pretty(&TableReport::new(&table))?);
        }
        Command::ColumnExists { table, column } => {
            let exists = dialect.is_column_exist(&table, &column).await?;
            println!("{exists}");
        }
        Command::DropIndexSql(args) => {
            let kind = if args.unique {
                IndexKind::Unique
            } else {
                IndexKind::Plain
            };
            let index = Index::new(args.index, kind, Vec::new());
            println!("{}", dialect.drop_index_sql(&args.table, &index));
        }
        Command::ModifyColumnSql(args) => {
            let mut column = Column::new(args.column, SqlType::new(args.sql_type));
            column.length = args.length;
            column.length2 = args.length2;
            column.is_autoincrement = args.auto_increment;
            println!("{}", dialect.modify_column_sql(&args.table, &mut column));
        }
        Command::CheckSql { table, index } => {
            let (sql, params) = match index.as_deref() {
                Some(index) => dialect.index_check_sql(&table, index),
                None => dialect.table_check_sql(&table),
            };
            let filters = dialect.filters();
            println!("{}", apply_filters(&filters, &sql, dialect.as_ref(), None));
            println!("-- params: {}", serde_json::to_string(&params)?);
        }
    }

    Ok(())
}
