//! MySQL schema source.
//!
//! Reads `information_schema` through SQLx. The async pool is driven from a
//! private current-thread runtime so callers stay synchronous.

use std::time::Duration;

use dbstruct_core::{DatabaseType, Error, Result};
use sqlx::{
    MySql, Row,
    mysql::{MySqlArguments, MySqlPool, MySqlPoolOptions, MySqlRow},
    query::Query,
};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use crate::{ColumnRow, SchemaSource, TableRow, dsn};

const MAX_CONNECTIONS: u32 = 10;
const MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);
/// Connection pool timeout.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

const TABLES_QUERY: &str = r#"
    SELECT
        CAST(TABLE_NAME AS CHAR) AS table_name,
        CAST(COALESCE(TABLE_COMMENT, '') AS CHAR) AS table_comment
    FROM INFORMATION_SCHEMA.TABLES
    WHERE TABLE_SCHEMA = DATABASE()
"#;

const COLUMNS_QUERY: &str = r#"
    SELECT
        CAST(COLUMN_NAME AS CHAR) AS column_name,
        CAST(COLUMN_DEFAULT AS CHAR) AS column_default,
        CAST(IS_NULLABLE AS CHAR) AS is_nullable,
        CAST(DATA_TYPE AS CHAR) AS data_type,
        CAST(COLUMN_TYPE AS CHAR) AS column_type,
        CAST(COLUMN_KEY AS CHAR) AS column_key,
        CAST(EXTRA AS CHAR) AS extra,
        CAST(COALESCE(COLUMN_COMMENT, '') AS CHAR) AS column_comment
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
    ORDER BY ORDINAL_POSITION
"#;

type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// MySQL schema source backed by a connection pool.
pub struct MySqlSource {
    pool: MySqlPool,
    runtime: Runtime,
}

impl MySqlSource {
    /// Connect and verify the connection with a ping.
    pub fn connect(dsn: &str) -> Result<Self> {
        let options = dsn::connect_options(dsn)?;
        let database = DatabaseType::Mysql.display_name();

        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::connection(database, e))?;

        let pool = runtime
            .block_on(async {
                let pool = MySqlPoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .min_connections(0)
                    .max_lifetime(MAX_LIFETIME)
                    .acquire_timeout(ACQUIRE_TIMEOUT)
                    .connect_with(options)
                    .await?;

                // Test connection
                sqlx::query("SELECT 1").fetch_one(&pool).await?;
                Ok::<_, sqlx::Error>(pool)
            })
            .map_err(|e| Error::connection(database, e))?;

        info!(dsn = %dsn::redact(dsn), "connected to MySQL");
        Ok(Self { pool, runtime })
    }

    /// Quote a MySQL identifier.
    fn quote_ident(name: &str) -> String {
        format!("`{}`", name.replace('`', "``"))
    }

    fn fetch_all(&self, query: MySqlQuery<'_>, context: &str) -> Result<Vec<MySqlRow>> {
        self.runtime
            .block_on(query.fetch_all(&self.pool))
            .map_err(|e| Error::query(context, e))
    }
}

impl SchemaSource for MySqlSource {
    fn tables(&self, pattern: Option<&str>) -> Result<Vec<TableRow>> {
        let sql = match pattern {
            Some(_) => format!("{} AND TABLE_NAME LIKE ? ORDER BY TABLE_NAME", TABLES_QUERY),
            None => format!("{} ORDER BY TABLE_NAME", TABLES_QUERY),
        };
        let mut query = sqlx::query(&sql);
        if let Some(pattern) = pattern {
            query = query.bind(pattern);
        }

        let rows = self.fetch_all(query, "listing tables")?;
        debug!(?pattern, count = rows.len(), "listed tables");

        rows.iter()
            .map(|row| -> std::result::Result<_, sqlx::Error> {
                Ok(TableRow {
                    name: row.try_get("table_name")?,
                    comment: row.try_get("table_comment")?,
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::query("reading table list", e))
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnRow>> {
        let context = format!("loading columns of '{}'", table);
        let rows = self.fetch_all(sqlx::query(COLUMNS_QUERY).bind(table), &context)?;

        rows.iter()
            .map(|row| -> std::result::Result<_, sqlx::Error> {
                Ok(ColumnRow {
                    name: row.try_get("column_name")?,
                    default: row.try_get("column_default")?,
                    is_nullable: row.try_get("is_nullable")?,
                    data_type: row.try_get("data_type")?,
                    column_type: row.try_get("column_type")?,
                    column_key: row.try_get("column_key")?,
                    extra: row.try_get("extra")?,
                    comment: row.try_get("column_comment")?,
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::query(context, e))
    }

    fn create_table(&self, table: &str) -> Result<String> {
        let context = format!("reading create statement of '{}'", table);
        let sql = format!("SHOW CREATE TABLE {}", Self::quote_ident(table));

        let row = self
            .runtime
            .block_on(sqlx::query(&sql).fetch_one(&self.pool))
            .map_err(|e| Error::query(context.as_str(), e))?;

        // Second column holds the statement; the first repeats the table name.
        row.try_get::<String, _>(1)
            .map_err(|e| Error::query(context, e))
    }
}

impl Drop for MySqlSource {
    fn drop(&mut self) {
        self.runtime.block_on(self.pool.close());
    }
}
