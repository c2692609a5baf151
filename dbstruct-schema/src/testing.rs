//! In-memory schema source for tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.
//!
//! ```rust,ignore
//! use dbstruct_schema::testing::{MemorySource, column};
//!
//! let source = MemorySource::new()
//!     .table("app_user", "users", vec![
//!         column("id", "bigint(20) unsigned").key("PRI"),
//!         column("name", "varchar(64)").nullable(),
//!     ])
//!     .fail_ddl("app_user");
//! ```

use std::{cell::RefCell, collections::HashSet};

use dbstruct_core::{Error, Result};
use regex::Regex;

use crate::{ColumnRow, SchemaSource, TableRow};

struct MemoryTable {
    row: TableRow,
    ddl: Option<String>,
    columns: Vec<ColumnRow>,
}

/// Schema source holding tables in memory.
///
/// Listings come back sorted by table name, like the catalog queries of the
/// real sources.
#[derive(Default)]
pub struct MemorySource {
    tables: Vec<MemoryTable>,
    failing_ddl: HashSet<String>,
    failing_columns: HashSet<String>,
    failing_listing: bool,
    listings: RefCell<Vec<Option<String>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table. Its DDL defaults to a generated `CREATE TABLE` statement.
    pub fn table(
        mut self,
        name: impl Into<String>,
        comment: impl Into<String>,
        columns: Vec<ColumnRow>,
    ) -> Self {
        self.tables.push(MemoryTable {
            row: TableRow {
                name: name.into(),
                comment: comment.into(),
            },
            ddl: None,
            columns,
        });
        self
    }

    /// Set the DDL of the most recently added table.
    pub fn ddl(mut self, ddl: impl Into<String>) -> Self {
        if let Some(table) = self.tables.last_mut() {
            table.ddl = Some(ddl.into());
        }
        self
    }

    /// Make the create-table statement of a table fail.
    pub fn fail_ddl(mut self, table: impl Into<String>) -> Self {
        self.failing_ddl.insert(table.into());
        self
    }

    /// Make the column listing of a table fail.
    pub fn fail_columns(mut self, table: impl Into<String>) -> Self {
        self.failing_columns.insert(table.into());
        self
    }

    /// Make every table listing fail.
    pub fn fail_listing(mut self) -> Self {
        self.failing_listing = true;
        self
    }

    /// Patterns of every table listing issued so far, in order.
    pub fn listings(&self) -> Vec<Option<String>> {
        self.listings.borrow().clone()
    }

    fn find(&self, name: &str) -> Result<&MemoryTable> {
        self.tables
            .iter()
            .find(|t| t.row.name == name)
            .ok_or_else(|| Error::query(format!("loading '{}'", name), "table doesn't exist"))
    }
}

impl SchemaSource for MemorySource {
    fn tables(&self, pattern: Option<&str>) -> Result<Vec<TableRow>> {
        self.listings.borrow_mut().push(pattern.map(str::to_string));
        if self.failing_listing {
            return Err(Error::query("listing tables", "simulated failure"));
        }

        let matcher = pattern.map(like_to_regex).transpose()?;
        let mut rows: Vec<TableRow> = self
            .tables
            .iter()
            .filter(|t| matcher.as_ref().is_none_or(|re| re.is_match(&t.row.name)))
            .map(|t| t.row.clone())
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnRow>> {
        if self.failing_columns.contains(table) {
            return Err(Error::query(
                format!("loading columns of '{}'", table),
                "simulated failure",
            ));
        }
        Ok(self.find(table)?.columns.clone())
    }

    fn create_table(&self, table: &str) -> Result<String> {
        if self.failing_ddl.contains(table) {
            return Err(Error::query(
                format!("reading create statement of '{}'", table),
                "simulated failure",
            ));
        }
        let table = self.find(table)?;
        Ok(table.ddl.clone().unwrap_or_else(|| render_ddl(table)))
    }
}

fn render_ddl(table: &MemoryTable) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| {
            let null = if c.is_nullable == "YES" { "" } else { " NOT NULL" };
            format!("  `{}` {}{}", c.name, c.column_type, null)
        })
        .collect();
    format!(
        "CREATE TABLE `{}` (\n{}\n)",
        table.row.name,
        columns.join(",\n")
    )
}

/// Translate a SQL `LIKE` pattern into an anchored regex.
fn like_to_regex(pattern: &str) -> Result<Regex> {
    let mut re = String::from("^");
    for c in pattern.chars() {
        match c {
            '%' => re.push_str(".*"),
            '_' => re.push('.'),
            c => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');
    Regex::new(&re).map_err(|e| Error::query(format!("compiling pattern '{}'", pattern), e))
}

/// Start building a non-null column without key.
pub fn column(name: impl Into<String>, column_type: impl Into<String>) -> ColumnRow {
    let column_type = column_type.into();
    let data_type = column_type
        .split(['(', ' '])
        .next()
        .unwrap_or_default()
        .to_string();
    ColumnRow {
        name: name.into(),
        default: None,
        is_nullable: "NO".to_string(),
        data_type,
        column_type,
        column_key: String::new(),
        extra: String::new(),
        comment: String::new(),
    }
}

impl ColumnRow {
    pub fn nullable(mut self) -> Self {
        self.is_nullable = "YES".to_string();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.column_key = key.into();
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MemorySource {
        MemorySource::new()
            .table("app_user", "", vec![column("id", "int(11)")])
            .table("app_log", "", vec![])
            .table("apple", "", vec![])
            .table("sys_config", "", vec![])
    }

    fn names(rows: Vec<TableRow>) -> Vec<String> {
        rows.into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_like_matching() {
        let source = source();
        assert_eq!(
            names(source.tables(Some("app_%")).unwrap()),
            vec!["app_log", "app_user", "apple"]
        );
        assert_eq!(
            names(source.tables(Some("sys_config")).unwrap()),
            vec!["sys_config"]
        );
        assert_eq!(source.tables(None).unwrap().len(), 4);
    }

    #[test]
    fn test_listings_recorded() {
        let source = source();
        source.tables(None).unwrap();
        source.tables(Some("a%")).unwrap();
        assert_eq!(source.listings(), vec![None, Some("a%".to_string())]);
    }

    #[test]
    fn test_generated_ddl() {
        let source = source();
        assert_eq!(
            source.create_table("app_user").unwrap(),
            "CREATE TABLE `app_user` (\n  `id` int(11) NOT NULL\n)"
        );
    }

    #[test]
    fn test_injected_failures() {
        let source = source().fail_ddl("app_user").fail_columns("apple");
        assert!(source.tables(None).is_ok());
        assert!(source.create_table("app_user").is_err());
        assert!(source.columns("apple").is_err());
        assert!(source.columns("missing").is_err());

        let source = self::source().fail_listing();
        assert!(source.tables(Some("app_%")).is_err());
        assert_eq!(source.listings(), vec![Some("app_%".to_string())]);
    }

    #[test]
    fn test_column_builder() {
        let col = column("id", "bigint(20) unsigned").key("PRI").nullable();
        assert_eq!(col.data_type, "bigint");
        assert_eq!(col.column_key, "PRI");
        assert_eq!(col.is_nullable, "YES");
    }
}
