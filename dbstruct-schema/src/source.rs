//! The narrow interface between introspection and a database driver.

use dbstruct_core::Result;

/// A table as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    /// Table comment, empty when none was set.
    pub comment: String,
}

/// Raw column metadata as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    pub name: String,
    pub default: Option<String>,
    /// `YES` or `NO`.
    pub is_nullable: String,
    pub data_type: String,
    /// Full column type (e.g., "bigint(20) unsigned").
    pub column_type: String,
    /// `PRI`, `UNI`, `MUL` or empty.
    pub column_key: String,
    pub extra: String,
    pub comment: String,
}

/// Source of schema metadata.
///
/// Implementations are driven sequentially from a single thread.
pub trait SchemaSource {
    /// List tables of the active schema, optionally restricted by a `LIKE` pattern.
    fn tables(&self, pattern: Option<&str>) -> Result<Vec<TableRow>>;

    /// List columns of a table in declaration order.
    fn columns(&self, table: &str) -> Result<Vec<ColumnRow>>;

    /// The `CREATE TABLE` statement of a table.
    fn create_table(&self, table: &str) -> Result<String>;
}

impl<S: SchemaSource + ?Sized> SchemaSource for &S {
    fn tables(&self, pattern: Option<&str>) -> Result<Vec<TableRow>> {
        (**self).tables(pattern)
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnRow>> {
        (**self).columns(table)
    }

    fn create_table(&self, table: &str) -> Result<String> {
        (**self).create_table(table)
    }
}

impl<S: SchemaSource + ?Sized> SchemaSource for Box<S> {
    fn tables(&self, pattern: Option<&str>) -> Result<Vec<TableRow>> {
        (**self).tables(pattern)
    }

    fn columns(&self, table: &str) -> Result<Vec<ColumnRow>> {
        (**self).columns(table)
    }

    fn create_table(&self, table: &str) -> Result<String> {
        (**self).create_table(table)
    }
}
