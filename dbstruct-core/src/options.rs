//! Run configuration shared by every stage of the pipeline.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DatabaseType, Error, Filter, Result};

/// Attribute flavour used for ORM tags on generated structs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrmStyle {
    /// `#[derive(sqlx::FromRow)]` with `#[sqlx(rename = "...")]` fields.
    #[default]
    Sqlx,
    /// One sea-orm entity module (`Model`, `Relation`) per declaration.
    SeaOrm,
}

impl OrmStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrmStyle::Sqlx => "sqlx",
            OrmStyle::SeaOrm => "sea-orm",
        }
    }
}

impl fmt::Display for OrmStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrmStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sqlx" => Ok(OrmStyle::Sqlx),
            "sea-orm" | "sea_orm" => Ok(OrmStyle::SeaOrm),
            other => Err(format!(
                "unknown orm style '{}', expected one of: sqlx, sea-orm",
                other
            )),
        }
    }
}

/// Options for one generation run.
///
/// Built once by the front end and passed by reference; nothing mutates it
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Schema source kind.
    pub database: DatabaseType,
    /// Connection string.
    pub dsn: String,
    /// Table filters; empty selects every table.
    pub filters: Vec<Filter>,
    /// Exact table names to skip.
    pub exclude: Vec<String>,
    /// Generate ORM attributes.
    pub orm_tag: bool,
    pub orm_style: OrmStyle,
    /// Generate serde attributes.
    pub serde_tag: bool,
    /// Put every struct in a single file.
    pub single_file: bool,
    /// Directory for generated code.
    pub model_dir: Option<PathBuf>,
    /// Module name of the generated code.
    pub package: String,
    /// Path of the HTML report.
    pub html_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            database: DatabaseType::default(),
            dsn: String::new(),
            filters: Vec::new(),
            exclude: Vec::new(),
            orm_tag: true,
            orm_style: OrmStyle::default(),
            serde_tag: true,
            single_file: true,
            model_dir: None,
            package: "model".to_string(),
            html_file: None,
            verbose: false,
        }
    }
}

impl Options {
    /// Check the options are usable before touching the database.
    pub fn validate(&self) -> Result<()> {
        if self.dsn.trim().is_empty() {
            return Err(Error::config("missing database dsn"));
        }
        validate_package(&self.package)?;
        if let Some(filter) = self.filters.iter().find(|f| f.pattern.is_empty()) {
            return Err(Error::config(format!(
                "filter with prefix '{}' has no table pattern",
                filter.prefix
            )));
        }
        Ok(())
    }
}

fn validate_package(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::config(format!(
            "invalid package name '{}': use lowercase letters, digits and underscores",
            name
        )))
    }
}
