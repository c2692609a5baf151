//! Table and column model produced by introspection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Key, SemanticType};

/// A column with its semantic type already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Raw column name.
    pub name: String,
    /// Raw column type, lower-cased (e.g., "bigint(20) unsigned").
    pub native_type: String,
    pub nullable: bool,
    pub key: Key,
    pub default: Option<String>,
    pub comment: Option<String>,
    /// Extra attributes such as `auto_increment`.
    pub extra: String,
    pub semantic: SemanticType,
}

/// A table and its columns in catalog declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub comment: Option<String>,
    /// Prefix of the filter that selected this table.
    pub prefix: Option<String>,
    /// `CREATE TABLE` statement, empty when unavailable.
    pub ddl: String,
    pub columns: Vec<Column>,
}

impl Table {
    /// Table name with the filter prefix removed, if it applies.
    pub fn base_name(&self) -> &str {
        match &self.prefix {
            Some(prefix) if !prefix.is_empty() => {
                self.name.strip_prefix(prefix.as_str()).unwrap_or(&self.name)
            }
            _ => &self.name,
        }
    }
}

/// Selects tables by `LIKE` pattern and tags them with a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub prefix: String,
    pub pattern: String,
}

impl Filter {
    pub fn new(prefix: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            pattern: pattern.into(),
        }
    }

    /// The prefix to tag matched tables with, if any.
    pub fn tag(&self) -> Option<&str> {
        if self.prefix.is_empty() {
            None
        } else {
            Some(&self.prefix)
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    /// Parse `prefix,pattern`, or a lone `pattern` with an empty prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let first = parts.next().unwrap_or_default();
        let filter = match parts.next() {
            Some(pattern) => Filter::new(first, pattern),
            None => Filter::new("", first),
        };
        if filter.pattern.is_empty() {
            return Err(format!("invalid filter '{}': missing table pattern", s));
        }
        Ok(filter)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.prefix, self.pattern)
    }
}
