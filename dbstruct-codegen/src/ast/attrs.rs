//! Typed attributes for generated model structs.
//!
//! Instead of passing raw strings like `"sqlx(rename = \"id\")"`, use typed
//! attributes that are rendered to the appropriate syntax.

use std::fmt;

/// Attribute placed on a generated struct or field.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelAttr {
    /// `#[sqlx(rename = "...")]` - maps a field to its column.
    SqlxRename(String),
    /// `#[serde(rename = "...")]` - sets the wire name of a field.
    SerdeRename(String),
    /// `#[sea_orm(...)]` - entity and column metadata.
    SeaOrm(SeaOrmAttr),
}

impl ModelAttr {
    pub fn sqlx_rename(column: impl Into<String>) -> Self {
        Self::SqlxRename(column.into())
    }

    pub fn serde_rename(name: impl Into<String>) -> Self {
        Self::SerdeRename(name.into())
    }

    pub fn sea_orm(attr: SeaOrmAttr) -> Self {
        Self::SeaOrm(attr)
    }
}

impl fmt::Display for ModelAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SqlxRename(column) => write!(f, "sqlx(rename = {:?})", column),
            Self::SerdeRename(name) => write!(f, "serde(rename = {:?})", name),
            Self::SeaOrm(attr) => write!(f, "{}", attr),
        }
    }
}

/// Options for the `#[sea_orm(...)]` attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeaOrmAttr {
    pub table_name: Option<String>,
    pub column_name: Option<String>,
    pub primary_key: bool,
    pub auto_increment: Option<bool>,
    pub unique: bool,
    pub indexed: bool,
    pub nullable: bool,
}

impl SeaOrmAttr {
    /// Struct-level attribute naming the table.
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            table_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Field-level attribute naming the column.
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            column_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self, enabled: bool) -> Self {
        self.auto_increment = Some(enabled);
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

impl fmt::Display for SeaOrmAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(ref table) = self.table_name {
            parts.push(format!("table_name = {:?}", table));
        }
        if let Some(ref column) = self.column_name {
            parts.push(format!("column_name = {:?}", column));
        }
        if self.primary_key {
            parts.push("primary_key".to_string());
        }
        if let Some(enabled) = self.auto_increment {
            parts.push(format!("auto_increment = {}", enabled));
        }
        if self.unique {
            parts.push("unique".to_string());
        }
        if self.indexed {
            parts.push("indexed".to_string());
        }
        if self.nullable {
            parts.push("nullable".to_string());
        }

        write!(f, "sea_orm({})", parts.join(", "))
    }
}
