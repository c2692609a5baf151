use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Language-agnostic primitive a native column type resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    String,
    Bytes,
    Timestamp,
}

impl SemanticType {
    /// Stable lower-case name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Int8 => "int8",
            SemanticType::Int16 => "int16",
            SemanticType::Int32 => "int32",
            SemanticType::Int64 => "int64",
            SemanticType::UInt8 => "uint8",
            SemanticType::UInt16 => "uint16",
            SemanticType::UInt32 => "uint32",
            SemanticType::UInt64 => "uint64",
            SemanticType::Float32 => "float32",
            SemanticType::Float64 => "float64",
            SemanticType::String => "string",
            SemanticType::Bytes => "bytes",
            SemanticType::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key designator of a column as reported by the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Key {
    #[default]
    None,
    Primary,
    Unique,
    Index,
}

impl Key {
    /// Parse the MySQL `COLUMN_KEY` value (`PRI`, `UNI`, `MUL` or empty).
    pub fn from_column_key(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "PRI" => Key::Primary,
            "UNI" => Key::Unique,
            "MUL" => Key::Index,
            _ => Key::None,
        }
    }

    /// Catalog spelling, empty for [`Key::None`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::None => "",
            Key::Primary => "PRI",
            Key::Unique => "UNI",
            Key::Index => "MUL",
        }
    }
}

/// Supported schema sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    #[default]
    Mysql,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Mysql => "mysql",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DatabaseType::Mysql => "MySQL",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(DatabaseType::Mysql),
            other => Err(format!(
                "unsupported database type '{}', expected one of: mysql",
                other
            )),
        }
    }
}
