//! Mapping between native column types and semantic types.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::{Error, Result, SemanticType};

/// Exact native type spellings, consulted before any rule.
const EXACT: &[(&str, SemanticType)] = &[
    ("smallint", SemanticType::Int16),
    ("smallint unsigned", SemanticType::UInt16),
    ("int", SemanticType::Int32),
    ("int unsigned", SemanticType::UInt32),
    ("bigint", SemanticType::Int64),
    ("bigint unsigned", SemanticType::UInt64),
    ("varchar", SemanticType::String),
    ("char", SemanticType::String),
    ("date", SemanticType::Timestamp),
    ("datetime", SemanticType::Timestamp),
    ("bit(1)", SemanticType::Int8),
    ("tinyint", SemanticType::Int8),
    ("tinyint unsigned", SemanticType::UInt8),
    ("tinyint(1)", SemanticType::Int8),
    ("tinyint(1) unsigned", SemanticType::UInt8),
    ("json", SemanticType::String),
    ("text", SemanticType::String),
    ("timestamp", SemanticType::Timestamp),
    ("double", SemanticType::Float64),
    ("mediumtext", SemanticType::String),
    ("longtext", SemanticType::String),
    ("float", SemanticType::Float32),
    ("tinytext", SemanticType::String),
    ("enum", SemanticType::String),
    ("time", SemanticType::Timestamp),
    ("blob", SemanticType::Bytes),
    ("tinyblob", SemanticType::Bytes),
];

/// Parametrized spellings. Order matters: patterns are anchored at the start
/// only, so an unsigned variant must precede its signed counterpart.
const RULES: &[(&str, SemanticType)] = &[
    (r"^(tinyint)[(]\d+[)] unsigned", SemanticType::UInt8),
    (r"^(tinyint)[(]\d+[)]", SemanticType::Int8),
    (r"^(smallint)[(]\d+[)]", SemanticType::Int16),
    (r"^(int)[(]\d+[)]", SemanticType::Int32),
    (r"^(bigint)[(]\d+[)] unsigned", SemanticType::UInt64),
    (r"^(bigint)[(]\d+[)]", SemanticType::Int64),
    (r"^(char)[(]\d+[)]", SemanticType::String),
    (r"^(enum)[(](.)+[)]", SemanticType::String),
    (r"^(set)[(](.)+[)]", SemanticType::String),
    (r"^(varchar)[(]\d+[)]", SemanticType::String),
    (r"^(varbinary)[(]\d+[)]", SemanticType::Bytes),
    (r"^(binary)[(]\d+[)]", SemanticType::Bytes),
    (r"^(tinyblob)[(]\d+[)]", SemanticType::Bytes),
    (r"^(decimal)[(]\d+,\d+[)]", SemanticType::Float64),
    (r"^(mediumint)[(]\d+[)]", SemanticType::String),
    (r"^(double)[(]\d+,\d+[)]", SemanticType::Float64),
    (r"^(float)[(]\d+,\d+[)]", SemanticType::Float64),
    (r"^(datetime)[(]\d+[)]", SemanticType::Timestamp),
    (r"^(timestamp)[(]\d+[)]", SemanticType::Timestamp),
];

static EXACT_TYPES: LazyLock<HashMap<&'static str, SemanticType>> =
    LazyLock::new(|| EXACT.iter().copied().collect());

static RULE_PATTERNS: LazyLock<Vec<(Regex, SemanticType)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|(pattern, ty)| {
            let regex = Regex::new(pattern).expect("type rule pattern is valid");
            (regex, *ty)
        })
        .collect()
});

/// How a native type was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Found in the exact dictionary.
    Exact,
    /// Matched the rule at this position.
    Rule(usize),
}

/// Map a native column type to its semantic type.
///
/// The input is expected to be lower-cased already, as the catalog's
/// `COLUMN_TYPE` is normalized by the introspector.
pub fn map_type(native: &str) -> Result<SemanticType> {
    resolve(native).map(|(ty, _)| ty)
}

/// Like [`map_type`], also reporting which tier resolved the type.
pub fn resolve(native: &str) -> Result<(SemanticType, Resolution)> {
    if let Some(ty) = EXACT_TYPES.get(native) {
        return Ok((*ty, Resolution::Exact));
    }

    RULE_PATTERNS
        .iter()
        .enumerate()
        .find(|(_, (regex, _))| regex.is_match(native))
        .map(|(index, (_, ty))| (*ty, Resolution::Rule(index)))
        .ok_or_else(|| Error::unknown_type(native))
}
