//! Rust naming conventions for generated identifiers.

use dbstruct_core::{title_case, to_snake_case};

/// How identities are turned into identifiers of the target language.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a table name to a type name (e.g., "user_info" -> "UserInfo")
    pub table_to_type: fn(&str) -> String,
    /// Transform a type name to a module/file name (e.g., "UserInfo" -> "user_info")
    pub type_to_file: fn(&str) -> String,
    /// Transform a field identity to a field name (e.g., "UserID" -> "user_id")
    pub field_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
    /// Type names the generated code refers to, which a struct must not shadow
    pub shadowed_types: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe identifier, escaping if necessary.
    ///
    /// Names that cannot start an identifier get a leading underscore, and
    /// names with nothing left after normalization become `fallback`.
    pub fn safe_name(&self, name: &str, fallback: &str) -> String {
        match name.chars().next() {
            None => fallback.to_string(),
            Some(c) if c.is_ascii_digit() => format!("_{}", name),
            Some(_) if self.is_reserved(name) => (self.escape_reserved)(name),
            Some(_) => name.to_string(),
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.table_to_type)(name);
        if self.shadowed_types.contains(&transformed.as_str()) {
            return format!("{}_", transformed);
        }
        self.safe_name(&transformed, "Table")
    }

    /// Transform and make safe for use as a module or file name.
    pub fn file_name(&self, name: &str) -> String {
        let transformed = (self.type_to_file)(name);
        self.safe_name(&transformed, "table")
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed, "field")
    }
}

/// Keywords that are not valid raw identifiers.
const NOT_RAW: &[&str] = &["crate", "self", "Self", "super"];

fn escape_rust_reserved(name: &str) -> String {
    if NOT_RAW.contains(&name) {
        format!("{}_", name)
    } else {
        format!("r#{}", name)
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    table_to_type: title_case,
    type_to_file: to_snake_case,
    field_to_name: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
    shadowed_types: &[
        "Box",
        "Deserialize",
        "NaiveDateTime",
        "Option",
        "Result",
        "Serialize",
        "String",
        "Vec",
    ],
};
