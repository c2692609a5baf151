//! Rust type mapper implementation.

use dbstruct_core::SemanticType;

use crate::imports::ImportCollector;

/// Maps semantic types to Rust type syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// The Rust type of a semantic type, without optionality.
    pub fn map_semantic(&self, ty: SemanticType) -> &'static str {
        match ty {
            SemanticType::Int8 => "i8",
            SemanticType::Int16 => "i16",
            SemanticType::Int32 => "i32",
            SemanticType::Int64 => "i64",
            SemanticType::UInt8 => "u8",
            SemanticType::UInt16 => "u16",
            SemanticType::UInt32 => "u32",
            SemanticType::UInt64 => "u64",
            SemanticType::Float32 => "f32",
            SemanticType::Float64 => "f64",
            SemanticType::String => "String",
            SemanticType::Bytes => "Vec<u8>",
            SemanticType::Timestamp => "NaiveDateTime",
        }
    }

    /// The Rust type of a column, wrapped in `Option` when nullable.
    pub fn map_column(&self, ty: SemanticType, nullable: bool) -> String {
        let inner = self.map_semantic(ty);
        if nullable {
            format!("Option<{}>", inner)
        } else {
            inner.to_string()
        }
    }

    /// Register the imports a semantic type needs.
    pub fn add_imports(&self, ty: SemanticType, imports: &mut ImportCollector) {
        if ty == SemanticType::Timestamp {
            imports.add("chrono", "NaiveDateTime");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_semantic() {
        let mapper = RustTypeMapper;
        assert_eq!(mapper.map_semantic(SemanticType::UInt64), "u64");
        assert_eq!(mapper.map_semantic(SemanticType::Float32), "f32");
        assert_eq!(mapper.map_semantic(SemanticType::Bytes), "Vec<u8>");
        assert_eq!(mapper.map_semantic(SemanticType::Timestamp), "NaiveDateTime");
    }

    #[test]
    fn test_map_column_nullable() {
        let mapper = RustTypeMapper;
        assert_eq!(mapper.map_column(SemanticType::String, false), "String");
        assert_eq!(
            mapper.map_column(SemanticType::String, true),
            "Option<String>"
        );
    }

    #[test]
    fn test_timestamp_import() {
        let mapper = RustTypeMapper;
        let mut imports = ImportCollector::new();
        mapper.add_imports(SemanticType::Int32, &mut imports);
        assert!(imports.is_empty());
        mapper.add_imports(SemanticType::Timestamp, &mut imports);
        assert!(imports.has_symbol("chrono", "NaiveDateTime"));
    }
}
