//! Declarations derived from the table model.
//!
//! Tables whose names normalize to the same type name collapse into one
//! declaration. Fields are unioned by identity and the first occurrence wins.

use std::collections::HashSet;

use dbstruct_core::{Key, SemanticType, Table, camel_case, title_case};
use indexmap::IndexMap;
use tracing::warn;

use crate::naming::RUST_NAMING;

/// A struct to emit.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Rust type name.
    pub type_name: String,
    /// Rust module name, unique among declarations.
    pub module: String,
    /// Table the declaration was first built from.
    pub table: String,
    pub comment: Option<String>,
    /// Every table merged into this declaration, in catalog order.
    pub tables: Vec<String>,
    pub fields: Vec<DeclField>,
}

impl Declaration {
    /// Struct doc comment, falling back to the table name.
    pub fn doc(&self) -> String {
        match &self.comment {
            Some(comment) => comment.clone(),
            None => format!("Table: {}", self.table),
        }
    }

    /// Whether any field is part of the primary key.
    pub fn has_primary_key(&self) -> bool {
        self.fields.iter().any(|field| field.key == Key::Primary)
    }

    /// File stem of the module (raw identifier prefix removed).
    pub fn file_stem(&self) -> &str {
        self.module.strip_prefix("r#").unwrap_or(&self.module)
    }
}

/// A field of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclField {
    /// Normalized name used to merge fields across tables.
    pub identity: String,
    /// Rust field identifier.
    pub ident: String,
    /// Raw column name.
    pub column: String,
    /// Serialized field name.
    pub wire_name: String,
    pub native_type: String,
    pub semantic: SemanticType,
    pub nullable: bool,
    pub key: Key,
    pub auto_increment: bool,
    pub comment: Option<String>,
}

struct Builder {
    decl: Declaration,
    fields: IndexMap<String, DeclField>,
    idents: HashSet<String>,
}

impl Builder {
    fn add_fields(&mut self, table: &Table) {
        for column in &table.columns {
            let identity = title_case(&column.name);
            if self.fields.contains_key(&identity) {
                continue;
            }
            let ident = unique(RUST_NAMING.field_name(&identity), &mut self.idents);
            self.fields.insert(
                identity.clone(),
                DeclField {
                    identity,
                    ident,
                    column: column.name.clone(),
                    wire_name: camel_case(&column.name),
                    native_type: column.native_type.clone(),
                    semantic: column.semantic,
                    nullable: column.nullable,
                    key: column.key,
                    auto_increment: column.extra.to_ascii_lowercase().contains("auto_increment"),
                    comment: column.comment.clone(),
                },
            );
        }
    }

    fn finish(self) -> Declaration {
        Declaration {
            fields: self.fields.into_values().collect(),
            ..self.decl
        }
    }
}

/// Build declarations in catalog order, merging by type name.
pub fn build_declarations(tables: &[Table]) -> Vec<Declaration> {
    let mut builders: IndexMap<String, Builder> = IndexMap::new();
    let mut modules = HashSet::new();

    for table in tables {
        let type_name = RUST_NAMING.type_name(table.base_name());

        if let Some(builder) = builders.get_mut(&type_name) {
            warn!(
                table = %table.name,
                into = %builder.decl.table,
                type_name = %type_name,
                "tables share a type name, merging fields"
            );
            builder.decl.tables.push(table.name.clone());
            builder.add_fields(table);
            continue;
        }

        let module = unique(RUST_NAMING.file_name(&type_name), &mut modules);
        let mut builder = Builder {
            decl: Declaration {
                type_name: type_name.clone(),
                module,
                table: table.name.clone(),
                comment: table.comment.clone(),
                tables: vec![table.name.clone()],
                fields: Vec::new(),
            },
            fields: IndexMap::new(),
            idents: HashSet::new(),
        };
        builder.add_fields(table);
        builders.insert(type_name, builder);
    }

    builders.into_values().map(Builder::finish).collect()
}

/// Suffix a name until it is not taken, then mark it taken.
fn unique(name: String, taken: &mut HashSet<String>) -> String {
    let mut candidate = name.clone();
    let mut n = 2;
    while taken.contains(&candidate) {
        candidate = format!("{}_{}", name, n);
        n += 1;
    }
    taken.insert(candidate.clone());
    candidate
}
