//! Rust struct builder.

use super::ModelAttr;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub attrs: Vec<ModelAttr>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            attrs: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: ModelAttr) -> Self {
        self.attrs.push(attr);
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::rust_doc(doc.as_str()));
        }
        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }
        fragments.push(CodeFragment::Line(format!(
            "pub {}: {},",
            self.name, self.ty
        )));

        fragments
    }
}

/// Builder for public Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    attrs: Vec<ModelAttr>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            attrs: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn attr(mut self, attr: ModelAttr) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::rust_doc(doc.as_str()));
        }

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("pub struct {} {{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("pub struct {} {{", self.name),
                self.fields.iter().flat_map(Field::to_fragments).collect(),
                Some("}".to_string()),
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SeaOrmAttr;

    #[test]
    fn test_empty_struct() {
        let s = Struct::new("Empty").build();
        assert_eq!(s, "pub struct Empty {}\n");
    }

    #[test]
    fn test_struct_with_derives() {
        let s = Struct::new("User").derive("Debug").derive("Clone").build();
        assert_eq!(s, "#[derive(Debug, Clone)]\npub struct User {}\n");
    }

    #[test]
    fn test_struct_with_fields() {
        let s = Struct::new("User")
            .doc("application users")
            .attr(ModelAttr::sea_orm(SeaOrmAttr::table("app_user")))
            .field(Field::new("id", "u64").attr(ModelAttr::sqlx_rename("id")))
            .field(Field::new("nick", "Option<String>").doc("display name"))
            .build();

        assert_eq!(
            s,
            "/// application users\n\
             #[sea_orm(table_name = \"app_user\")]\n\
             pub struct User {\n\
             \x20   #[sqlx(rename = \"id\")]\n\
             \x20   pub id: u64,\n\
             \x20   /// display name\n\
             \x20   pub nick: Option<String>,\n\
             }\n"
        );
    }
}
