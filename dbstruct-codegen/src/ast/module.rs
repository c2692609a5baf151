//! Inline module builder.

use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    rust_file::RustFile,
};

/// A `pub mod name { ... }` item wrapping the contents of a file.
pub struct Module {
    name: String,
    content: RustFile,
}

impl Module {
    pub fn new(name: impl Into<String>, content: RustFile) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Module {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self.content.to_fragments();
        if body.is_empty() {
            vec![CodeFragment::Line(format!("pub mod {} {{}}", self.name))]
        } else {
            vec![CodeFragment::block(
                format!("pub mod {} {{", self.name),
                body,
                Some("}".to_string()),
            )]
        }
    }
}
