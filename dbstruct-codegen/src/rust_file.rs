//! RustFile abstraction for structured Rust file generation.

use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    imports::ImportCollector,
};

/// A structured representation of a Rust file.
///
/// Organizes code into imports and body sections.
#[derive(Default)]
pub struct RustFile {
    imports: ImportCollector,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the imports of a collector.
    pub fn imports(mut self, imports: ImportCollector) -> Self {
        self.imports = imports;
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a run of lines rendered as one body element.
    pub fn lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.body
            .push(lines.into_iter().map(CodeFragment::Line).collect());
        self
    }

    /// Render the file with a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for RustFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .imports
            .iter()
            .map(|(module, symbols)| {
                let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                CodeFragment::Line(match symbols.as_slice() {
                    [] => format!("use {};", module),
                    [symbol] => format!("use {}::{};", module, symbol),
                    _ => format!("use {}::{{{}}};", module, symbols.join(", ")),
                })
            })
            .collect();

        if !self.imports.is_empty() && !self.body.is_empty() {
            fragments.push(CodeFragment::Blank);
        }

        for (i, body) in self.body.iter().enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(body.iter().cloned());
        }

        fragments
    }
}
