//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building indented text.
///
/// Supports consuming methods (returning `Self`) for chaining and
/// mutable methods prefixed with `push_` (returning `&mut Self`).
///
/// # Example
///
/// ```
/// use dbstruct_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::rust()
///     .line("pub struct User {")
///     .indent()
///     .line("pub id: u64,")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "pub struct User {\n    pub id: u64,\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn html() -> Self {
        Self::new(Indent::HTML)
    }

    // =========================================================================
    // Mutable API
    // =========================================================================

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a Rust doc comment, one `///` line per line of text.
    pub fn push_rust_doc(&mut self, text: &str) -> &mut Self {
        let mut lines = text.lines().peekable();
        if lines.peek().is_none() {
            return self.push_line("///");
        }
        for line in lines {
            let line = line.trim_end();
            if line.is_empty() {
                self.push_line("///");
            } else {
                self.push_line(&format!("/// {}", line));
            }
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::RustDoc(text) => {
                self.push_rust_doc(&text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    pub fn rust_doc(mut self, text: &str) -> Self {
        self.push_rust_doc(text);
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::rust()
            .line("pub struct User {")
            .indent()
            .line("pub id: u64,")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "pub struct User {\n    pub id: u64,\n}\n");
    }

    #[test]
    fn test_block_with_close() {
        let code = CodeBuilder::html()
            .block_with_close("<ul>", "</ul>", |b| b.line("<li>a</li>"))
            .build();

        assert_eq!(code, "<ul>\n  <li>a</li>\n</ul>\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = CodeBuilder::rust()
            .indent()
            .line("a")
            .blank()
            .line("b")
            .build();
        assert_eq!(code, "    a\n\n    b\n");
    }

    #[test]
    fn test_multiline_doc() {
        let code = CodeBuilder::rust()
            .rust_doc("first line\r\n\nthird line  ")
            .build();
        assert_eq!(code, "/// first line\n///\n/// third line\n");
    }

    #[test]
    fn test_empty_doc() {
        assert_eq!(CodeBuilder::rust().rust_doc("").build(), "///\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::rust()
            .each(["a", "b"], |b, name| b.line(&format!("mod {};", name)))
            .build();
        assert_eq!(code, "mod a;\nmod b;\n");
    }

    #[test]
    fn test_apply_fragments() {
        let mut builder = CodeBuilder::rust();
        builder.apply_fragment(CodeFragment::Sequence(vec![
            CodeFragment::rust_doc("A user."),
            CodeFragment::block(
                "pub struct User {",
                vec![CodeFragment::line("pub id: u64,")],
                Some("}".to_string()),
            ),
        ]));
        assert_eq!(
            builder.build(),
            "/// A user.\npub struct User {\n    pub id: u64,\n}\n"
        );
    }
}
