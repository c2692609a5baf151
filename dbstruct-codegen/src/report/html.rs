//! Static HTML output.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::Output;
use crate::builder::CodeBuilder;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse;margin-bottom:2em}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left}\
th{background:#f4f4f4}\
code{display:block;white-space:pre-wrap;background:#f8f8f8;padding:8px}";

/// Collects a report into an HTML5 document.
pub struct HtmlOutput {
    title: String,
    body: CodeBuilder,
}

impl HtmlOutput {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            body: CodeBuilder::html().indent().indent(),
        }
    }

    /// Wrap the collected body into a complete document.
    pub fn finish(self) -> String {
        let head = CodeBuilder::html()
            .line("<!DOCTYPE html>")
            .line("<html>")
            .indent()
            .block_with_close("<head>", "</head>", |b| {
                b.line("<meta charset=\"utf-8\">")
                    .line(&format!("<title>{}</title>", encode_text(&self.title)))
                    .line(&format!("<style>{}</style>", STYLE))
            })
            .line("<body>")
            .build();

        let mut document = head;
        document.push_str(&self.body.build());
        document.push_str("  </body>\n</html>\n");
        document
    }
}

impl Default for HtmlOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for HtmlOutput {
    fn title(&mut self, text: &str) {
        self.title = text.to_string();
        self.body.push_line(&format!("<h1>{}</h1>", encode_text(text)));
    }

    fn contents(&mut self, entries: &[(String, String)]) {
        if entries.is_empty() {
            return;
        }
        self.body.push_line("<ul>").push_indent();
        for (anchor, label) in entries {
            self.body.push_line(&format!(
                "<li><a href=\"#{}\">{}</a></li>",
                encode_double_quoted_attribute(anchor),
                encode_text(label)
            ));
        }
        self.body.push_dedent().push_line("</ul>");
    }

    fn section(&mut self, anchor: &str, name: &str) {
        self.body.push_line(&format!(
            "<h2 id=\"{}\">{}</h2>",
            encode_double_quoted_attribute(anchor),
            encode_text(name)
        ));
    }

    fn paragraph(&mut self, text: &str) {
        self.body.push_line(&format!("<p>{}</p>", encode_text(text)));
    }

    fn code(&mut self, text: &str) {
        self.body.push_line(&format!("<code>{}</code>", encode_text(text)));
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        self.body.push_line("<table>").push_indent();
        let header: String = headers
            .iter()
            .map(|h| format!("<th>{}</th>", encode_text(h)))
            .collect();
        self.body.push_line(&format!("<tr>{}</tr>", header));
        for row in rows {
            let cells: String = row
                .iter()
                .map(|c| format!("<td>{}</td>", encode_text(c)))
                .collect();
            self.body.push_line(&format!("<tr>{}</tr>", cells));
        }
        self.body.push_dedent().push_line("</table>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_and_attributes_escaped() {
        let mut out = HtmlOutput::new();
        out.section("t-\"odd\"", "a<b> & 'c'");
        out.table(&["default"], &[vec!["''".to_string()]]);
        let html = out.finish();

        assert!(html.contains("<h2 id=\"t-&quot;odd&quot;\">a&lt;b&gt; &amp; 'c'</h2>"));
        assert!(html.contains("<tr><td>''</td></tr>"));
    }

    #[test]
    fn test_empty_document() {
        let html = HtmlOutput::new().finish();
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n  <head>\n"));
        assert!(html.contains("    <title></title>\n"));
        assert!(html.ends_with("  </head>\n  <body>\n  </body>\n</html>\n"));
    }

    #[test]
    fn test_body_elements() {
        let mut out = HtmlOutput::new();
        out.title("shop <dev>");
        out.contents(&[("t-user".to_string(), "user".to_string())]);
        out.section("t-user", "user");
        out.table(&["name"], &[vec!["id".to_string()]]);
        let html = out.finish();

        assert!(html.contains("<title>shop &lt;dev&gt;</title>"));
        assert!(html.contains(
            "  <body>\n    <h1>shop &lt;dev&gt;</h1>\n    <ul>\n      <li><a href=\"#t-user\">user</a></li>\n    </ul>\n"
        ));
        assert!(html.contains(
            "    <h2 id=\"t-user\">user</h2>\n    <table>\n      <tr><th>name</th></tr>\n      <tr><td>id</td></tr>\n    </table>\n"
        ));
    }
}
