//! Human-readable schema documentation.

use std::path::Path;

use dbstruct_core::{File, Result, Table, WriteResult, one_line};

use super::{HtmlOutput, Output, Report};

const COLUMN_HEADERS: &[&str] = &[
    "Name", "Type", "Nullable", "Key", "Default", "Extra", "Comment",
];

/// Every table with its columns, in catalog order. No merging.
pub struct SchemaReport<'a> {
    title: String,
    tables: &'a [Table],
}

impl<'a> SchemaReport<'a> {
    pub fn new(title: impl Into<String>, tables: &'a [Table]) -> Self {
        Self {
            title: title.into(),
            tables,
        }
    }
}

fn anchor(table: &Table) -> String {
    format!("table-{}", table.name)
}

impl Report for SchemaReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.title);
        let entries: Vec<(String, String)> = self
            .tables
            .iter()
            .map(|t| (anchor(t), t.name.clone()))
            .collect();
        out.contents(&entries);

        for table in self.tables {
            out.section(&anchor(table), &table.name);
            if let Some(comment) = &table.comment {
                out.paragraph(comment);
            }
            if !table.ddl.is_empty() {
                out.code(&one_line(&table.ddl));
            }

            let rows: Vec<Vec<String>> = table
                .columns
                .iter()
                .map(|c| {
                    vec![
                        c.name.clone(),
                        c.native_type.clone(),
                        if c.nullable { "YES" } else { "NO" }.to_string(),
                        c.key.as_str().to_string(),
                        c.default.clone().unwrap_or_default(),
                        c.extra.clone(),
                        c.comment.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            out.table(COLUMN_HEADERS, &rows);
        }
    }
}

/// Static HTML rendering of a [`SchemaReport`].
pub struct HtmlReport<'a> {
    report: SchemaReport<'a>,
}

impl<'a> HtmlReport<'a> {
    pub fn new(tables: &'a [Table]) -> Self {
        Self {
            report: SchemaReport::new("Database schema", tables),
        }
    }

    /// Use a custom document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.report.title = title.into();
        self
    }

    pub fn render(&self) -> String {
        let mut out = HtmlOutput::new();
        self.report.render(&mut out);
        out.finish()
    }

    /// Write the document, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<WriteResult> {
        File::new(path, self.render()).write()
    }
}

#[cfg(test)]
mod tests {
    use dbstruct_core::{Column, Key, SemanticType};

    use super::*;

    fn tables() -> Vec<Table> {
        vec![Table {
            name: "app_user".to_string(),
            comment: Some("users & admins".to_string()),
            prefix: Some("app_".to_string()),
            ddl: "CREATE TABLE `app_user` (\n  `id` int(11) NOT NULL\n)".to_string(),
            columns: vec![Column {
                name: "id".to_string(),
                native_type: "int(11)".to_string(),
                nullable: false,
                key: Key::Primary,
                default: None,
                comment: Some("<pk>".to_string()),
                extra: "auto_increment".to_string(),
                semantic: SemanticType::Int32,
            }],
        }]
    }

    #[test]
    fn test_render_contents() {
        let tables = tables();
        let html = HtmlReport::new(&tables).render();

        assert!(html.contains("<a href=\"#table-app_user\">app_user</a>"));
        assert!(html.contains("<h2 id=\"table-app_user\">app_user</h2>"));
        assert!(html.contains("<p>users &amp; admins</p>"));
        assert!(html.contains("<code>CREATE TABLE `app_user` (  `id` int(11) NOT NULL)</code>"));
        assert!(html.contains(
            "<tr><td>id</td><td>int(11)</td><td>NO</td><td>PRI</td><td></td><td>auto_increment</td><td>&lt;pk&gt;</td></tr>"
        ));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_missing_ddl_omitted() {
        let mut tables = tables();
        tables[0].ddl.clear();
        let html = HtmlReport::new(&tables).render();
        assert!(!html.contains("<code>"));
    }

    #[test]
    fn test_custom_title() {
        let html = HtmlReport::new(&[]).title("shop").render();
        assert!(html.contains("<title>shop</title>"));
        assert!(html.contains("<h1>shop</h1>"));
    }
}
