//! Inspect command report data structures.

use dbstruct_core::Table;

use super::output::{Output, Report};

/// The selected tables as read from the schema source.
#[derive(Debug)]
pub struct InspectReport {
    /// Schema source name (e.g., "MySQL").
    pub database: String,
    pub tables: Vec<Table>,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value(
            "Read",
            &format!("{} tables from {}", self.tables.len(), self.database),
        );

        for table in &self.tables {
            out.newline();
            let mut heading = table.name.clone();
            if let Some(prefix) = &table.prefix {
                heading.push_str(&format!(" [prefix {}]", prefix));
            }
            if let Some(comment) = &table.comment {
                heading.push_str(&format!(" ({})", comment));
            }
            out.section(&heading);

            let name_width = table.columns.iter().map(|c| c.name.len()).max().unwrap_or(0);
            let type_width = table
                .columns
                .iter()
                .map(|c| c.native_type.len())
                .max()
                .unwrap_or(0);

            for column in &table.columns {
                let mut line = format!(
                    "{:name_width$}  {:type_width$}  {}",
                    column.name,
                    column.native_type,
                    column.semantic.as_str(),
                );
                if column.nullable {
                    line.push_str(", nullable");
                }
                if !column.key.as_str().is_empty() {
                    line.push_str(&format!(", {}", column.key.as_str()));
                }
                out.list_item(&line);
            }
        }
    }
}
