//! Generate command report data structures.

use std::path::PathBuf;

use dbstruct_core::{PreviewFile, WriteResult};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema source name (e.g., "MySQL").
    pub database: String,

    /// Number of tables read.
    pub tables: usize,

    /// Number of structs emitted.
    pub declarations: usize,

    /// Structs built from more than one table.
    pub merged: Vec<MergedDeclaration>,

    /// Code generation result.
    pub result: GenerationResult,

    /// HTML report, if one was requested.
    pub html: Option<HtmlResult>,
}

/// A struct whose fields come from several tables.
#[derive(Debug)]
pub struct MergedDeclaration {
    pub type_name: String,
    /// Tables in catalog order; the first one wins field conflicts.
    pub tables: Vec<String>,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// No output directory was configured.
    Skipped,
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files written with new content.
    pub written: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
}

/// Outcome of the HTML report.
#[derive(Debug)]
pub struct HtmlResult {
    pub path: PathBuf,
    /// `None` in a dry run.
    pub result: Option<WriteResult>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for merged in &self.merged {
            out.warning(&format!(
                "{} merges tables {}",
                merged.type_name,
                merged.tables.join(", ")
            ));
        }

        out.key_value(
            "Read",
            &format!("{} tables from {}", self.tables, self.database),
        );

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
            GenerationResult::Skipped => {
                out.key_value("Generated", "nothing (no output directory set, use --dir)");
            }
        }

        if let Some(html) = &self.html {
            let path = html.path.display();
            let value = match html.result {
                Some(WriteResult::Written) => path.to_string(),
                Some(WriteResult::Unchanged) => format!("{} (unchanged)", path),
                None => format!("{} (skipped in dry run)", path),
            };
            out.key_value("HTML report", &value);
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value(
            "Generated",
            &format!(
                "{} structs in {}",
                self.declarations,
                written.output_dir.display()
            ),
        );
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        for path in &written.unchanged {
            out.unchanged_item(&path.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
