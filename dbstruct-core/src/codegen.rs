//! Output-agnostic emitter traits.

use std::path::{Path, PathBuf};

use crate::{Result, WriteResult};

/// Something that turns the table model into files.
///
/// Implemented by the Rust struct generator and the HTML report.
pub trait Emitter {
    /// Short name used in logs and summaries (e.g., "rust", "html")
    fn name(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of code generation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files written with new content
    pub written: Vec<PathBuf>,
    /// Files whose content was already up to date
    pub unchanged: Vec<PathBuf>,
}

impl GenerateResult {
    pub fn record(&mut self, path: PathBuf, result: WriteResult) {
        match result {
            WriteResult::Written => self.written.push(path),
            WriteResult::Unchanged => self.unchanged.push(path),
        }
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}
