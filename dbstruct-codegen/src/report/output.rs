//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render (terminal, HTML).
pub trait Output {
    /// Render the document title.
    fn title(&mut self, text: &str);

    /// Render a table of contents linking to sections by anchor.
    fn contents(&mut self, entries: &[(String, String)]);

    /// Start a new section with an anchor and a heading.
    fn section(&mut self, anchor: &str, name: &str);

    /// Render a paragraph of text.
    fn paragraph(&mut self, text: &str);

    /// Render a line of code.
    fn code(&mut self, text: &str);

    /// Render a table with a header row.
    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}
