//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod inspect;
mod output;

pub use generate::{GenerateReport, GenerationResult, HtmlResult, MergedDeclaration, WrittenResult};
pub use inspect::InspectReport;
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub use output::testing::RecordingOutput;
