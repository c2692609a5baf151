//! Schema report rendering.
//!
//! A [`Report`] describes its content through the [`Output`] trait;
//! [`HtmlOutput`] turns that into a static document.

mod html;
mod output;
mod schema;

pub use html::HtmlOutput;
pub use output::{Output, Report};
pub use schema::{HtmlReport, SchemaReport};
