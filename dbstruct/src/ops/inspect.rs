//! Inspect operation - list the selected tables.

use dbstruct_core::{Options, Result};
use dbstruct_schema::{SchemaSource, introspect};

use crate::reports::InspectReport;

/// Execute the inspect operation.
pub fn inspect<S: SchemaSource>(source: S, options: &Options) -> Result<InspectReport> {
    let tables = introspect(&source, &options.filters, &options.exclude)?;

    Ok(InspectReport {
        database: options.database.display_name().to_string(),
        tables,
    })
}
