//! Schema introspection for the dbstruct generator.
//!
//! - [`SchemaSource`] - the interface a database driver implements
//! - [`MySqlSource`] - MySQL implementation on SQLx
//! - [`introspect`] - turns a source into the [`Table`](dbstruct_core::Table) model
//! - [`testing`] - in-memory source (feature-gated)

pub mod dsn;
mod introspect;
mod mysql;
mod source;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use introspect::introspect;
pub use mysql::MySqlSource;
pub use source::{ColumnRow, SchemaSource, TableRow};
