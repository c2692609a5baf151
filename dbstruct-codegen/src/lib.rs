//! Code and report emitters for the dbstruct generator.
//!
//! - [`Generator`] - Rust structs, one or many files
//! - [`report`] - HTML schema documentation
//! - [`builder`] - indented text building blocks shared by both

pub mod ast;
pub mod builder;
mod generator;
mod imports;
mod model;
pub mod naming;
mod rust_file;
mod type_mapper;

pub mod report;

pub use generator::Generator;
pub use imports::ImportCollector;
pub use model::{DeclField, Declaration, build_declarations};
pub use rust_file::RustFile;
pub use type_mapper::RustTypeMapper;
