//! Core model, type mapping and naming for the dbstruct generator.
//!
//! This crate holds everything the schema and codegen crates share: the
//! table model, the native-to-semantic type mapper, identifier
//! normalization, run options and the error type.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod codegen;
mod config;
mod error;
mod file;
mod model;
pub mod naming;
mod options;
mod type_mapper;
mod types;

pub use codegen::{Emitter, GenerateResult, PreviewFile};
pub use config::CONFIG_FILE;
pub use error::{BoxError, Error, Result};
pub use file::{File, GENERATED_HEADER, WriteResult};
pub use model::{Column, Filter, Table};
pub use naming::{camel_case, normalize, one_line, title_case, to_snake_case};
pub use options::{OrmStyle, Options};
pub use type_mapper::{Resolution, map_type, resolve};
pub use types::{DatabaseType, Key, SemanticType};
