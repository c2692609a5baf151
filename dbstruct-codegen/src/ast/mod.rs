//! Rust AST builders for generated model code.

mod attrs;
mod module;
mod structs;

pub use attrs::{ModelAttr, SeaOrmAttr};
pub use module::Module;
pub use structs::{Field, Struct};
