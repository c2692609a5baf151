//! Core operations.
//!
//! This module contains the business logic for dbstruct commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod inspect;

pub use generate::generate;
pub use inspect::inspect;
