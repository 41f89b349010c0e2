//! Identifier synthesis for generated bindings.
//!
//! This crate turns the engine-assigned names of a reflected hierarchy into
//! valid, non-conflicting C# identifiers.
//!
//! # Module Organization
//!
//! - [`naming`] - Naming policies and the [`NameMapper`] façade
//! - [`table`] - Whole-hierarchy name resolution ([`NameTable`])
//! - [`pipeline`] - Validate → resolve pipeline with lint diagnostics

mod error;
pub mod naming;
pub mod pipeline;
pub mod table;

pub use error::{NamingError, Result};
pub use naming::{NameKind, NameMapper};
pub use table::{NameRow, NameTable};
