//! Validate → resolve pipeline.
//!
//! The [`Pipeline`] runs lints over a reflected hierarchy, fails when any of
//! them reports an error, and then resolves the name of every node.
//!
//! # Example
//!
//! ```ignore
//! use scriptname_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(reflection)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let table = ctx.table.as_ref();
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::ResolutionContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
