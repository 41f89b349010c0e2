//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the hierarchy
//! - [`ResolvePhase`] - resolves the name of every node

mod resolve;
mod validate;

pub use resolve::ResolvePhase;
pub use validate::{
    DuplicateMemberNameLint, EmptyEngineNameLint, Lint, MissingPackageLint,
    RejectedMetadataLint, ValidatePhase,
};
