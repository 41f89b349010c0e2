//! Lint trait for hierarchy validation.

use crate::{NameMapper, pipeline::Diagnostic};

/// A lint that checks the hierarchy for issues.
///
/// Lints see the hierarchy through a [`NameMapper`], so they can report on
/// resolved names as well as on the raw reflection data.
pub trait Lint: Send + Sync {
    /// The name of this lint, e.g. `missing-package`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the hierarchy and add any diagnostics.
    fn check(&self, mapper: &NameMapper<'_>, diagnostics: &mut Vec<Diagnostic>);
}
