//! Pipeline phase trait.

use eyre::Result;

use super::ResolutionContext;

/// A phase in the pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints and collects diagnostics
/// - `ResolvePhase` - resolves the name of every node
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut ResolutionContext) -> Result<()>;
}
