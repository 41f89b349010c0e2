//! Validate phase - runs lints on the hierarchy.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    DuplicateMemberNameLint, EmptyEngineNameLint, MissingPackageLint, RejectedMetadataLint,
};
use tracing::debug;

use crate::pipeline::{Phase, ResolutionContext};

/// Phase that validates the hierarchy using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(EmptyEngineNameLint),
                Box::new(MissingPackageLint),
                Box::new(DuplicateMemberNameLint),
                Box::new(RejectedMetadataLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint, recording diagnostics without failing.
    pub fn collect(&self, ctx: &mut ResolutionContext) {
        let mapper = crate::NameMapper::new(&ctx.hierarchy, &ctx.naming);
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&mapper, &mut ctx.diagnostics);
            debug!(
                lint = lint.name(),
                diagnostics = ctx.diagnostics.len() - before,
                "lint finished"
            );
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check hierarchy integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut ResolutionContext) -> Result<()> {
        self.collect(ctx);

        // Warnings and infos are allowed.
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
