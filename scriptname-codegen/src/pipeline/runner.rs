//! Pipeline orchestrator.

use eyre::Result;
use scriptname_manifest::Reflection;
use tracing::debug;

use super::{
    Phase, ResolutionContext,
    phases::{ResolvePhase, ValidatePhase},
};

/// The pipeline orchestrator.
///
/// Runs the built-in phases (validate, resolve) followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyCustomPhase);
/// let ctx = pipeline.run(reflection)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to run a custom set of lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a reflected hierarchy.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, fails on any error diagnostic
    /// 2. ResolvePhase - builds the name table
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, reflection: Reflection) -> Result<ResolutionContext> {
        let mut ctx = ResolutionContext::new(reflection);

        self.run_phase(&self.validate, &mut ctx)?;
        self.run_phase(&ResolvePhase, &mut ctx)?;
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut ResolutionContext) -> Result<()> {
        debug!(phase = phase.name(), "running phase");
        phase.run(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
