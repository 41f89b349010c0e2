//! State carried through the pipeline phases.

use scriptname_ir::Hierarchy;
use scriptname_manifest::{NamingConfig, Reflection};

use super::diagnostic::{Diagnostic, Severity};
use crate::{NameMapper, NameTable};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct ResolutionContext {
    pub hierarchy: Hierarchy,
    pub naming: NamingConfig,
    /// Resolved names (populated by `ResolvePhase`).
    pub table: Option<NameTable>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionContext {
    pub fn new(reflection: Reflection) -> Self {
        Self {
            hierarchy: reflection.hierarchy,
            naming: reflection.naming,
            table: None,
            diagnostics: Vec::new(),
        }
    }

    /// A mapper over the context's hierarchy and naming configuration.
    pub fn mapper(&self) -> NameMapper<'_> {
        NameMapper::new(&self.hierarchy, &self.naming)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the name table out of the context.
    pub fn take_table(&mut self) -> Option<NameTable> {
        self.table.take()
    }
}
