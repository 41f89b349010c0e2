//! Check operation - hierarchy validation.

use std::path::Path;

use eyre::{Context, Result};
use scriptname_codegen::pipeline::{
    Phase, ResolutionContext, Severity,
    phases::{ResolvePhase, ValidatePhase},
};
use scriptname_manifest::Reflection;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every lint and, when none reports an error, resolves all names to
/// make sure generation would succeed.
pub fn check(reflection: Reflection, config_path: &Path) -> Result<CheckReport> {
    let mut ctx = ResolutionContext::new(reflection);
    ValidatePhase::new().collect(&mut ctx);

    let mut resolved = None;
    if !ctx.has_errors() {
        ResolvePhase.run(&mut ctx).wrap_err("Validation failed")?;
        resolved = ctx.table.as_ref().map(|table| table.len());
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        resolved,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_check_valid_hierarchy() {
        let reflection = Reflection::from_str(
            r#"
            [[nodes]]
            kind = "package"
            name = "/Script/Engine"

            [[nodes.children]]
            kind = "header-group"
            name = "Actor.h"

            [[nodes.children.children]]
            kind = "class"
            name = "AActor"
            metadata = { DisplayName = "Actor (Base)" }
            "#,
        )
        .unwrap();

        let report = check(reflection, Path::new("hierarchy.toml")).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.resolved, Some(3));
        assert_eq!(
            report.infos,
            ["ignored DisplayName 'Actor (Base)': only letters and whitespace are accepted\n  --> Engine::Actor.h::AActor"]
        );
    }

    #[test]
    fn test_check_reports_missing_package() {
        let reflection = Reflection::from_str(
            r#"
            [[nodes]]
            kind = "package"
            name = "/Script/Engine"

            [[nodes.children]]
            kind = "enum"
            name = "ECollisionChannel"
            "#,
        )
        .unwrap();

        let report = check(reflection, Path::new("hierarchy.toml")).unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.resolved, None);
        assert_eq!(
            report.errors,
            ["enum 'ECollisionChannel' is not declared in a header group with a package\n  --> Engine::ECollisionChannel"]
        );
    }
}
