//! Names operation - whole-hierarchy resolution.

use std::path::Path;

use eyre::{Context, Result};
use scriptname_codegen::pipeline::Pipeline;
use scriptname_ir::NodeKind;
use scriptname_manifest::Reflection;

use crate::reports::{Format, NamesReport};

/// Execute the names operation.
///
/// Runs the full pipeline; lint errors abort before any name is resolved.
pub fn names(
    reflection: Reflection,
    config_path: &Path,
    kind: Option<NodeKind>,
    format: Format,
) -> Result<NamesReport> {
    let mut ctx = Pipeline::new().run(reflection).wrap_err_with(|| {
        format!(
            "cannot resolve names in {} (run `scriptname check` for details)",
            config_path.display()
        )
    })?;

    let warnings = ctx.warnings().map(ToString::to_string).collect();
    let mut table = ctx.take_table().unwrap_or_default();
    if let Some(kind) = kind {
        table = table.filter_kind(kind);
    }

    let body = match format {
        Format::Text => table.render(),
        Format::Json => table.to_json().wrap_err("failed to serialize name table")?,
    };

    Ok(NamesReport {
        warnings,
        count: table.len(),
        body,
    })
}
