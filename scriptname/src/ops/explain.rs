//! Explain operation - derivation of a single node's name.

use eyre::{Context, OptionExt, Result};
use scriptname_codegen::NameMapper;
use scriptname_manifest::Reflection;

use crate::reports::{ExplainReport, Format};

/// Execute the explain operation for the node at `path`.
pub fn explain(reflection: &Reflection, path: &str, format: Format) -> Result<ExplainReport> {
    let hierarchy = &reflection.hierarchy;
    let id = hierarchy
        .find_by_path(path)
        .ok_or_eyre(format!("no node at path '{}'", path))?;

    let mapper = NameMapper::new(hierarchy, &reflection.naming);
    let explanation = mapper
        .explain(id)
        .wrap_err_with(|| format!("cannot resolve the name of '{}'", path))?;

    let delegate = if mapper.is_delegate(id) {
        hierarchy.node(id).delegate()
    } else {
        None
    };

    let full_name = if hierarchy.node(id).kind().is_type() {
        Some(mapper.full_name(id)?)
    } else {
        None
    };

    let json = match format {
        Format::Text => None,
        Format::Json => Some(
            serde_json::to_string_pretty(&explanation).wrap_err("failed to serialize explanation")?,
        ),
    };

    Ok(ExplainReport {
        explanation,
        full_name,
        delegate,
        json,
    })
}
