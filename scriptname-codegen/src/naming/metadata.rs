//! Metadata-driven name overrides.

use scriptname_core::{is_letters_and_whitespace, strip_whitespace};
use scriptname_ir::Node;
use serde::Serialize;
use tracing::trace;

/// Annotation keys that may override a node's name, highest priority first.
pub const SCRIPT_NAME_KEYS: [&str; 3] = ["ScriptName", "ScriptMethod", "DisplayName"];

/// Where a script name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptNameSource {
    /// An accepted annotation value.
    Metadata(&'static str),
    /// No annotation qualified.
    EngineName,
}

/// A resolved script name and its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptName {
    pub name: String,
    pub source: ScriptNameSource,
}

/// Returns true if an annotation value can be used as a name.
///
/// Only letters and whitespace are accepted; anything else could not form a
/// valid identifier once whitespace is removed.
pub fn accepts_annotation(value: &str) -> bool {
    !value.is_empty() && is_letters_and_whitespace(value)
}

/// Resolve the script name of a node, recording which annotation was used.
pub fn resolve_script_name(node: &Node) -> ScriptName {
    for key in SCRIPT_NAME_KEYS {
        let Some(value) = node.metadata_value(key) else {
            continue;
        };

        if !accepts_annotation(value) {
            if !value.is_empty() {
                trace!(key, value, engine_name = node.engine_name(), "annotation rejected");
            }
            continue;
        }

        return ScriptName {
            name: strip_whitespace(value),
            source: ScriptNameSource::Metadata(key),
        };
    }

    ScriptName {
        name: node.engine_name().to_string(),
        source: ScriptNameSource::EngineName,
    }
}

/// Resolve the script name of a node: the first accepted override, or the engine name.
pub fn script_name(node: &Node) -> String {
    resolve_script_name(node).name
}

/// Non-empty override annotations that the acceptance policy rejects.
pub fn rejected_annotations(node: &Node) -> impl Iterator<Item = (&'static str, &str)> {
    SCRIPT_NAME_KEYS.into_iter().filter_map(|key| {
        node.metadata_value(key)
            .filter(|value| !value.is_empty() && !accepts_annotation(value))
            .map(|value| (key, value))
    })
}
