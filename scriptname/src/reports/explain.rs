//! Explain command report data structures.

use scriptname_codegen::naming::Explanation;
use scriptname_ir::DelegateKind;

use super::output::{Output, Report};

/// Report data from explaining one node's name.
#[derive(Debug)]
pub struct ExplainReport {
    pub explanation: Explanation,
    /// Namespace-qualified name, for type nodes.
    pub full_name: Option<String>,
    /// Delegate flavour, for delegate signature functions.
    pub delegate: Option<DelegateKind>,
    /// Pre-rendered JSON, when requested.
    pub json: Option<String>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(json) = &self.json {
            out.preformatted(json);
            return;
        }

        let explanation = &self.explanation;
        out.title(&explanation.path);
        out.key_value("Kind", explanation.kind.as_str());
        out.key_value("Engine name", &explanation.engine_name);
        if let Some(delegate) = self.delegate {
            out.key_value("Delegate", delegate.as_str());
        }
        out.newline();

        if !explanation.steps.is_empty() {
            out.section("Steps");
            for (i, step) in explanation.steps.iter().enumerate() {
                out.numbered_item(i + 1, &step.to_string());
            }
            out.newline();
        }

        out.key_value("Name", &explanation.name);
        if let Some(full_name) = &self.full_name {
            out.key_value("Full name", full_name);
        }
    }
}
