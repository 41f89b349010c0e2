//! Lint for name annotations that cannot be used.

use super::super::Lint;
use crate::{NameMapper, naming::rejected_annotations, pipeline::Diagnostic};

/// Lint that reports name annotations ignored by the acceptance policy.
pub struct RejectedMetadataLint;

impl Lint for RejectedMetadataLint {
    fn name(&self) -> &'static str {
        "rejected-metadata"
    }

    fn description(&self) -> &'static str {
        "Report name annotations that are not letters and whitespace only"
    }

    fn check(&self, mapper: &NameMapper<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let hierarchy = mapper.hierarchy();
        for (id, node) in hierarchy.iter() {
            for (key, value) in rejected_annotations(node) {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!("ignored {} '{}': only letters and whitespace are accepted", key, value),
                    )
                    .at(hierarchy.path(id)),
                );
            }
        }
    }
}
