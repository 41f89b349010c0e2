//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from hierarchy validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the hierarchy file.
    pub config_path: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Number of resolved nodes, if resolution ran.
    pub resolved: Option<usize>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            if let Some(count) = self.resolved {
                out.preformatted(&format!(
                    "  {} node{} resolved",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: PathBuf::from("hierarchy.toml"),
            errors: Vec::new(),
            warnings: vec!["members 'bValue', 'bValue' all resolve to 'bValue'\n  --> Engine::AActor".into()],
            infos: Vec::new(),
            resolved: Some(1),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "[stderr] warning: members 'bValue', 'bValue' all resolve to 'bValue'\n  --> Engine::AActor",
                "",
                "✓ hierarchy.toml is valid",
                "  1 node resolved",
            ]
        );
    }

    #[test]
    fn test_render_invalid() {
        let report = CheckReport {
            config_path: PathBuf::from("hierarchy.toml"),
            errors: vec!["property has an empty engine name\n  --> Engine::AActor::".into()],
            warnings: Vec::new(),
            infos: Vec::new(),
            resolved: None,
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "[stderr] error: property has an empty engine name\n  --> Engine::AActor::",
                "",
                "✗ hierarchy.toml has 1 error",
            ]
        );
    }
}
