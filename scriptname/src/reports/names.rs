//! Names command report data structures.

use super::output::{Output, Report};

/// Report data from whole-hierarchy name resolution.
#[derive(Debug)]
pub struct NamesReport {
    /// Warning diagnostics from the pipeline.
    pub warnings: Vec<String>,
    /// Number of rows in the table.
    pub count: usize,
    /// Rendered table, as text columns or JSON.
    pub body: String,
}

impl Report for NamesReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(self.body.trim_end());
    }
}
