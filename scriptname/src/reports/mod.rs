//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod explain;
mod names;
mod output;

pub use check::CheckReport;
pub use explain::ExplainReport;
pub use names::NamesReport;
pub use output::{Report, TerminalOutput};

/// Output format of the `names` and `explain` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}
