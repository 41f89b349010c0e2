use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use scriptname_ir::NodeKind;
use scriptname_manifest::Reflection;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Format, Report, TerminalOutput},
};

#[derive(Args)]
pub struct NamesCommand {
    /// Path to hierarchy.toml (defaults to ./hierarchy.toml)
    #[arg(short, long, default_value = "hierarchy.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Only print nodes of this kind (e.g. class, property)
    #[arg(long)]
    pub kind: Option<NodeKind>,
}

impl NamesCommand {
    pub fn run(&self) -> Result<()> {
        let reflection = Reflection::from_file(&self.config).unwrap_or_exit();
        let report = ops::names(reflection, &self.config, self.kind, self.format)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
