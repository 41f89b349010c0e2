use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use scriptname_manifest::Reflection;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Format, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Node path as printed by `names`, e.g. Engine::Actor.h::AActor::bHidden
    pub path: String,

    /// Path to hierarchy.toml (defaults to ./hierarchy.toml)
    #[arg(short, long, default_value = "hierarchy.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let reflection = Reflection::from_file(&self.config).unwrap_or_exit();
        let report = ops::explain(&reflection, &self.path, self.format)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
