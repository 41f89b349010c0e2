use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use scriptname_manifest::Reflection;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to hierarchy.toml (defaults to ./hierarchy.toml)
    #[arg(short, long, default_value = "hierarchy.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let reflection = Reflection::from_file(&self.config).unwrap_or_exit();
        let report = ops::check(reflection, &self.config)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
