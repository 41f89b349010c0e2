mod check;
mod explain;
mod names;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use explain::ExplainCommand;
use names::NamesCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for scriptname_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "scriptname")]
#[command(version)]
#[command(about = "Resolve the C# identifiers generated for reflected engine types")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Names(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved name of every node
    Names(NamesCommand),

    /// Lint hierarchy.toml without printing names
    Check(CheckCommand),

    /// Show how the name of one node is derived
    Explain(ExplainCommand),
}
