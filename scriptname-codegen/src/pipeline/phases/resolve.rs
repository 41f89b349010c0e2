//! Resolve phase - builds the name table.

use eyre::{Result, WrapErr};

use crate::{
    NameTable,
    pipeline::{Phase, ResolutionContext},
};

/// Phase that resolves every node's name into a [`NameTable`].
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve the generated identifier of every node"
    }

    fn run(&self, ctx: &mut ResolutionContext) -> Result<()> {
        let table = NameTable::build(&ctx.mapper()).wrap_err("failed to resolve names")?;
        ctx.table = Some(table);
        Ok(())
    }
}
