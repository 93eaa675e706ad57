use anyhow::Result;

use super::super::args::CleanCommand;
use super::helper::load_context;
use super::{CommandResult, CommandSummary};
use crate::engines::{self, CleanOptions};

pub async fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = load_context(&cmd.common)?;
    let report = engines::clean(
        &ctx,
        CleanOptions {
            dry_run: cmd.dry_run,
        },
    )
    .await?;
    Ok(CommandResult::new(CommandSummary::Clean(report)))
}
