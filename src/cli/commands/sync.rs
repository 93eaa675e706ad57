use anyhow::Result;

use super::super::args::SyncCommand;
use super::helper::load_context;
use super::{CommandResult, CommandSummary};
use crate::engines;

pub async fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = load_context(&cmd.common)?;
    let report = engines::sync(&ctx).await?;
    Ok(CommandResult::new(CommandSummary::Sync(report)))
}
