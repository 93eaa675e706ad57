use anyhow::Result;

use super::super::args::ScanCommand;
use super::super::prompt::StdinPrompter;
use super::helper::load_context;
use super::{CommandResult, CommandSummary};
use crate::engines;

pub async fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = load_context(&cmd.common)?;
    let report = engines::scan(&ctx, &StdinPrompter).await?;
    Ok(CommandResult::new(CommandSummary::Scan(report)))
}
