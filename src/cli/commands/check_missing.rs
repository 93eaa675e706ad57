use anyhow::Result;

use super::super::args::CheckMissingCommand;
use super::helper::load_context;
use super::{CommandResult, CommandSummary};
use crate::core::reconcile::missing_keys;

pub async fn check_missing(cmd: CheckMissingCommand) -> Result<CommandResult> {
    let ctx = load_context(&cmd.common)?;
    let missing = missing_keys(&ctx).await?;
    let count = missing.len();
    Ok(CommandResult::new(CommandSummary::CheckMissing(missing)).failing_on(count))
}
