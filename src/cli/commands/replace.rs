use anyhow::Result;

use super::super::args::ReplaceCommand;
use super::super::prompt::StdinPrompter;
use super::helper::load_context;
use super::{CommandResult, CommandSummary};
use crate::engines::{Prompter, choose_existing_key, replace_key};
use crate::error::Error;

pub async fn replace(cmd: ReplaceCommand) -> Result<CommandResult> {
    let ctx = load_context(&cmd.common)?;
    let prompter = StdinPrompter;

    let key = choose_existing_key(&ctx, cmd.key, &prompter).await?;
    let value = match cmd.value {
        Some(value) => value,
        None => prompter
            .ask(&format!("Enter the new value for \"{}\"", key))
            .await
            .map_err(|source| Error::Prompt {
                key: key.clone(),
                source,
            })?,
    };

    let report = replace_key(&ctx, &key, &value).await?;
    Ok(CommandResult::new(CommandSummary::Replace(report)))
}
