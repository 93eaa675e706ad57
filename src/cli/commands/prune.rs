use anyhow::Result;

use super::super::args::PruneNamespaceCommand;
use super::helper::load_context;
use super::{CommandResult, CommandSummary, PruneSummary};
use crate::engines::{PruneOptions, prune_namespace};

pub async fn prune(cmd: PruneNamespaceCommand) -> Result<CommandResult> {
    let ctx = load_context(&cmd.common)?;
    let options = PruneOptions {
        source: cmd.source,
        target: cmd.target,
        patterns: cmd.patterns,
    };
    let (source, target) = (options.source.clone(), options.target.clone());

    let report = prune_namespace(&ctx, options).await?;
    let failures = report.failures.len();

    Ok(CommandResult::new(CommandSummary::PruneNamespace(PruneSummary {
        source,
        target,
        report,
    }))
    .failing_on(failures))
}
