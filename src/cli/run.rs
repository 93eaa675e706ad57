use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{
        check_missing::check_missing, clean::clean, init::init, prune::prune, replace::replace,
        scan::scan, sync::sync,
    },
};

/// Dispatch to the command handler.
///
/// Project commands run on a single-threaded tokio runtime; extraction
/// still parses files in parallel on the blocking pool.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let Some(command) = command else {
        anyhow::bail!("No command provided. Use --help to see available commands.")
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            match command {
                Command::Scan(cmd) => scan(cmd).await,
                Command::Sync(cmd) => sync(cmd).await,
                Command::Clean(cmd) => clean(cmd).await,
                Command::CheckMissing(cmd) => check_missing(cmd).await,
                Command::Replace(cmd) => replace(cmd).await,
                Command::PruneNamespace(cmd) => prune(cmd).await,
                Command::Init => init(),
                Command::Serve => {
                    // Serve command is handled in main.rs before calling run()
                    anyhow::bail!("Serve command should be handled before run()")
                }
            }
        })
}
