//! Command-line interface layer.
//!
//! Parses arguments, builds the project context, runs an engine and prints
//! its report. Separate from the engines so they can be used as a library.

mod args;
mod commands;
mod exit_status;
mod prompt;
mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;
pub use prompt::StdinPrompter;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result))
}
