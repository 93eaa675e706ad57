//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: find keys missing from the default locale, ask for values, translate them
//! - `sync`: fill every other locale from the default locale
//! - `clean`: remove keys no longer referenced in source
//! - `check-missing`: report missing keys and fail when there are any
//! - `replace`: change the value of an existing key in every locale
//! - `prune-namespace`: create a namespace holding only the keys a subset of files uses
//! - `init`: create a default `i18n-magic.json`
//! - `serve`: start the MCP server

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "i18n-magic", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.command
            .as_ref()
            .and_then(Command::common)
            .is_some_and(|common| common.verbose)
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start searching for i18n-magic.json from
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Use this config file instead of searching for one
    #[arg(short = 'c', long, env = "I18N_MAGIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only report the keys that would be removed
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CheckMissingCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ReplaceCommand {
    /// Key to replace (asked for when omitted or unknown)
    pub key: Option<String>,

    /// New default-locale value (asked for when omitted)
    #[arg(long)]
    pub value: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PruneNamespaceCommand {
    /// Namespace to copy keys from
    #[arg(long)]
    pub source: String,

    /// Namespace to create
    #[arg(long)]
    pub target: String,

    /// Source globs to extract keys from (default: the configured globs)
    /// Can be specified multiple times: --pattern 'src/mobile/**' --pattern 'src/shared/**'
    #[arg(long = "pattern")]
    pub patterns: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find missing keys, ask for their values and translate them into every locale
    Scan(ScanCommand),
    /// Fill keys missing from non-default locales by translation
    Sync(SyncCommand),
    /// Remove keys that are no longer used in source
    Clean(CleanCommand),
    /// List keys missing from the default locale and exit 1 if there are any
    CheckMissing(CheckMissingCommand),
    /// Replace the value of an existing key in every locale
    Replace(ReplaceCommand),
    /// Create a namespace containing only the keys used by the given files
    PruneNamespace(PruneNamespaceCommand),
    /// Initialize a new i18n-magic.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}

impl Command {
    pub fn common(&self) -> Option<&CommonArgs> {
        match self {
            Command::Scan(cmd) => Some(&cmd.common),
            Command::Sync(cmd) => Some(&cmd.common),
            Command::Clean(cmd) => Some(&cmd.common),
            Command::CheckMissing(cmd) => Some(&cmd.common),
            Command::Replace(cmd) => Some(&cmd.common),
            Command::PruneNamespace(cmd) => Some(&cmd.common),
            Command::Init | Command::Serve => None,
        }
    }
}
