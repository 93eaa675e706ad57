use crate::core::reconcile::MissingKeyRecord;
use crate::engines::{CleanReport, PruneReport, ReplaceReport, ScanReport, SyncReport};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanReport),
    Sync(SyncReport),
    Clean(CleanReport),
    CheckMissing(Vec<MissingKeyRecord>),
    Replace(ReplaceReport),
    PruneNamespace(PruneSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct PruneSummary {
    pub source: String,
    pub target: String,
    pub report: PruneReport,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running an i18n-magic command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Problems the command found but did not treat as errors
    /// (missing keys for check-missing, failed locales for prune-namespace).
    pub problem_count: usize,
    /// If true, exit code 1 should be returned when problem_count > 0.
    pub exit_on_problems: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            problem_count: 0,
            exit_on_problems: false,
        }
    }

    pub fn failing_on(mut self, problem_count: usize) -> Self {
        self.problem_count = problem_count;
        self.exit_on_problems = true;
        self
    }
}
