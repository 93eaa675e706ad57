//! Report formatting and printing utilities.
//!
//! Separate from the engines so they can be used as a library. Every
//! printer takes a writer so output can be captured in tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, PruneSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::reconcile::MissingKeyRecord;
use crate::engines::{CleanReport, ReplaceReport, ScanReport, SyncReport, WrittenDocument};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of removed keys listed per document without `-v`.
const MAX_KEYS_DISPLAY: usize = 5;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Scan(report) => print_scan(report, writer),
        CommandSummary::Sync(report) => print_sync(report, writer),
        CommandSummary::Clean(report) => print_clean(report, verbose, writer),
        CommandSummary::CheckMissing(missing) => print_missing(missing, writer),
        CommandSummary::Replace(report) => print_replace(report, writer),
        CommandSummary::PruneNamespace(summary) => print_prune(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_success<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_written<W: Write>(written: &[WrittenDocument], writer: &mut W) {
    for doc in written {
        let _ = writeln!(
            writer,
            "  {} {}:{} ({})",
            "-".blue(),
            doc.locale,
            doc.namespace,
            plural(doc.keys, "key")
        );
    }
}

fn print_missing<W: Write>(missing: &[MissingKeyRecord], writer: &mut W) {
    if missing.is_empty() {
        print_success("No missing keys found", writer);
        return;
    }

    let width = missing
        .iter()
        .map(|record| UnicodeWidthStr::width(record.key.as_str()))
        .max()
        .unwrap_or(0);

    for record in missing {
        let padding = width - UnicodeWidthStr::width(record.key.as_str());
        let _ = writeln!(
            writer,
            "  {}{:padding$}  {}",
            record.key.bold(),
            "",
            record.namespaces.join(", ").dimmed(),
            padding = padding
        );
    }
    let _ = writeln!(
        writer,
        "\n{} {} in the default locale",
        FAILURE_MARK.red(),
        plural(missing.len(), "missing key").red()
    );
}

fn print_scan<W: Write>(report: &ScanReport, writer: &mut W) {
    if let Some(cleaned) = &report.cleaned
        && cleaned.removed_count() > 0
    {
        let _ = writeln!(
            writer,
            "{} {} from {}",
            "Removed".green().bold(),
            plural(cleaned.removed_count(), "unused key"),
            plural(cleaned.changed().count(), "file")
        );
    }

    if report.missing.is_empty() {
        print_success("No missing keys found", writer);
        return;
    }

    let _ = writeln!(
        writer,
        "Found {}",
        plural(report.missing.len(), "missing key")
    );
    if !report.reused.is_empty() {
        let _ = writeln!(
            writer,
            "  - reused: {} from other namespaces",
            plural(report.reused.len(), "key")
        );
    }
    if !report.skipped.is_empty() {
        let _ = writeln!(
            writer,
            "  - skipped: {} without a value",
            plural(report.skipped.len(), "key")
        );
    }
    if !report.translated_locales.is_empty() {
        let _ = writeln!(
            writer,
            "  - translated into: {}",
            report.translated_locales.join(", ")
        );
    }

    if report.written.is_empty() {
        let _ = writeln!(writer, "{}", "Nothing was written.".yellow());
    } else {
        let _ = writeln!(
            writer,
            "{} {}:",
            "Updated".green().bold(),
            plural(report.written.len(), "file")
        );
        print_written(&report.written, writer);
    }
}

fn print_sync<W: Write>(report: &SyncReport, writer: &mut W) {
    for (locale, namespace) in &report.created {
        let _ = writeln!(
            writer,
            "{} {}:{}",
            "Created".green().bold(),
            locale,
            namespace
        );
    }

    for locale in &report.locales {
        if locale.missing == 0 {
            let _ = writeln!(writer, "  {}: up to date", locale.locale);
            continue;
        }
        let _ = writeln!(
            writer,
            "  {}: {} ({} reused, {} translated)",
            locale.locale.bold(),
            plural(locale.missing, "missing key"),
            locale.reused,
            locale.translated
        );
    }

    print_success(
        &format!("Synced {}", plural(report.locales.len(), "locale")),
        writer,
    );
}

fn print_clean<W: Write>(report: &CleanReport, verbose: bool, writer: &mut W) {
    let removed = report.removed_count();
    if removed == 0 {
        print_success("No unused keys found", writer);
        return;
    }

    for doc in report.changed() {
        let _ = writeln!(
            writer,
            "  {}:{} ({})",
            doc.locale.bold(),
            doc.namespace,
            plural(doc.removed.len(), "key")
        );
        let shown = if verbose {
            doc.removed.len()
        } else {
            MAX_KEYS_DISPLAY
        };
        for key in doc.removed.iter().take(shown) {
            let _ = writeln!(writer, "    {} {}", "-".red(), key);
        }
        if doc.removed.len() > shown {
            let _ = writeln!(
                writer,
                "    ... and {} more (use {} to list all)",
                doc.removed.len() - shown,
                "-v".cyan()
            );
        }
    }

    let files = report.changed().count();
    if report.dry_run {
        let _ = writeln!(
            writer,
            "{} {} in {}.",
            "Would delete".yellow().bold(),
            plural(removed, "key"),
            plural(files, "file")
        );
        let _ = writeln!(
            writer,
            "Run without {} to delete these keys.",
            "--dry-run".cyan()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} of {} in {}.",
            "Deleted".green().bold(),
            plural(removed, "key"),
            report.total_count(),
            plural(files, "file")
        );
    }
}

fn print_replace<W: Write>(report: &ReplaceReport, writer: &mut W) {
    print_success(
        &format!(
            "Replaced \"{}\" in {}",
            report.key,
            plural(report.written.len(), "file")
        ),
        writer,
    );
    print_written(&report.written, writer);
}

fn print_prune<W: Write>(summary: &PruneSummary, writer: &mut W) {
    let report = &summary.report;
    for (locale, keys) in &report.locales {
        let _ = writeln!(
            writer,
            "  {} {}:{} ({})",
            SUCCESS_MARK.green(),
            locale,
            summary.target,
            plural(*keys, "key")
        );
    }
    for (locale, err) in &report.failures {
        let _ = writeln!(
            writer,
            "  {} {}:{}: {}",
            FAILURE_MARK.red(),
            locale,
            summary.target,
            err
        );
    }

    if report.is_success() {
        print_success(
            &format!(
                "Created namespace \"{}\" from \"{}\" with {}",
                summary.target,
                summary.source,
                plural(report.keys, "key")
            ),
            writer,
        );
        let _ = writeln!(
            writer,
            "Add \"{}\" to {} to start using it.",
            summary.target, CONFIG_FILE_NAME
        );
    } else {
        let _ = writeln!(
            writer,
            "\n{} {} failed",
            FAILURE_MARK.red(),
            plural(report.failures.len(), "locale").red()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        print_success(&format!("Created {}", CONFIG_FILE_NAME), writer);
    }
}
