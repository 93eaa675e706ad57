use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use globset::{GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::matcher::normalize_path;
use crate::error::{Error, Result};

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Check if a path segment contains glob syntax.
fn is_glob_segment(segment: &str) -> bool {
    segment.contains(['*', '?', '[', '{'])
}

/// The literal directory prefix of a pattern, where walking can start.
///
/// `src/app/**/*.tsx` walks from `src/app`, `**/*.ts` walks from the root.
fn static_prefix(pattern: &str) -> PathBuf {
    let mut prefix = PathBuf::new();
    let segments: Vec<&str> = pattern.split('/').collect();
    // The final segment names files, never a directory to walk from
    for segment in &segments[..segments.len().saturating_sub(1)] {
        if is_glob_segment(segment) {
            break;
        }
        prefix.push(segment);
    }
    prefix
}

/// Render a path relative to the scan root with `/` separators.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = globset::GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                Error::configuration(format!("Invalid glob pattern \"{}\": {}", pattern, e))
            })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::configuration(format!("Invalid glob patterns: {}", e)))
}

/// Whether a pattern climbs out of the scan root (`../packages/**`).
fn escapes_root(pattern: &str) -> bool {
    static_prefix(pattern)
        .components()
        .any(|c| c == Component::ParentDir)
}

/// Expand `patterns` to files under `root`, relative, `/`-separated, sorted.
///
/// Dependency directories are always skipped. A pattern whose base
/// directory does not exist matches nothing. Patterns reaching outside
/// `root` match nothing and are warned about.
pub fn scan_files(root: &Path, patterns: &[String]) -> Result<BTreeSet<String>> {
    let patterns: Vec<String> = patterns
        .iter()
        .map(|p| normalize_path(p))
        .filter(|p| {
            let escapes = escapes_root(p);
            if escapes {
                warn!(pattern = %p, "pattern points outside the project root, ignoring it");
            }
            !escapes
        })
        .collect();

    let includes = build_glob_set(&patterns)?;
    let mut files = BTreeSet::new();

    let mut walk_roots: BTreeSet<PathBuf> = patterns
        .iter()
        .map(|p| root.join(static_prefix(p)))
        .collect();
    // Drop roots nested in another root; they would be walked twice
    let all_roots: Vec<PathBuf> = walk_roots.iter().cloned().collect();
    walk_roots.retain(|r| !all_roots.iter().any(|other| other != r && r.starts_with(other)));

    for dir in walk_roots {
        if !dir.exists() {
            debug!(dir = %dir.display(), "glob base does not exist, no matches");
            continue;
        }

        let walker = WalkDir::new(&dir).follow_links(false).into_iter().filter_entry(|e| {
            !(e.file_type().is_dir()
                && EXCLUDED_DIRS
                    .iter()
                    .any(|excluded| e.file_name() == std::ffi::OsStr::new(excluded)))
        });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(relative) = relative_path(root, entry.path()) else {
                warn!(path = %entry.path().display(), "file outside the project root, skipping");
                continue;
            };

            if includes.is_match(&relative) {
                files.insert(relative);
            }
        }
    }

    debug!(count = files.len(), "source files matched");
    Ok(files)
}
