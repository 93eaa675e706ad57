//! Removal of keys no longer referenced in source.

use tracing::{info, warn};

use crate::core::context::ProjectContext;
use crate::core::fan_out::fan_out;
use crate::core::reconcile::{Reconciler, compute_unused};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Report what would be removed without writing anything.
    pub dry_run: bool,
}

/// Outcome for one (locale, namespace) document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCleanup {
    pub locale: String,
    pub namespace: String,
    pub removed: Vec<String>,
    pub remaining: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    /// One entry per (namespace, locale) pair, namespaces outermost.
    pub documents: Vec<DocumentCleanup>,
    pub dry_run: bool,
}

impl CleanReport {
    pub fn removed_count(&self) -> usize {
        self.documents.iter().map(|d| d.removed.len()).sum()
    }

    /// Keys across all documents before cleaning.
    pub fn total_count(&self) -> usize {
        self.documents
            .iter()
            .map(|d| d.removed.len() + d.remaining)
            .sum()
    }

    /// Documents that lost at least one key.
    pub fn changed(&self) -> impl Iterator<Item = &DocumentCleanup> {
        self.documents.iter().filter(|d| !d.removed.is_empty())
    }
}

/// Extract keys, then remove every unused key from every document.
pub async fn clean(ctx: &ProjectContext, options: CleanOptions) -> Result<CleanReport> {
    let reconciler = Reconciler::new(ctx).await?;
    clean_extracted(ctx, &reconciler, options).await
}

/// Remove unused keys given already extracted keys.
///
/// Only documents that actually lose keys are rewritten. Nothing is removed
/// while some source file could not be parsed, since its keys are unknown.
pub async fn clean_extracted(
    ctx: &ProjectContext,
    reconciler: &Reconciler<'_>,
    options: CleanOptions,
) -> Result<CleanReport> {
    let unparsed = reconciler.unparsed_files();
    if !unparsed.is_empty() {
        if !options.dry_run {
            return Err(Error::UnparsedSources {
                files: unparsed.to_vec(),
            });
        }
        warn!(
            files = unparsed.len(),
            "some sources could not be parsed, unused keys may be overstated"
        );
    }

    let index = reconciler.index();
    let pairs: Vec<(String, String)> = ctx
        .config
        .namespaces
        .iter()
        .flat_map(|ns| {
            ctx.config
                .locales
                .iter()
                .map(move |locale| (locale.clone(), ns.clone()))
        })
        .collect();

    let store = &ctx.store;
    let results = fan_out(pairs, |(locale, namespace)| async move {
        let mut document = store.load(&locale, &namespace).await?;
        let removed = compute_unused(index, &namespace, &document);

        if !removed.is_empty() {
            document.retain(|key, _| index.contains(&namespace, key));
            if !options.dry_run {
                store.write(&locale, &namespace, &document).await?;
                info!(
                    locale = %locale,
                    namespace = %namespace,
                    removed = removed.len(),
                    "removed unused keys"
                );
            }
        }

        Ok(DocumentCleanup {
            remaining: document.len(),
            locale,
            namespace,
            removed,
        })
    })
    .await
    .into_result()?;

    Ok(CleanReport {
        documents: results.into_iter().map(|(_, cleanup)| cleanup).collect(),
        dry_run: options.dry_run,
    })
}
