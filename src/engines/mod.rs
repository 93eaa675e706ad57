//! Orchestration over extraction, reconciliation, translation and storage.
//!
//! Every engine takes the [`ProjectContext`] by reference and fans out over
//! independent (locale, namespace) documents. A single document is always
//! loaded, modified and written by one task.

pub mod add_key;
pub mod clean;
pub mod prompt;
pub mod prune;
pub mod replace;
pub mod scan;
pub mod sync;

use serde::Serialize;

use crate::core::context::ProjectContext;
use crate::core::fan_out::fan_out;
use crate::core::store::Translations;
use crate::error::Result;

pub use add_key::{AddKeyReport, add_translation_key};
pub use clean::{CleanOptions, CleanReport, DocumentCleanup, clean};
pub use prompt::{MAX_ATTEMPTS, Prompter};
pub use prune::{PruneOptions, PruneReport, prune_namespace};
pub use replace::{ReplaceReport, choose_existing_key, replace_key};
pub use scan::{ScanReport, scan};
pub use sync::{LocaleSync, SyncReport, sync};

/// Values to merge into one document.
#[derive(Debug, Clone)]
pub struct DocumentUpdate {
    pub locale: String,
    pub namespace: String,
    pub values: Translations,
}

/// A document that was written, with the number of keys merged into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenDocument {
    pub locale: String,
    pub namespace: String,
    pub keys: usize,
}

/// Merge each update into its document and write it back, concurrently.
///
/// Existing keys not named in an update are kept; named keys are overwritten.
/// Each update must target a distinct (locale, namespace) pair.
pub(crate) async fn apply_updates(
    ctx: &ProjectContext,
    updates: Vec<DocumentUpdate>,
) -> Result<Vec<WrittenDocument>> {
    let store = &ctx.store;
    let updates: Vec<DocumentUpdate> = updates
        .into_iter()
        .filter(|u| !u.values.is_empty())
        .collect();

    let written = fan_out(updates, |update| async move {
        let mut document = store.load(&update.locale, &update.namespace).await?;
        let keys = update.values.len();
        document.extend(update.values);
        store
            .write(&update.locale, &update.namespace, &document)
            .await?;
        Ok(WrittenDocument {
            locale: update.locale,
            namespace: update.namespace,
            keys,
        })
    })
    .await
    .into_result()?;

    Ok(written.into_iter().map(|(_, w)| w).collect())
}
