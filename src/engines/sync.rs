//! Fill keys present in the default locale into every other locale.

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::core::context::ProjectContext;
use crate::core::fan_out::fan_out;
use crate::core::reconcile::Reconciler;
use crate::core::store::Translations;
use crate::engines::{DocumentUpdate, WrittenDocument, apply_updates};
use crate::error::Result;

/// Result of syncing one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSync {
    pub locale: String,
    /// Distinct keys the locale lacked in at least one namespace.
    pub missing: usize,
    /// Keys filled from the same locale's other namespaces.
    pub reused: usize,
    pub translated: usize,
    pub written: Vec<WrittenDocument>,
}

#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Documents created empty because they did not exist yet.
    pub created: Vec<(String, String)>,
    pub locales: Vec<LocaleSync>,
}

/// A key lacking in some namespaces of one locale, with its default value.
struct MissingEntry {
    value: String,
    namespaces: Vec<String>,
}

fn needs_value(document: Option<&Translations>, key: &str) -> bool {
    document
        .and_then(|doc| doc.get(key))
        .is_none_or(|value| value.is_empty())
}

/// Every key of the default locale that `locale_docs` lacks, across namespaces.
///
/// The first namespace's default value wins when a key appears in several.
fn collect_missing(
    default_docs: &IndexMap<String, Translations>,
    locale_docs: &IndexMap<String, Translations>,
) -> IndexMap<String, MissingEntry> {
    let mut missing: IndexMap<String, MissingEntry> = IndexMap::new();
    for (namespace, defaults) in default_docs {
        for (key, value) in defaults {
            if !needs_value(locale_docs.get(namespace), key) {
                continue;
            }
            missing
                .entry(key.clone())
                .or_insert_with(|| MissingEntry {
                    value: value.clone(),
                    namespaces: Vec::new(),
                })
                .namespaces
                .push(namespace.clone());
        }
    }
    missing
}

/// A non-empty value of `key` in any namespace of the same locale.
fn find_sibling_translation<'a>(
    locale_docs: &'a IndexMap<String, Translations>,
    key: &str,
) -> Option<&'a String> {
    locale_docs
        .values()
        .filter_map(|doc| doc.get(key))
        .find(|value| !value.is_empty())
}

/// Create every document that does not exist yet as an empty mapping.
async fn ensure_documents(ctx: &ProjectContext) -> Result<Vec<(String, String)>> {
    let store = &ctx.store;
    let pairs: Vec<(String, String)> = ctx
        .config
        .locales
        .iter()
        .flat_map(|locale| {
            ctx.config
                .namespaces
                .iter()
                .map(move |ns| (locale.clone(), ns.clone()))
        })
        .collect();

    let created = fan_out(pairs, |(locale, namespace)| async move {
        if store.exists(&locale, &namespace).await? {
            return Ok(false);
        }
        info!(document = %store.describe(&locale, &namespace), "creating missing document");
        store.write(&locale, &namespace, &Translations::new()).await?;
        Ok(true)
    })
    .await
    .into_result()?;

    Ok(created
        .into_iter()
        .filter_map(|(pair, created)| created.then_some(pair))
        .collect())
}

async fn sync_locale(
    ctx: &ProjectContext,
    reconciler: &Reconciler<'_>,
    default_docs: &IndexMap<String, Translations>,
    locale: &str,
) -> Result<LocaleSync> {
    let locale_docs = reconciler.load_locale(locale).await?;
    let missing = collect_missing(default_docs, &locale_docs);

    let mut report = LocaleSync {
        locale: locale.to_string(),
        missing: missing.len(),
        ..Default::default()
    };
    if missing.is_empty() {
        info!(locale, "no missing keys");
        return Ok(report);
    }

    let mut values = Translations::new();
    let mut to_translate = Translations::new();
    for (key, entry) in &missing {
        if let Some(existing) = find_sibling_translation(&locale_docs, key) {
            values.insert(key.clone(), existing.clone());
        } else if entry.value.is_empty() {
            values.insert(key.clone(), String::new());
        } else {
            to_translate.insert(key.clone(), entry.value.clone());
        }
    }
    report.reused = values.len();

    if !to_translate.is_empty() {
        let batcher = ctx.require_translator()?;
        info!(locale, count = to_translate.len(), "translating keys");
        let translated = batcher
            .translate(ctx.default_locale(), locale, &to_translate)
            .await?;
        report.translated = translated.len();
        values.extend(translated);
    }

    let mut per_namespace: IndexMap<&str, Translations> = IndexMap::new();
    for (key, entry) in &missing {
        let Some(value) = values.get(key) else {
            continue;
        };
        for namespace in &entry.namespaces {
            per_namespace
                .entry(namespace.as_str())
                .or_default()
                .insert(key.clone(), value.clone());
        }
    }

    let updates = per_namespace
        .into_iter()
        .map(|(namespace, values)| DocumentUpdate {
            locale: locale.to_string(),
            namespace: namespace.to_string(),
            values,
        })
        .collect();

    report.written = apply_updates(ctx, updates).await?;
    Ok(report)
}

/// Bring every non-default locale up to date with the default locale.
///
/// Locales run concurrently. A failing locale does not stop the others; the
/// first failure is returned once all of them have finished.
pub async fn sync(ctx: &ProjectContext) -> Result<SyncReport> {
    let created = ensure_documents(ctx).await?;

    let reconciler = Reconciler::from_associations(ctx, &[]);
    let default_docs = reconciler.load_default_documents().await?;

    let secondary: Vec<String> = ctx.config.secondary_locales().map(str::to_string).collect();
    let reconciler = &reconciler;
    let default_docs = &default_docs;
    let results = fan_out(secondary, |locale| async move {
        sync_locale(ctx, reconciler, default_docs, &locale).await
    })
    .await;

    for (locale, err) in &results.failed {
        warn!(locale = %locale, error = %err, "sync failed");
    }

    let locales = results.into_result()?;
    Ok(SyncReport {
        created,
        locales: locales.into_iter().map(|(_, report)| report).collect(),
    })
}
