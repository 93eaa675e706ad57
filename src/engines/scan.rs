//! Discover new keys, ask for their default-locale values and translate them.

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::core::context::ProjectContext;
use crate::core::fan_out::{FanOut, fan_out};
use crate::core::reconcile::{KeyIndex, MissingKeyRecord, Reconciler, compute_missing};
use crate::core::store::Translations;
use crate::engines::clean::{CleanOptions, CleanReport, clean_extracted};
use crate::engines::prompt::Prompter;
use crate::engines::{DocumentUpdate, WrittenDocument, apply_updates};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct ScanReport {
    /// Present when `autoClear` removed unused keys first.
    pub cleaned: Option<CleanReport>,
    pub missing: Vec<MissingKeyRecord>,
    /// Keys whose default value was taken from a sibling namespace.
    pub reused: Vec<String>,
    /// Keys left out because the answer was empty.
    pub skipped: Vec<String>,
    /// Locales translated in this run.
    pub translated_locales: Vec<String>,
    pub written: Vec<WrittenDocument>,
}

/// An existing default-locale value for `record.key` in another namespace.
///
/// Namespaces that reference the key are searched first, then every
/// configured namespace.
fn find_existing_value(
    record: &MissingKeyRecord,
    index: &KeyIndex,
    namespaces: &[String],
    documents: &IndexMap<String, Translations>,
) -> Option<String> {
    index
        .namespaces_of(&record.key)
        .chain(namespaces.iter().map(String::as_str))
        .filter_map(|ns| documents.get(ns)?.get(&record.key))
        .find(|value| !value.is_empty())
        .cloned()
}

fn prompt_message(record: &MissingKeyRecord) -> String {
    format!("{} ({})", record.key, record.namespaces.join(", "))
}

/// Updates writing `values` into every namespace that lacks each key.
fn updates_for_locale(
    locale: &str,
    values: &Translations,
    missing: &[MissingKeyRecord],
) -> Vec<DocumentUpdate> {
    let mut per_namespace: IndexMap<&str, Translations> = IndexMap::new();
    for record in missing {
        let Some(value) = values.get(&record.key) else {
            continue;
        };
        for namespace in &record.namespaces {
            per_namespace
                .entry(namespace.as_str())
                .or_default()
                .insert(record.key.clone(), value.clone());
        }
    }

    per_namespace
        .into_iter()
        .map(|(namespace, values)| DocumentUpdate {
            locale: locale.to_string(),
            namespace: namespace.to_string(),
            values,
        })
        .collect()
}

/// Fill every missing key.
///
/// Values are reused from sibling namespaces or asked from `prompter`, then
/// translated into every other locale unless `disableTranslationDuringScan`
/// is set. When some locales fail to translate, the default locale and every
/// translated locale are still written before the first failure is returned.
pub async fn scan(ctx: &ProjectContext, prompter: &dyn Prompter) -> Result<ScanReport> {
    let config = &ctx.config;
    let reconciler = Reconciler::new(ctx).await?;
    let mut report = ScanReport::default();

    if config.auto_clear {
        if reconciler.unparsed_files().is_empty() {
            report.cleaned =
                Some(clean_extracted(ctx, &reconciler, CleanOptions::default()).await?);
        } else {
            warn!(
                files = reconciler.unparsed_files().len(),
                "skipping autoClear, some sources could not be parsed"
            );
        }
    }

    let documents = reconciler.load_default_documents().await?;
    report.missing = compute_missing(reconciler.index(), &documents);
    if report.missing.is_empty() {
        info!("no missing keys");
        return Ok(report);
    }
    info!(count = report.missing.len(), "missing keys found");

    let secondary: Vec<String> = config.secondary_locales().map(str::to_string).collect();
    let batcher = if config.disable_translation_during_scan || secondary.is_empty() {
        None
    } else {
        Some(ctx.require_translator()?)
    };

    let mut source = Translations::new();
    for record in &report.missing {
        if let Some(value) =
            find_existing_value(record, reconciler.index(), &config.namespaces, &documents)
        {
            report.reused.push(record.key.clone());
            source.insert(record.key.clone(), value);
            continue;
        }

        let answer = prompter
            .ask(&prompt_message(record))
            .await
            .map_err(|e| Error::Prompt {
                key: record.key.clone(),
                source: e,
            })?;
        if answer.is_empty() {
            report.skipped.push(record.key.clone());
        } else {
            source.insert(record.key.clone(), answer);
        }
    }

    let translated: FanOut<String, Translations> = match &batcher {
        Some(batcher) => {
            let default_locale = ctx.default_locale();
            let source = &source;
            fan_out(secondary, |locale| async move {
                batcher.translate(default_locale, &locale, source).await
            })
            .await
        }
        None => FanOut::default(),
    };

    let mut updates = updates_for_locale(ctx.default_locale(), &source, &report.missing);
    for (locale, values) in &translated.succeeded {
        updates.extend(updates_for_locale(locale, values, &report.missing));
        report.translated_locales.push(locale.clone());
    }

    report.written = apply_updates(ctx, updates).await?;

    if let Some((locale, err)) = translated.failed.into_iter().next() {
        warn!(locale = %locale, "translation failed, locale left unchanged");
        return Err(err);
    }
    Ok(report)
}
