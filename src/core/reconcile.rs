//! Diffing extracted keys against persisted documents.
//!
//! Attribution of a raw key to namespaces:
//! - `"ns:key"` belongs to `ns` alone (when `ns` is configured), as `key`.
//! - `"key"` belongs to every namespace of the file it was found in. Files
//!   outside every scoped rule belong to the default namespace.
//! - A prefix that is not a configured namespace attributes nothing.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::context::ProjectContext;
use crate::core::extract::KeyNamespaceAssociation;
use crate::core::fan_out::fan_out;
use crate::core::keys::{pure_key, split_namespace};
use crate::core::store::Translations;
use crate::error::{Error, Result};

/// A key absent from the default-locale document of some of its namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingKeyRecord {
    pub key: String,
    /// The first namespace found missing the key.
    pub primary_namespace: String,
    /// Every namespace that references the key and lacks it.
    pub namespaces: Vec<String>,
}

/// Pure keys referenced in source, per namespace and per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyIndex {
    pub keys_by_namespace: IndexMap<String, IndexSet<String>>,
    pub key_to_namespaces: IndexMap<String, IndexSet<String>>,
}

/// The (namespace, pure key) pairs a raw key found in a file attributes to.
pub fn attribute_key<'a>(
    raw_key: &'a str,
    file_namespaces: &'a [String],
    config: &Config,
) -> Vec<(&'a str, &'a str)> {
    match split_namespace(raw_key) {
        Some((prefix, _)) if config.has_namespace(prefix) => pure_key(raw_key, prefix, false)
            .map(|key| vec![(prefix, key)])
            .unwrap_or_default(),
        Some(_) => Vec::new(),
        None => file_namespaces
            .iter()
            .filter_map(|ns| pure_key(raw_key, ns, true).map(|key| (ns.as_str(), key)))
            .collect(),
    }
}

impl KeyIndex {
    pub fn build(associations: &[KeyNamespaceAssociation], config: &Config) -> Self {
        let mut index = Self::default();
        for association in associations {
            let attributed = attribute_key(&association.raw_key, &association.namespaces, config);
            if attributed.is_empty() {
                debug!(
                    key = %association.raw_key,
                    file = %association.file_path,
                    "key does not resolve to a configured namespace"
                );
            }
            for (namespace, key) in attributed {
                if key.is_empty() {
                    continue;
                }
                index.insert(namespace, key);
            }
        }
        index
    }

    fn insert(&mut self, namespace: &str, key: &str) {
        self.keys_by_namespace
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string());
        self.key_to_namespaces
            .entry(key.to_string())
            .or_default()
            .insert(namespace.to_string());
    }

    /// Whether `key` is referenced in `namespace`.
    pub fn contains(&self, namespace: &str, key: &str) -> bool {
        self.keys_by_namespace
            .get(namespace)
            .is_some_and(|keys| keys.contains(key))
    }

    pub fn keys_in<'s>(&'s self, namespace: &str) -> impl Iterator<Item = &'s str> + use<'s> {
        self.keys_by_namespace
            .get(namespace)
            .into_iter()
            .flat_map(|keys| keys.iter().map(String::as_str))
    }

    pub fn namespaces_of<'s>(&'s self, key: &str) -> impl Iterator<Item = &'s str> + use<'s> {
        self.key_to_namespaces
            .get(key)
            .into_iter()
            .flat_map(|namespaces| namespaces.iter().map(String::as_str))
    }
}

/// Missing keys given the default-locale document of every namespace.
///
/// Records come out in discovery order, one per distinct pure key.
pub fn compute_missing(
    index: &KeyIndex,
    documents: &IndexMap<String, Translations>,
) -> Vec<MissingKeyRecord> {
    let lacks = |namespace: &str, key: &str| {
        documents
            .get(namespace)
            .is_none_or(|doc| !doc.contains_key(key))
    };

    let mut records: IndexMap<&str, MissingKeyRecord> = IndexMap::new();
    for (namespace, keys) in &index.keys_by_namespace {
        for key in keys {
            if records.contains_key(key.as_str()) || !lacks(namespace, key) {
                continue;
            }
            let namespaces = index
                .namespaces_of(key)
                .filter(|ns| lacks(ns, key))
                .map(str::to_string)
                .collect();
            records.insert(
                key.as_str(),
                MissingKeyRecord {
                    key: key.clone(),
                    primary_namespace: namespace.clone(),
                    namespaces,
                },
            );
        }
    }
    records.into_values().collect()
}

/// Keys of `document` that nothing in `namespace` references, in document order.
pub fn compute_unused(index: &KeyIndex, namespace: &str, document: &Translations) -> Vec<String> {
    document
        .keys()
        .filter(|key| !index.contains(namespace, key))
        .cloned()
        .collect()
}

/// Extracted keys of a project, ready to diff against its documents.
pub struct Reconciler<'a> {
    ctx: &'a ProjectContext,
    index: KeyIndex,
    /// Sources that could not be read or parsed; their keys are not indexed.
    unparsed_files: Vec<String>,
}

impl<'a> Reconciler<'a> {
    /// Extract keys from the project sources and index them.
    pub async fn new(ctx: &'a ProjectContext) -> Result<Self> {
        let extraction = ctx.extractor()?.extract_async().await?;
        info!(
            files = extraction.files_scanned,
            calls = extraction.associations.len(),
            skipped = extraction.failures.len(),
            "source files scanned"
        );
        let mut reconciler = Self::from_associations(ctx, &extraction.associations);
        reconciler.unparsed_files = extraction
            .failures
            .iter()
            .filter_map(|failure| match failure {
                Error::SourceParse { path, .. } => Some(path.clone()),
                _ => None,
            })
            .collect();
        Ok(reconciler)
    }

    pub fn from_associations(
        ctx: &'a ProjectContext,
        associations: &[KeyNamespaceAssociation],
    ) -> Self {
        Self {
            ctx,
            index: KeyIndex::build(associations, &ctx.config),
            unparsed_files: Vec::new(),
        }
    }

    pub fn index(&self) -> &KeyIndex {
        &self.index
    }

    pub fn unparsed_files(&self) -> &[String] {
        &self.unparsed_files
    }

    /// Load one locale's document for every configured namespace, concurrently.
    pub async fn load_locale(&self, locale: &str) -> Result<IndexMap<String, Translations>> {
        let store = &self.ctx.store;
        let loaded = fan_out(self.ctx.config.namespaces.iter().cloned(), |namespace| async move {
            store.load(locale, &namespace).await
        })
        .await
        .into_result()?;
        Ok(loaded.into_iter().collect())
    }

    pub async fn load_default_documents(&self) -> Result<IndexMap<String, Translations>> {
        self.load_locale(self.ctx.default_locale()).await
    }

    pub async fn missing_keys(&self) -> Result<Vec<MissingKeyRecord>> {
        let documents = self.load_default_documents().await?;
        Ok(compute_missing(&self.index, &documents))
    }
}

/// Extract and report the missing keys of a project.
pub async fn missing_keys(ctx: &ProjectContext) -> Result<Vec<MissingKeyRecord>> {
    Reconciler::new(ctx).await?.missing_keys().await
}
