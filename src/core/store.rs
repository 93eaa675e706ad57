//! Persistence of per-(locale, namespace) translation documents.
//!
//! Two backends implement [`LocaleStore`]:
//! - [`PathTemplateStore`]: JSON files addressed by `{{lng}}`/`{{ns}}` path templates.
//! - [`CallbackStore`]: a host-provided async loader/saver pair.
//!
//! The backend is chosen once when the project context is built. Stores do
//! no cross-document locking; callers never issue two concurrent writes to
//! the same (locale, namespace) pair.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use tracing::debug;

use crate::config::{Config, LOCALE_PLACEHOLDER, NAMESPACE_PLACEHOLDER};
use crate::error::{Error, Result};

/// Flat mapping from pure key to translated value, in document order.
pub type Translations = IndexMap<String, String>;

#[async_trait]
pub trait LocaleStore: Send + Sync {
    /// Load one document. A document that does not exist yet is empty.
    async fn load(&self, locale: &str, namespace: &str) -> Result<Translations>;

    /// Persist one document, replacing its previous contents.
    async fn write(&self, locale: &str, namespace: &str, translations: &Translations) -> Result<()>;

    /// Whether the document has been persisted before.
    async fn exists(&self, _locale: &str, _namespace: &str) -> Result<bool> {
        Ok(true)
    }

    /// Human-readable address of a document, used in reports and errors.
    fn describe(&self, locale: &str, namespace: &str) -> String;
}

/// Substitute the locale and namespace placeholders of a path template.
pub fn resolve_template(template: &str, locale: &str, namespace: &str) -> String {
    template
        .replace(LOCALE_PLACEHOLDER, locale)
        .replace(NAMESPACE_PLACEHOLDER, namespace)
}

#[derive(Debug, Clone)]
pub struct PathTemplateStore {
    root: PathBuf,
    load_path: String,
    save_path: String,
}

impl PathTemplateStore {
    pub fn new(root: &Path, load_path: impl Into<String>, save_path: impl Into<String>) -> Self {
        Self {
            root: root.to_path_buf(),
            load_path: load_path.into(),
            save_path: save_path.into(),
        }
    }

    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self::new(root, &config.load_path, &config.save_path)
    }

    fn resolve(&self, template: &str, locale: &str, namespace: &str) -> PathBuf {
        let resolved = PathBuf::from(resolve_template(template, locale, namespace));
        if resolved.is_absolute() {
            resolved
        } else {
            self.root.join(resolved)
        }
    }

    pub fn load_path_for(&self, locale: &str, namespace: &str) -> PathBuf {
        self.resolve(&self.load_path, locale, namespace)
    }

    pub fn save_path_for(&self, locale: &str, namespace: &str) -> PathBuf {
        self.resolve(&self.save_path, locale, namespace)
    }

    fn io_error(locale: &str, namespace: &str, path: &Path, source: anyhow::Error) -> Error {
        Error::DocumentIo {
            locale: locale.to_string(),
            namespace: namespace.to_string(),
            path: path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl LocaleStore for PathTemplateStore {
    async fn load(&self, locale: &str, namespace: &str) -> Result<Translations> {
        let path = self.load_path_for(locale, namespace);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "document not found, using empty mapping");
                return Ok(Translations::new());
            }
            Err(e) => return Err(Self::io_error(locale, namespace, &path, e.into())),
        };

        if content.trim().is_empty() {
            return Ok(Translations::new());
        }

        serde_json::from_str(&content).map_err(|source| Error::DocumentParse {
            locale: locale.to_string(),
            namespace: namespace.to_string(),
            path: path.display().to_string(),
            source,
        })
    }

    async fn write(
        &self,
        locale: &str,
        namespace: &str,
        translations: &Translations,
    ) -> Result<()> {
        let path = self.save_path_for(locale, namespace);

        let result: anyhow::Result<()> = async {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }

            let mut content =
                serde_json::to_string_pretty(translations).context("Failed to serialize JSON")?;
            if !content.ends_with('\n') {
                content.push('\n');
            }

            // Write next to the target and rename so readers never see a partial file
            let tmp_path = path.with_extension("json.tmp");
            tokio::fs::write(&tmp_path, content)
                .await
                .with_context(|| format!("Failed to write file: {}", tmp_path.display()))?;
            tokio::fs::rename(&tmp_path, &path)
                .await
                .with_context(|| format!("Failed to replace file: {}", path.display()))?;
            Ok(())
        }
        .await;

        result.map_err(|source| Self::io_error(locale, namespace, &path, source))?;
        debug!(path = %path.display(), keys = translations.len(), "document written");
        Ok(())
    }

    /// Checks the save path, which is the file `write` would replace.
    async fn exists(&self, locale: &str, namespace: &str) -> Result<bool> {
        let path = self.save_path_for(locale, namespace);
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| Self::io_error(locale, namespace, &path, e.into()))
    }

    fn describe(&self, locale: &str, namespace: &str) -> String {
        self.save_path_for(locale, namespace).display().to_string()
    }
}

pub type LoadFn =
    Arc<dyn Fn(String, String) -> BoxFuture<'static, anyhow::Result<Translations>> + Send + Sync>;
pub type SaveFn = Arc<
    dyn Fn(String, String, Translations) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync,
>;

/// Store that delegates to a host-provided loader/saver pair.
#[derive(Clone)]
pub struct CallbackStore {
    load: LoadFn,
    save: SaveFn,
}

impl CallbackStore {
    pub fn new(load: LoadFn, save: SaveFn) -> Self {
        Self { load, save }
    }
}

#[async_trait]
impl LocaleStore for CallbackStore {
    async fn load(&self, locale: &str, namespace: &str) -> Result<Translations> {
        (self.load)(locale.to_string(), namespace.to_string())
            .await
            .map_err(|source| Error::DocumentIo {
                locale: locale.to_string(),
                namespace: namespace.to_string(),
                path: self.describe(locale, namespace),
                source,
            })
    }

    async fn write(
        &self,
        locale: &str,
        namespace: &str,
        translations: &Translations,
    ) -> Result<()> {
        (self.save)(locale.to_string(), namespace.to_string(), translations.clone())
            .await
            .map_err(|source| Error::DocumentIo {
                locale: locale.to_string(),
                namespace: namespace.to_string(),
                path: self.describe(locale, namespace),
                source,
            })
    }

    fn describe(&self, locale: &str, namespace: &str) -> String {
        format!("{}:{}", locale, namespace)
    }
}
