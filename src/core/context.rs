use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, load_config};
use crate::core::extract::KeyExtractor;
use crate::core::store::{LocaleStore, PathTemplateStore};
use crate::core::translate::{CommandTranslator, TranslationBatcher, Translator};
use crate::error::{Error, Result};

/// Everything an engine needs for one command invocation.
///
/// Built once, then passed by reference into every engine. The configuration
/// is immutable for the lifetime of the context.
#[derive(Clone)]
pub struct ProjectContext {
    /// Directory that globs and path templates are resolved against.
    pub root: PathBuf,
    pub config: Config,
    pub store: Arc<dyn LocaleStore>,
    translator: Option<Arc<dyn Translator>>,
}

impl ProjectContext {
    /// Build a context with the file-backed store and, when configured,
    /// the command translator.
    pub fn new(root: &Path, config: Config) -> Result<Self> {
        config.validate()?;
        let store: Arc<dyn LocaleStore> = Arc::new(PathTemplateStore::from_config(root, &config));
        let translator = config
            .translator
            .as_ref()
            .map(|t| Arc::new(CommandTranslator::from_config(t)) as Arc<dyn Translator>);

        Ok(Self {
            root: root.to_path_buf(),
            config,
            store,
            translator,
        })
    }

    /// Find and load the config file starting at `start_dir`.
    pub fn load(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        Self::new(&loaded.root, loaded.config)
    }

    pub fn with_store(mut self, store: Arc<dyn LocaleStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// A batcher configured from the project settings.
    ///
    /// Fails with a configuration error when no translator is available.
    pub fn require_translator(&self) -> Result<TranslationBatcher> {
        let translator = self.translator.clone().ok_or_else(|| {
            Error::configuration(
                "no translator configured: add a \"translator\" entry with the command to run",
            )
        })?;

        Ok(TranslationBatcher::new(translator, &self.config.model)
            .with_context(self.config.context.clone())
            .with_delay(Duration::from_millis(self.config.translation_delay_ms)))
    }

    pub fn extractor(&self) -> Result<KeyExtractor> {
        KeyExtractor::new(&self.root, &self.config)
    }

    pub fn default_locale(&self) -> &str {
        &self.config.default_locale
    }

    pub fn default_namespace(&self) -> &str {
        &self.config.default_namespace
    }
}
