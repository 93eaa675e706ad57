//! Split a namespace: copy the keys a subset of sources uses into a new one.

use indexmap::IndexSet;
use tracing::{info, warn};

use crate::config::GlobPatternRule;
use crate::core::context::ProjectContext;
use crate::core::extract::KeyExtractor;
use crate::core::fan_out::fan_out;
use crate::core::keys::pure_key;
use crate::core::store::Translations;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct PruneOptions {
    pub source: String,
    pub target: String,
    /// Source globs to extract from. Empty means the configured globs.
    pub patterns: Vec<String>,
}

#[derive(Debug, Default)]
pub struct PruneReport {
    /// Keys referenced by the selected sources that resolve in the source namespace.
    pub keys: usize,
    /// Keys written per locale, in configured locale order.
    pub locales: Vec<(String, usize)>,
    pub failures: Vec<(String, Error)>,
}

impl PruneReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Create the `target` namespace document of every locale, holding only the
/// keys of `source` that the selected files use.
///
/// Locales are processed independently: a failing locale is recorded in the
/// report and the others are still written.
pub async fn prune_namespace(ctx: &ProjectContext, options: PruneOptions) -> Result<PruneReport> {
    let config = &ctx.config;
    config.require_namespace(&options.source)?;
    if config.has_namespace(&options.target) {
        return Err(Error::configuration(format!(
            "namespace \"{}\" already exists",
            options.target
        )));
    }
    if options.target.is_empty() {
        return Err(Error::configuration("the target namespace must not be empty"));
    }

    let rules: Vec<GlobPatternRule> = if options.patterns.is_empty() {
        config.glob_patterns.clone()
    } else {
        options
            .patterns
            .iter()
            .cloned()
            .map(GlobPatternRule::Pattern)
            .collect()
    };

    let extraction = KeyExtractor::with_rules(&ctx.root, config, &rules)?
        .extract_async()
        .await?;

    let is_default = config.is_default_namespace(&options.source);
    let keys: IndexSet<String> = extraction
        .associations
        .iter()
        .filter_map(|a| pure_key(&a.raw_key, &options.source, is_default))
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect();
    info!(
        source = %options.source,
        target = %options.target,
        keys = keys.len(),
        "pruning namespace"
    );

    let store = &ctx.store;
    let keys = &keys;
    let options = &options;
    let results = fan_out(config.locales.iter().cloned(), |locale| async move {
        let source = store.load(&locale, &options.source).await?;
        let pruned: Translations = source
            .into_iter()
            .filter(|(key, value)| keys.contains(key) && !value.is_empty())
            .collect();
        store
            .write(&locale, &options.target, &pruned)
            .await
            .map_err(|e| e.in_namespace(&options.target))?;
        Ok(pruned.len())
    })
    .await;

    for (locale, err) in &results.failed {
        warn!(locale = %locale, error = %err, "failed to create pruned namespace");
    }

    Ok(PruneReport {
        keys: keys.len(),
        locales: results.succeeded,
        failures: results.failed,
    })
}
