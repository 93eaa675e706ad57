//! Replace the value of an existing key in the default namespace.

use tracing::info;

use crate::core::context::ProjectContext;
use crate::core::fan_out::fan_out;
use crate::core::store::Translations;
use crate::engines::prompt::{MAX_ATTEMPTS, Prompter};
use crate::engines::{DocumentUpdate, WrittenDocument, apply_updates};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceReport {
    pub key: String,
    pub previous: String,
    pub written: Vec<WrittenDocument>,
}

/// Resolve the key to replace, asking until an existing key is given.
///
/// `initial` is tried first without prompting. At most [`MAX_ATTEMPTS`]
/// prompts are made before giving up with an unknown-key error.
pub async fn choose_existing_key(
    ctx: &ProjectContext,
    initial: Option<String>,
    prompter: &dyn Prompter,
) -> Result<String> {
    let locale = ctx.default_locale();
    let namespace = ctx.default_namespace();
    let document = ctx.store.load(locale, namespace).await?;

    let unknown = |key: String| Error::UnknownKey {
        key,
        locale: locale.to_string(),
        namespace: namespace.to_string(),
    };

    let mut candidate = initial;
    let mut last = String::new();
    for attempt in 0..=MAX_ATTEMPTS {
        if let Some(key) = candidate.take() {
            if document.contains_key(&key) {
                return Ok(key);
            }
            info!(key = %key, "key does not exist");
            last = key;
        }
        if attempt == MAX_ATTEMPTS {
            break;
        }
        let message = if last.is_empty() {
            "Enter the key to replace the translation for".to_string()
        } else {
            format!("The key \"{}\" does not exist. Enter an existing key", last)
        };
        let answer = prompter.ask(&message).await.map_err(|e| Error::Prompt {
            key: last.clone(),
            source: e,
        })?;
        candidate = Some(answer);
    }

    Err(unknown(last))
}

/// Set `key` to `value` in the default locale and translate it into every
/// other locale, all within the default namespace.
pub async fn replace_key(ctx: &ProjectContext, key: &str, value: &str) -> Result<ReplaceReport> {
    let locale = ctx.default_locale();
    let namespace = ctx.default_namespace();

    let document = ctx.store.load(locale, namespace).await?;
    let previous = document.get(key).cloned().ok_or_else(|| Error::UnknownKey {
        key: key.to_string(),
        locale: locale.to_string(),
        namespace: namespace.to_string(),
    })?;

    let source: Translations = [(key.to_string(), value.to_string())].into_iter().collect();
    let secondary: Vec<String> = ctx.config.secondary_locales().map(str::to_string).collect();

    let mut updates = vec![DocumentUpdate {
        locale: locale.to_string(),
        namespace: namespace.to_string(),
        values: source.clone(),
    }];

    if !secondary.is_empty() {
        let batcher = ctx.require_translator()?;
        let source = &source;
        let batcher = &batcher;
        let translated = fan_out(secondary, |target| async move {
            batcher
                .translate(locale, &target, source)
                .await
                .map_err(|e| e.in_namespace(namespace))
        })
        .await
        .into_result()?;

        updates.extend(
            translated
                .into_iter()
                .map(|(target, values)| DocumentUpdate {
                    locale: target,
                    namespace: namespace.to_string(),
                    values,
                }),
        );
    }

    let written = apply_updates(ctx, updates).await?;
    Ok(ReplaceReport {
        key: key.to_string(),
        previous,
        written,
    })
}
