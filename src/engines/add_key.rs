//! Add a single key to the default locale.

use tracing::info;

use crate::core::context::ProjectContext;
use crate::core::keys::split_namespace;
use crate::core::reconcile::Reconciler;
use crate::engines::{DocumentUpdate, WrittenDocument, apply_updates};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddKeyReport {
    /// The key as stored, without a namespace prefix.
    pub key: String,
    pub locale: String,
    pub namespaces: Vec<String>,
    /// Whether the namespaces came from where the key is used in source.
    pub from_usage: bool,
    pub written: Vec<WrittenDocument>,
}

/// Store `value` under `key` in the default locale of the key's namespaces.
///
/// Namespaces are picked in this order:
/// 1. the key's `ns:` prefix, when it names a configured namespace;
/// 2. every namespace the key is used in across the project sources;
/// 3. `namespace`, which must be configured;
/// 4. the default namespace.
pub async fn add_translation_key(
    ctx: &ProjectContext,
    key: &str,
    value: &str,
    namespace: Option<&str>,
) -> Result<AddKeyReport> {
    if key.is_empty() {
        return Err(Error::configuration("the key must not be empty"));
    }

    let (pure_key, namespaces, from_usage) = match split_namespace(key) {
        Some((prefix, rest)) if ctx.config.has_namespace(prefix) => {
            (rest, vec![prefix.to_string()], false)
        }
        _ => {
            let reconciler = Reconciler::new(ctx).await?;
            let used: Vec<String> = reconciler
                .index()
                .namespaces_of(key)
                .map(str::to_string)
                .collect();
            if !used.is_empty() {
                (key, used, true)
            } else if let Some(namespace) = namespace {
                ctx.config.require_namespace(namespace)?;
                (key, vec![namespace.to_string()], false)
            } else {
                (key, vec![ctx.default_namespace().to_string()], false)
            }
        }
    };

    if pure_key.is_empty() {
        return Err(Error::configuration("the key must not be empty"));
    }

    info!(key = pure_key, namespaces = ?namespaces, from_usage, "adding key");

    let locale = ctx.default_locale();
    let updates = namespaces
        .iter()
        .map(|namespace| DocumentUpdate {
            locale: locale.to_string(),
            namespace: namespace.clone(),
            values: [(pure_key.to_string(), value.to_string())].into_iter().collect(),
        })
        .collect();
    let written = apply_updates(ctx, updates).await?;

    Ok(AddKeyReport {
        key: pure_key.to_string(),
        locale: locale.to_string(),
        namespaces,
        from_usage,
        written,
    })
}
