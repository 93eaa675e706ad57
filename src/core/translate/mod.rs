//! Machine translation of key/value mappings.
//!
//! The translation primitive itself is a black box behind [`Translator`].
//! [`TranslationBatcher`] chunks requests and verifies that no key was
//! renamed or dropped.

pub mod batcher;
pub mod command;
pub mod languages;

use async_trait::async_trait;
use serde::Serialize;

use crate::core::store::Translations;

pub use batcher::{CHUNK_SIZE, TranslationBatcher};
pub use command::CommandTranslator;
pub use languages::display_name;

/// Input of one call to the translation primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    /// Display name of the source language, e.g. `English`.
    pub input_language: String,
    pub output_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub data: Translations,
}

/// The batch-translation primitive.
///
/// Implementations must return a mapping with exactly the request's keys.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_batch(
        &self,
        model: &str,
        request: &TranslationRequest,
    ) -> anyhow::Result<Translations>;
}
