use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tracing::debug;

use crate::core::store::Translations;
use crate::core::translate::{TranslationRequest, Translator, display_name};
use crate::error::{Error, Result};

/// Maximum number of entries per primitive call.
pub const CHUNK_SIZE: usize = 100;

/// Splits mappings into chunks and submits them to a [`Translator`].
#[derive(Clone)]
pub struct TranslationBatcher {
    translator: Arc<dyn Translator>,
    model: String,
    context: Option<String>,
    chunk_size: usize,
    delay: Duration,
}

impl TranslationBatcher {
    pub fn new(translator: Arc<dyn Translator>, model: impl Into<String>) -> Self {
        Self {
            translator,
            model: model.into(),
            context: None,
            chunk_size: CHUNK_SIZE,
            delay: Duration::from_millis(1000),
        }
    }

    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    /// Pause inserted between consecutive chunks.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Translate `mapping` from `input_locale` to `output_locale`.
    ///
    /// All-or-nothing: if any chunk fails, nothing is returned.
    pub async fn translate(
        &self,
        input_locale: &str,
        output_locale: &str,
        mapping: &Translations,
    ) -> Result<Translations> {
        let fail = |source: anyhow::Error| Error::Translation {
            locale: output_locale.to_string(),
            namespace: None,
            source,
        };

        let mut result = Translations::with_capacity(mapping.len());
        let entries: Vec<(&String, &String)> = mapping.iter().collect();

        for (index, chunk) in entries.chunks(self.chunk_size).enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let request = TranslationRequest {
                input_language: display_name(input_locale).to_string(),
                output_language: display_name(output_locale).to_string(),
                context: self.context.clone(),
                data: chunk
                    .iter()
                    .map(|(k, v)| ((*k).clone(), (*v).clone()))
                    .collect(),
            };

            debug!(
                from = input_locale,
                to = output_locale,
                chunk = index,
                size = chunk.len(),
                "translating chunk"
            );

            let translated = self
                .translator
                .translate_batch(&self.model, &request)
                .await
                .map_err(fail)?;

            verify_keys(&request.data, &translated).map_err(fail)?;

            // Keep the input key order
            for key in request.data.keys() {
                if let Some(value) = translated.get(key) {
                    result.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(result)
    }
}

/// The primitive must return exactly the keys it was given.
fn verify_keys(input: &Translations, output: &Translations) -> anyhow::Result<()> {
    if let Some(missing) = input.keys().find(|k| !output.contains_key(*k)) {
        return Err(anyhow!("translation result is missing key \"{}\"", missing));
    }
    if let Some(extra) = output.keys().find(|k| !input.contains_key(*k)) {
        return Err(anyhow!("translation result contains unexpected key \"{}\"", extra));
    }
    Ok(())
}
