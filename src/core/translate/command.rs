use std::io::ErrorKind;
use std::process::Stdio;

use anyhow::{Context, anyhow, bail};
use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::config::TranslatorConfig;
use crate::core::store::Translations;
use crate::core::translate::{TranslationRequest, Translator};

#[derive(Serialize)]
struct CommandPayload<'a> {
    #[serde(flatten)]
    request: &'a TranslationRequest,
    model: &'a str,
}

/// Runs a host command as the translation primitive.
///
/// The request JSON is written to the command's stdin; stdout must be a
/// JSON object mapping every request key to its translated value.
#[derive(Debug, Clone)]
pub struct CommandTranslator {
    command: String,
    args: Vec<String>,
}

impl CommandTranslator {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::new(&config.command, config.args.clone())
    }
}

#[async_trait]
impl Translator for CommandTranslator {
    async fn translate_batch(
        &self,
        model: &str,
        request: &TranslationRequest,
    ) -> anyhow::Result<Translations> {
        let payload = serde_json::to_vec(&CommandPayload { request, model })
            .context("Failed to serialize translation request")?;

        debug!(command = %self.command, bytes = payload.len(), "spawning translator");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start translator command `{}`", self.command))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("translator stdin is not available"))?;
        // Feed stdin while the output pipes are drained
        let feed = async move {
            let written = stdin.write_all(&payload).await;
            drop(stdin);
            written
        };
        let (written, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.context("Failed to wait for translator command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "translator command exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }
        if let Err(e) = written
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(e).context("Failed to write translation request");
        }

        serde_json::from_slice(&output.stdout).context("Translator returned invalid JSON")
    }
}
