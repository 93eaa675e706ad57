use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;

use crate::engines::Prompter;

/// Reads answers line by line from standard input.
///
/// Questions go to stderr so stdout only carries the command report.
pub struct StdinPrompter;

#[async_trait]
impl Prompter for StdinPrompter {
    async fn ask(&self, message: &str) -> Result<String> {
        let message = message.to_string();
        tokio::task::spawn_blocking(move || {
            let mut stderr = io::stderr().lock();
            write!(stderr, "{} {}: ", "?".cyan().bold(), message)?;
            stderr.flush()?;

            let mut line = String::new();
            let read = io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            if read == 0 {
                anyhow::bail!("stdin closed before an answer was given");
            }
            Ok(line.trim().to_string())
        })
        .await
        .context("prompt task failed")?
    }
}
