use async_trait::async_trait;

/// Source of values typed by a person.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask `message` and return the trimmed answer.
    async fn ask(&self, message: &str) -> anyhow::Result<String>;
}

/// Bounded number of attempts for answers that must satisfy a condition.
pub const MAX_ATTEMPTS: usize = 3;
