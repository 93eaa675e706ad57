//! Concurrent map with per-item result collection.
//!
//! Every engine fans out over (locale, namespace) pairs through [`fan_out`],
//! so which pairs succeeded and which failed is tracked in one place.

use std::future::Future;

use futures::future::join_all;

use crate::error::{Error, Result};

/// Outcome of a fan-out, each result tagged with the item it came from.
#[derive(Debug)]
pub struct FanOut<K, T> {
    pub succeeded: Vec<(K, T)>,
    pub failed: Vec<(K, Error)>,
}

impl<K, T> Default for FanOut<K, T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<K, T> FanOut<K, T> {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// All successful values, or the first failure in input order.
    pub fn into_result(self) -> Result<Vec<(K, T)>> {
        match self.failed.into_iter().next() {
            Some((_, err)) => Err(err),
            None => Ok(self.succeeded),
        }
    }
}

/// Run `f` for every item concurrently and wait for all of them.
///
/// No task is cancelled when another fails; results keep input order.
pub async fn fan_out<K, T, F, Fut>(items: impl IntoIterator<Item = K>, f: F) -> FanOut<K, T>
where
    K: Clone,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let items: Vec<K> = items.into_iter().collect();
    let results = join_all(items.iter().cloned().map(f)).await;

    let mut out = FanOut::default();
    for (item, result) in items.into_iter().zip(results) {
        match result {
            Ok(value) => out.succeeded.push((item, value)),
            Err(err) => out.failed.push((item, err)),
        }
    }
    out
}
