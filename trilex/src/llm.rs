//! Port trait for the language-model collaborator.

use async_trait::async_trait;

use crate::error::QueryError;

/// A client that can answer a free-form prompt with free-form text.
///
/// The core consumes this trait in exactly two places: the candidate
/// extractor's refinement call and the batch orchestrator's per-word
/// generation. Retries, timeouts, and connection probing belong to the
/// implementation, not to the core; the core only sees text or a
/// [`QueryError`].
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a prompt and returns the raw response text.
    async fn query(&self, prompt: &str) -> Result<String, QueryError>;
}
