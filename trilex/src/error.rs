//! Error types for the collaborator boundary.
//!
//! The response parser itself is infallible by contract: every input string
//! yields a usable [`VocabularyEntry`](crate::entry::VocabularyEntry), so no
//! error type exists for it. Errors only occur where the core talks to the
//! language-model collaborator.

/// Errors surfaced by an [`LlmClient`](crate::llm::LlmClient) query.
///
/// These never reach the response parser; the parser is only invoked once
/// response text exists. Callers (the candidate extractor, the batch
/// orchestrator) catch them and apply their own fallbacks.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The request could not be delivered or the service rejected it.
    #[error("language model request failed: {0}")]
    Transport(String),

    /// The service answered but the response body carried no content.
    #[error("language model returned an empty response")]
    EmptyResponse,
}
