//! # trilex
//!
//! A forgiving recovery core for three-tier vocabulary explanations produced
//! by language models.
//!
//! Given the raw text a model returned for a single word, this library always
//! recovers a renderable [`VocabularyEntry`] with three explanation tiers
//! (professional, intermediate, elementary). It handles the common failure
//! shapes of model output:
//! - JSON wrapped in markdown code fences or surrounded by prose
//! - Trailing commas and stray control characters
//! - No JSON at all: emoji-labeled plain text is mined section by section
//!
//! ## Quick Start
//!
//! ```rust
//! use trilex::parse;
//!
//! let raw = r#"Here you go:
//! {"modes": {"professional": {"title": "liminal", "definition": "on a boundary"}}}
//! hope that helps!"#;
//!
//! let entry = parse(raw, "liminal");
//! assert_eq!(entry.professional.definition, "on a boundary");
//! // Tiers the response omitted are empty placeholders, never absent.
//! assert!(entry.elementary.definition.is_empty());
//! ```
//!
//! ## Features
//!
//! - **Strategy cascade**: whole-response, fenced-block, and bracket-scan
//!   isolation tried in order, each followed by a JSON repair pass
//! - **Heuristic fallback**: positional text scanning over emoji-headed
//!   sections when no JSON span survives, so `parse` never fails
//! - **Candidate extraction**: stoplist-and-frequency ranking of input text,
//!   with optional model-assisted refinement
//! - **Presentation rendering**: a tabbed document, one pane per tier
//!
//! ## Advanced Usage
//!
//! The cascade itself is exposed for callers that want to observe or extend
//! it:
//!
//! ```rust
//! use trilex::{parser::ResponseParser, BracketScan, RecoveryStrategy};
//!
//! let parser = ResponseParser::default();
//! let entry = parser.parse("no json here at all", "word");
//! assert_eq!(entry.word, "word");
//!
//! // Strategies are usable standalone.
//! assert_eq!(BracketScan.isolate("noise {\"a\": 1} noise"), Some("{\"a\": 1}"));
//! ```

pub mod candidates;
pub mod entry;
pub mod error;
pub mod llm;
pub mod parser;
pub mod prompt;
pub mod render;

pub use candidates::extract_candidates;
pub use entry::{GlossedTerm, RelatedVocabulary, TermNote, Tier, TierContent, VocabularyEntry};
pub use error::QueryError;
pub use llm::LlmClient;
pub use parser::{
    BracketScan, FencedBlock, RecoveryStrategy, ResponseParser, WholeResponse, MODE_SEPARATOR,
};
pub use render::{render, EntryDocument, Section, SectionBody, TabPane};

/// Parses raw model output into a three-tier entry for `word`.
///
/// Total over all inputs: structured recovery is attempted first, heuristic
/// section extraction guarantees a result otherwise. Repeated calls on the
/// same input yield identical entries.
pub fn parse(raw: &str, word: &str) -> VocabularyEntry {
    ResponseParser::default().parse(raw, word)
}
