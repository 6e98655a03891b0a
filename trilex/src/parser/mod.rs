//! Response parser: a cascade of recovery strategies over raw model output.
//!
//! Each strategy isolates a candidate JSON span from the raw text; the first
//! span that parses (directly or after repair) into an object carrying a
//! `modes` key wins. When every strategy fails, heuristic section extraction
//! takes over, so parsing as a whole never fails.

mod heuristic;
mod repair;
mod strategies;

use serde_json::Value;
use tracing::debug;

pub use self::heuristic::MODE_SEPARATOR;
pub use self::repair::parse_with_repair;
pub use self::strategies::{BracketScan, FencedBlock, RecoveryStrategy, WholeResponse};

use crate::entry::VocabularyEntry;

/// Parser that turns raw model output into a [`VocabularyEntry`].
///
/// Strategies run in a fixed order from strictest to loosest isolation.
/// The parser is stateless and cheap to construct; [`ResponseParser::default`]
/// carries the standard cascade.
///
/// # Examples
///
/// ```
/// use trilex::ResponseParser;
///
/// let parser = ResponseParser::default();
/// let entry = parser.parse(r#"{"modes": {"professional": {"definition": "x"}}}"#, "word");
/// assert_eq!(entry.professional.definition, "x");
/// ```
#[derive(Debug)]
pub struct ResponseParser {
    strategies: Vec<Box<dyn RecoveryStrategy>>,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self {
            strategies: vec![
                Box::new(WholeResponse),
                Box::new(FencedBlock),
                Box::new(BracketScan),
            ],
        }
    }
}

impl ResponseParser {
    /// Parses raw model output into an entry for `word`. Never fails.
    pub fn parse(&self, raw: &str, word: &str) -> VocabularyEntry {
        let cleaned = strip_invisibles(raw);

        for strategy in &self.strategies {
            let Some(span) = strategy.isolate(&cleaned) else {
                continue;
            };
            debug!(strategy = strategy.name(), "isolated candidate span");
            let Some(value) = parse_with_repair(span) else {
                debug!(strategy = strategy.name(), "span did not parse, moving on");
                continue;
            };
            if let Some(entry) = accept(&value, word) {
                debug!(strategy = strategy.name(), word, "structured parse succeeded");
                return entry;
            }
            debug!(
                strategy = strategy.name(),
                "parsed value lacks a modes object, moving on"
            );
        }

        debug!(word, "falling back to heuristic section extraction");
        heuristic::extract_entry(&cleaned, word)
    }
}

/// Accepts a parsed value only when it is an object with a `modes` key.
fn accept(value: &Value, word: &str) -> Option<VocabularyEntry> {
    value.as_object()?.get("modes")?;
    Some(VocabularyEntry::from_modes(word, value))
}

/// Removes BOM and zero-width characters that break brace detection.
fn strip_invisibles(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '\u{FEFF}' | '\u{200B}' | '\u{200C}' | '\u{200D}'))
        .collect()
}
