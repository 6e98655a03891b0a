//! Sequential batch processing: text in, saved dictionary entries out.
//!
//! Words are processed strictly one at a time with an inter-request delay,
//! because the local model backend does not handle rapid-fire or concurrent
//! requests reliably. A failed word is logged and skipped; the batch keeps
//! going and reports aggregate counts at the end.

use std::time::Duration;

use tracing::{info, warn};
use trilex::{extract_candidates, prompt, LlmClient};

use crate::error::StoreError;
use crate::storage::{Dictionary, DictionaryStore};

/// Knobs for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Pause between consecutive generation requests.
    pub inter_request_delay: Duration,
    /// Skip candidates already present in the target dictionary.
    pub skip_existing: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            inter_request_delay: Duration::from_millis(500),
            skip_existing: true,
        }
    }
}

/// What happened to each candidate in a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Words recovered and written to the dictionary.
    pub processed: Vec<String>,
    /// Words whose generation request failed.
    pub failed: Vec<String>,
    /// Words skipped because the dictionary already had them.
    pub skipped: Vec<String>,
}

/// Extracts candidates from `text`, generates an entry per word, and saves
/// the updated dictionary under `dictionary_name`.
///
/// Model failures never abort the batch; only store failures propagate. The
/// dictionary is saved once, after the loop, and only when something was
/// actually added.
pub async fn process_text(
    llm: &dyn LlmClient,
    store: &dyn DictionaryStore,
    dictionary_name: &str,
    text: &str,
    options: &BatchOptions,
) -> Result<BatchReport, StoreError> {
    let candidates = extract_candidates(text, llm).await;
    info!(count = candidates.len(), dictionary = dictionary_name, "batch started");

    let mut dictionary = store
        .get(dictionary_name)?
        .unwrap_or_else(|| Dictionary::new(dictionary_name));
    let mut report = BatchReport::default();

    for word in candidates {
        if options.skip_existing && dictionary.contains(&word) {
            report.skipped.push(word);
            continue;
        }

        if !(report.processed.is_empty() && report.failed.is_empty())
            && !options.inter_request_delay.is_zero()
        {
            tokio::time::sleep(options.inter_request_delay).await;
        }

        match llm.query(&prompt::entry_prompt(&word)).await {
            Ok(raw) => {
                dictionary.upsert(trilex::parse(&raw, &word));
                report.processed.push(word);
            }
            Err(err) => {
                warn!(word, error = %err, "word generation failed, skipping");
                report.failed.push(word);
            }
        }
    }

    if !report.processed.is_empty() {
        store.save(&dictionary)?;
    }
    info!(
        processed = report.processed.len(),
        failed = report.failed.len(),
        skipped = report.skipped.len(),
        "batch finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use trilex::QueryError;

    use super::*;
    use crate::storage::MemoryStore;

    /// Answers every generation request with the same canned response, or
    /// fails for words listed in `failing`.
    struct ScriptedLlm {
        response: &'static str,
        failing: Vec<&'static str>,
    }

    #[async_trait]
    impl LlmClient for ScriptedLlm {
        async fn query(&self, prompt: &str) -> Result<String, QueryError> {
            if self.failing.iter().any(|word| prompt.contains(word)) {
                return Err(QueryError::Transport("scripted failure".into()));
            }
            Ok(self.response.to_string())
        }
    }

    fn instant_options() -> BatchOptions {
        BatchOptions {
            inter_request_delay: Duration::ZERO,
            skip_existing: true,
        }
    }

    const ENTRY_JSON: &str =
        r#"{"modes": {"professional": {"definition": "a recovered definition"}}}"#;

    #[tokio::test]
    async fn test_batch_saves_all_words() {
        let llm = ScriptedLlm {
            response: ENTRY_JSON,
            failing: vec![],
        };
        let store = MemoryStore::new();

        let report = process_text(&llm, &store, "academic", "paradigm heuristic", &instant_options())
            .await
            .unwrap();

        assert_eq!(report.processed, vec!["paradigm", "heuristic"]);
        assert!(report.failed.is_empty());

        let dict = store.get("academic").unwrap().unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words[0].professional.definition, "a recovered definition");
    }

    #[tokio::test]
    async fn test_failed_word_is_skipped_not_fatal() {
        let llm = ScriptedLlm {
            response: ENTRY_JSON,
            failing: vec!["heuristic"],
        };
        let store = MemoryStore::new();

        let report = process_text(&llm, &store, "d", "paradigm heuristic synthesis", &instant_options())
            .await
            .unwrap();

        assert_eq!(report.processed, vec!["paradigm", "synthesis"]);
        assert_eq!(report.failed, vec!["heuristic"]);
        assert_eq!(store.get("d").unwrap().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_existing_words_are_skipped() {
        let llm = ScriptedLlm {
            response: ENTRY_JSON,
            failing: vec![],
        };
        let store = MemoryStore::new();
        let mut dict = Dictionary::new("d");
        dict.upsert(trilex::VocabularyEntry::empty("paradigm"));
        store.save(&dict).unwrap();

        let report = process_text(&llm, &store, "d", "paradigm heuristic", &instant_options())
            .await
            .unwrap();

        assert_eq!(report.skipped, vec!["paradigm"]);
        assert_eq!(report.processed, vec!["heuristic"]);
        // The existing empty entry is untouched.
        let dict = store.get("d").unwrap().unwrap();
        assert!(dict.words[0].professional.definition.is_empty());
    }

    #[tokio::test]
    async fn test_nothing_processed_means_nothing_saved() {
        let llm = ScriptedLlm {
            response: ENTRY_JSON,
            failing: vec!["paradigm", "heuristic"],
        };
        let store = MemoryStore::new();

        let report = process_text(&llm, &store, "d", "paradigm heuristic", &instant_options())
            .await
            .unwrap();

        assert!(report.processed.is_empty());
        assert_eq!(report.failed.len(), 2);
        assert!(store.get("d").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unstructured_response_still_saved() {
        // The parser's heuristic fallback means even a prose response yields
        // a (degraded) entry worth saving.
        let llm = ScriptedLlm {
            response: "🧠 Definition: mined from prose",
            failing: vec![],
        };
        let store = MemoryStore::new();

        let report = process_text(&llm, &store, "d", "liminal ubiquitous", &instant_options())
            .await
            .unwrap();

        assert_eq!(report.processed.len(), 2);
        let dict = store.get("d").unwrap().unwrap();
        assert_eq!(dict.words[0].professional.definition, "mined from prose");
    }
}
