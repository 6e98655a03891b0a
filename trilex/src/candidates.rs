//! Word candidate extraction: raw text in, ranked study-worthy tokens out.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::{llm::LlmClient, prompt};

/// Inputs with fewer tokens than this, none of them stoplisted, are treated
/// as a hand-authored word list rather than prose.
const WORD_LIST_THRESHOLD: usize = 50;

/// Above this many surviving tokens the list is handed to the model for
/// refinement.
const REFINE_THRESHOLD: usize = 10;

/// At most this many tokens are sent to the refinement call.
const REFINE_BATCH: usize = 100;

/// Fallback size when refinement fails or returns nothing usable.
const FALLBACK_LIMIT: usize = 30;

/// Common English function words removed before frequency ranking.
static STOPLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "a", "to", "of", "in", "is", "it", "that", "you", "was", "for", "on",
        "are", "with", "as", "have", "be", "this", "at", "from", "or", "had", "by", "but",
        "not", "what", "all", "were", "when", "we", "there", "can", "an", "your", "which",
        "their", "said", "if", "do", "will", "each", "about", "how", "up", "out", "them",
        "then", "she", "many", "some", "so", "these", "would", "other", "into", "has", "more",
        "her", "two", "like", "him", "see", "time", "could", "no", "make", "than", "first",
        "been", "its", "who", "now", "people", "my", "made", "over", "did", "down", "only",
        "way", "find", "use", "may", "water", "long", "little", "very", "after", "words",
        "called", "just", "where", "most", "know", "get", "through", "back", "much", "go",
        "good", "new", "write", "our", "me", "man", "too", "any", "day", "same", "right",
        "look", "think", "also", "around", "another", "came", "come", "work", "three", "must",
        "because", "does", "part", "even", "place", "well", "such", "here", "take", "why",
        "help", "put", "different", "away", "again", "off", "went", "old", "number", "great",
        "tell", "men", "say", "small", "every", "found", "still", "between", "name", "should",
        "home", "big", "give", "air", "line", "set", "own", "under", "read", "last", "never",
        "us", "left", "end", "along", "while", "might", "next", "sound", "below", "saw",
        "something", "thought", "both", "few", "those", "having", "near", "ask",
    ]
    .into_iter()
    .collect()
});

/// Characters outside ASCII word chars, whitespace, hyphen, and apostrophe
/// are replaced with spaces before tokenizing. The class is deliberately
/// ASCII: CJK and other non-Latin text acts as a separator, never as a
/// candidate.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s'-]").unwrap());

/// Tokens accepted back from the refinement call.
static REFINED_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z'-]+$").unwrap());

/// Extracts a ranked, deduplicated candidate list from raw input text.
///
/// Never fails: malformed or empty input yields an empty list, and a failed
/// or useless refinement call falls back to the frequency-sorted head of the
/// list. The refinement call is the only suspension point.
pub async fn extract_candidates(text: &str, llm: &dyn LlmClient) -> Vec<String> {
    let normalized = NON_WORD.replace_all(text, " ").to_lowercase();
    let all_tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .collect();

    let filtered: Vec<&str> = all_tokens
        .iter()
        .copied()
        .filter(|token| !STOPLIST.contains(token))
        .collect();

    // Nothing was stoplisted and the input is short: it already looks like a
    // hand-authored word list, so keep it as-is (first-seen order, deduped).
    if filtered.len() == all_tokens.len() && all_tokens.len() < WORD_LIST_THRESHOLD {
        return dedup_preserving_order(&all_tokens);
    }

    let ranked = rank_by_frequency(&filtered);
    if ranked.len() <= REFINE_THRESHOLD {
        return ranked;
    }

    let batch: Vec<String> = ranked.iter().take(REFINE_BATCH).cloned().collect();
    match refine(&batch, llm).await {
        Some(refined) if !refined.is_empty() => refined,
        _ => ranked.into_iter().take(FALLBACK_LIMIT).collect(),
    }
}

/// Unique tokens sorted by descending frequency; ties keep first-seen order.
fn rank_by_frequency(tokens: &[&str]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for &token in tokens {
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }
    // Stable sort keeps the first-seen tiebreak.
    order.sort_by_key(|token| std::cmp::Reverse(counts[token]));
    order.into_iter().map(str::to_string).collect()
}

fn dedup_preserving_order(tokens: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for &token in tokens {
        if seen.insert(token) {
            out.push(token.to_string());
        }
    }
    out
}

/// Asks the model to narrow the list; absorbs failure into `None`.
async fn refine(words: &[String], llm: &dyn LlmClient) -> Option<Vec<String>> {
    let response = match llm.query(&prompt::refine_prompt(words)).await {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "candidate refinement failed, keeping frequency ranking");
            return None;
        }
    };

    let refined: Vec<String> = response
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| token.chars().count() > 1 && REFINED_TOKEN.is_match(token))
        .collect();
    debug!(kept = refined.len(), "candidate refinement response parsed");
    Some(refined)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::QueryError;

    /// Scripted client: returns the canned response, or an error when `None`.
    struct FakeLlm(Option<&'static str>);

    #[async_trait::async_trait]
    impl LlmClient for FakeLlm {
        async fn query(&self, _prompt: &str) -> Result<String, QueryError> {
            match self.0 {
                Some(text) => Ok(text.to_string()),
                None => Err(QueryError::Transport("offline".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_all_stoplisted_yields_empty() {
        let words = extract_candidates("the the the a a", &FakeLlm(None)).await;
        assert_eq!(words, Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty() {
        let words = extract_candidates("", &FakeLlm(None)).await;
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn test_hand_authored_list_kept_in_order() {
        let words = extract_candidates("paradigm heuristic paradigm synthesis", &FakeLlm(None)).await;
        assert_eq!(words, vec!["paradigm", "heuristic", "synthesis"]);
    }

    #[tokio::test]
    async fn test_punctuation_and_case_normalized() {
        let words = extract_candidates("Paradigm, HEURISTIC; paradigm!", &FakeLlm(None)).await;
        assert_eq!(words, vec!["paradigm", "heuristic"]);
    }

    #[tokio::test]
    async fn test_cjk_tokens_are_separators_not_candidates() {
        let words = extract_candidates("词汇 词汇 paradigm heuristic", &FakeLlm(None)).await;
        assert_eq!(words, vec!["paradigm", "heuristic"]);
    }

    #[tokio::test]
    async fn test_mixed_script_prose_keeps_latin_only() {
        let words =
            extract_candidates("这个 paradigm 很重要，paradigm 和 synthesis 都是", &FakeLlm(None))
                .await;
        assert_eq!(words, vec!["paradigm", "synthesis"]);
    }

    #[tokio::test]
    async fn test_small_prose_ranked_by_frequency() {
        // Stoplist hits ("the", "is") force the prose path; few enough
        // survivors that no refinement call happens.
        let text = "the paradigm is stable but the synthesis synthesis drives the paradigm paradigm";
        let words = extract_candidates(text, &FakeLlm(None)).await;
        assert_eq!(words[0], "paradigm");
        assert_eq!(words[1], "synthesis");
    }

    #[tokio::test]
    async fn test_refinement_parses_comma_list() {
        let text = make_prose_with_many_tokens();
        let words = extract_candidates(&text, &FakeLlm(Some("Alpha, beta-term, x, 42!"))).await;
        assert_eq!(words, vec!["alpha", "beta-term"]);
    }

    #[tokio::test]
    async fn test_refinement_failure_falls_back_to_ranked_head() {
        let text = make_prose_with_many_tokens();
        let words = extract_candidates(&text, &FakeLlm(None)).await;
        assert!(!words.is_empty());
        assert!(words.len() <= FALLBACK_LIMIT);
        // Fallback keeps the frequency ranking.
        assert_eq!(words[0], "dominant");
    }

    #[tokio::test]
    async fn test_refinement_garbage_falls_back() {
        let text = make_prose_with_many_tokens();
        let words = extract_candidates(&text, &FakeLlm(Some("!!! ??? 123"))).await;
        assert_eq!(words[0], "dominant");
    }

    /// Prose with > 10 distinct surviving tokens and at least one stoplist hit.
    fn make_prose_with_many_tokens() -> String {
        let mut text = String::from("the dominant dominant dominant concept ");
        for i in 0..15 {
            text.push_str(&format!("token{i} "));
        }
        text
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let ranked = rank_by_frequency(&["zeta", "alpha", "zeta", "beta", "alpha", "gamma"]);
        assert_eq!(ranked, vec!["zeta", "alpha", "beta", "gamma"]);
    }
}
