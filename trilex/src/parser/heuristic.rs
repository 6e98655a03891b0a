//! Heuristic section extraction, the cascade's terminal fallback.
//!
//! When no JSON span can be recovered, the response is treated as the
//! emoji-labeled plain-text layout the tri-mode prompt requests: sections
//! headed by a label or an emoji marker, list items as `•` bullet lines,
//! three modes split by a literal separator. Extraction is positional text
//! scanning and always succeeds, producing empty fields in the worst case.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::entry::{GlossedTerm, RelatedVocabulary, TermNote, TierContent, VocabularyEntry};

/// Literal marker some raw responses use to delimit the three modes.
pub const MODE_SEPARATOR: &str = "###MODE_SEPARATOR";

/// Start of the next emoji-headed section, used to bound the current one.
static NEXT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Emoji_Presentation}[^:\n]*:").unwrap());

/// A `•` bullet line.
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"•\s*([^\n]+)").unwrap());

/// A `• term (explanation)` bullet line.
static PAIR_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"•\s*([^(\n]+)\(([^)\n]+)\)").unwrap());

/// A `• label: value` bullet line.
static LABELED_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"•\s*([^:\n]+):\s*([^\n]*)").unwrap());

/// Separators between terms on a single related-vocabulary line.
static TERM_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,，、]").unwrap());

/// A `term (gloss)` item on a related-vocabulary line.
static GLOSSED_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^(]+)\(([^)]+)\)").unwrap());

/// Assembles a full entry from loosely-formatted prose.
pub(crate) fn extract_entry(raw: &str, word: &str) -> VocabularyEntry {
    let [professional, intermediate, elementary] = segment_modes(raw, word);
    debug!(word, "assembling entry from heuristic section extraction");
    VocabularyEntry {
        word: word.to_string(),
        professional: professional_tier(&professional, word),
        intermediate: intermediate_tier(&intermediate, word),
        elementary: elementary_tier(&elementary, word),
    }
}

/// Splits the raw content into the three mode segments.
///
/// With the separator present, missing segments are synthesized as a minimal
/// title line so indexing is always safe. Without it, every tier scans the
/// full content. Segments are NFKC-normalized so fullwidth punctuation
/// (e.g. `：` after Chinese labels) matches the ASCII patterns.
fn segment_modes(raw: &str, word: &str) -> [String; 3] {
    if raw.contains(MODE_SEPARATOR) {
        let mut parts: Vec<String> = raw
            .split(MODE_SEPARATOR)
            .map(|part| normalize(part))
            .collect();
        while parts.len() < 3 {
            parts.push(format!("📘 {word}"));
        }
        let mut parts = parts.into_iter();
        [
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
            parts.next().unwrap_or_default(),
        ]
    } else {
        let whole = normalize(raw);
        [whole.clone(), whole.clone(), whole]
    }
}

fn normalize(segment: &str) -> String {
    segment.nfkc().collect::<String>().trim().to_string()
}

fn professional_tier(content: &str, word: &str) -> TierContent {
    TierContent {
        title: word.to_string(),
        definition: scalar(content, "Definition", "🧠"),
        pronunciation: scalar(content, "Pronunciation", "🔊"),
        academic_usage: bullet_list(content, "Academic Usage", "🎯"),
        everyday_use: bullet_list(content, "Everyday Use", "💬"),
        related_vocabulary: RelatedVocabulary::Terms(term_list(
            content,
            "Associated Academic Vocabulary",
            "🔗",
        )),
        grammar_notes: bullet_list(content, "Grammar & Usage", "🧭"),
        collocations: collocation_list(content, "Collocations", "🔄"),
        synonyms: pair_list(content, "Synonyms", "📝"),
        antonyms: pair_list(content, "Antonyms", "🚫"),
        ..TierContent::default()
    }
}

fn intermediate_tier(content: &str, word: &str) -> TierContent {
    TierContent {
        title: word.to_string(),
        definition: scalar(content, "定义", "🧠"),
        pronunciation: scalar(content, "发音", "🔊"),
        academic_usage: bullet_list(content, "学术用法", "🎯"),
        everyday_use: bullet_list(content, "日常用法", "💬"),
        related_vocabulary: RelatedVocabulary::Glossed(glossed_list(
            content,
            "相关学术词汇",
            "🔗",
        )),
        grammar_notes: bullet_list(content, "语法与用法", "🧭"),
        collocations: collocation_list(content, "常见搭配", "🔄"),
        synonyms: pair_list(content, "同义词", "📝"),
        ..TierContent::default()
    }
}

fn elementary_tier(content: &str, word: &str) -> TierContent {
    TierContent {
        title: word.to_string(),
        definition: scalar(content, "意思", "🧠"),
        pronunciation: scalar(content, "怎么读", "🔊"),
        usage: bullet_list(content, "怎么用", "🎯"),
        related_vocabulary: RelatedVocabulary::Text(scalar(content, "相关词汇", "🔗")),
        tips: scalar(content, "小贴士", "🧭"),
        synonyms: pair_list(content, "类似的词", "📝"),
        ..TierContent::default()
    }
}

/// Scalar field: label-based match first, emoji-based second, else empty.
fn scalar(content: &str, label: &str, emoji: &str) -> String {
    let label_re = Regex::new(&format!(r"(?i){}:([^\n]*)", regex::escape(label))).unwrap();
    if let Some(cap) = label_re.captures(content) {
        return cap[1].trim().to_string();
    }
    let emoji_re = Regex::new(&format!(r"{}([^\n]*)", regex::escape(emoji))).unwrap();
    emoji_re
        .captures(content)
        .map(|cap| cap[1].trim().to_string())
        .unwrap_or_default()
}

/// The body of a section: everything after its header line up to the next
/// emoji-headed header, or end of content.
fn section<'a>(content: &'a str, label: &str, emoji: &str) -> Option<&'a str> {
    let header_re = Regex::new(&format!(
        r"(?i){}:[^\n]*|{}[^\n]*",
        regex::escape(label),
        regex::escape(emoji)
    ))
    .unwrap();
    let header = header_re.find(content)?;
    let rest = &content[header.end()..];
    let end = NEXT_HEADER.find(rest).map_or(rest.len(), |next| next.start());
    Some(&rest[..end])
}

fn bullet_list(content: &str, label: &str, emoji: &str) -> Vec<String> {
    let Some(body) = section(content, label, emoji) else {
        return Vec::new();
    };
    BULLET
        .captures_iter(body)
        .map(|cap| cap[1].trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// `• term (explanation)` bullets, bounded to the named section.
fn pair_list(content: &str, label: &str, emoji: &str) -> Vec<TermNote> {
    let Some(body) = section(content, label, emoji) else {
        return Vec::new();
    };
    PAIR_BULLET
        .captures_iter(body)
        .map(|cap| TermNote {
            word: cap[1].trim().to_string(),
            explanation: cap[2].trim().to_string(),
        })
        .filter(|note| !note.word.is_empty())
        .collect()
}

/// `• label: value` bullets, bounded to the named section.
fn collocation_list(content: &str, label: &str, emoji: &str) -> BTreeMap<String, String> {
    let Some(body) = section(content, label, emoji) else {
        return BTreeMap::new();
    };
    LABELED_BULLET
        .captures_iter(body)
        .map(|cap| (cap[1].trim().to_string(), cap[2].trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// A comma-separated term line (professional related vocabulary).
fn term_list(content: &str, label: &str, emoji: &str) -> Vec<String> {
    let line = scalar(content, label, emoji);
    TERM_SPLIT
        .split(&line)
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
        .collect()
}

/// A comma-separated `term (gloss)` line (intermediate related vocabulary).
fn glossed_list(content: &str, label: &str, emoji: &str) -> Vec<GlossedTerm> {
    let line = scalar(content, label, emoji);
    TERM_SPLIT
        .split(&line)
        .filter_map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return None;
            }
            match GLOSSED_TERM.captures(item) {
                Some(cap) => Some(GlossedTerm {
                    en: cap[1].trim().to_string(),
                    zh: cap[2].trim().to_string(),
                }),
                None => Some(GlossedTerm {
                    en: item.to_string(),
                    zh: String::new(),
                }),
            }
        })
        .collect()
}
