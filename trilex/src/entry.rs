//! Canonical data model for recovered vocabulary entries.
//!
//! Both recovery paths (structured JSON and heuristic section extraction)
//! normalize into the same [`TierContent`] shape, so consumers never have to
//! care which path produced an entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One of the three explanation registers an entry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Academic English, fully in the target language.
    Professional,
    /// Bilingual explanation with Chinese glosses.
    Intermediate,
    /// Simplified explanation for beginners.
    Elementary,
}

impl Tier {
    /// All tiers in presentation order.
    pub const ALL: [Tier; 3] = [Tier::Professional, Tier::Intermediate, Tier::Elementary];

    /// The stable key used for this tier in the `modes` JSON container.
    pub const fn key(self) -> &'static str {
        match self {
            Tier::Professional => "professional",
            Tier::Intermediate => "intermediate",
            Tier::Elementary => "elementary",
        }
    }

    /// Human-readable tab label for this tier.
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Professional => "专业英文",
            Tier::Intermediate => "中文解说",
            Tier::Elementary => "儿童启蒙",
        }
    }
}

/// A foreign term with its gloss, used by the intermediate tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossedTerm {
    /// The English term.
    #[serde(default)]
    pub en: String,
    /// The Chinese gloss, possibly empty.
    #[serde(default)]
    pub zh: String,
}

/// A term paired with a short explanation (synonyms, antonyms, similar words).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermNote {
    /// The term itself.
    #[serde(default)]
    pub word: String,
    /// A short parenthetical explanation, possibly empty.
    #[serde(default)]
    pub explanation: String,
}

/// Related vocabulary takes a different shape per tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatedVocabulary {
    /// Plain term list (professional tier).
    Terms(Vec<String>),
    /// Foreign terms with glosses (intermediate tier).
    Glossed(Vec<GlossedTerm>),
    /// Free-text blob (elementary tier).
    Text(String),
}

impl Default for RelatedVocabulary {
    fn default() -> Self {
        RelatedVocabulary::Terms(Vec::new())
    }
}

impl RelatedVocabulary {
    /// True when no related vocabulary was recovered.
    pub fn is_empty(&self) -> bool {
        match self {
            RelatedVocabulary::Glossed(items) => items.is_empty(),
            RelatedVocabulary::Terms(items) => items.is_empty(),
            RelatedVocabulary::Text(text) => text.is_empty(),
        }
    }
}

/// One tier's recovered fields.
///
/// Every field defaults to an empty value; a tier that could not be recovered
/// at all still carries its `title`. Field names serialize in camelCase to
/// match the JSON schema the prompts request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TierContent {
    /// Headline of the tier, defaults to the word itself.
    pub title: String,
    /// Definition text, possibly empty.
    pub definition: String,
    /// Pronunciation guide, possibly empty.
    pub pronunciation: String,
    /// Academic example sentences (professional/intermediate).
    pub academic_usage: Vec<String>,
    /// Everyday example sentences (professional/intermediate).
    pub everyday_use: Vec<String>,
    /// Simple example sentences (elementary).
    pub usage: Vec<String>,
    /// Related vocabulary in the tier-specific shape.
    pub related_vocabulary: RelatedVocabulary,
    /// Grammar and usage notes (professional/intermediate).
    pub grammar_notes: Vec<String>,
    /// Collocation-category label mapped to an example phrase.
    pub collocations: BTreeMap<String, String>,
    /// Synonyms (or "similar words" on the elementary tier).
    pub synonyms: Vec<TermNote>,
    /// Antonyms (professional tier only).
    pub antonyms: Vec<TermNote>,
    /// Free-text memory aid (elementary tier).
    pub tips: String,
}

impl TierContent {
    /// The explicit "nothing recovered" representation: only the title is
    /// populated, so consumers never see a missing tier.
    pub fn empty(word: &str) -> Self {
        Self {
            title: word.to_string(),
            ..Self::default()
        }
    }

    /// Lenient normalization from a parsed JSON tier object.
    ///
    /// Absent or wrong-typed fields become empty values, never errors. The
    /// aliases (`associatedVocabulary`/`relatedWords`, `grammar`,
    /// `similarWords`) follow the field names the prompts request.
    pub fn from_value(word: &str, value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::empty(word);
        };

        let mut title = string_field(obj, &["title"]);
        if title.is_empty() {
            title = word.to_string();
        }

        Self {
            title,
            definition: string_field(obj, &["definition"]),
            pronunciation: string_field(obj, &["pronunciation"]),
            academic_usage: string_list(obj, &["academicUsage"]),
            everyday_use: string_list(obj, &["everydayUse"]),
            usage: string_list(obj, &["usage"]),
            related_vocabulary: related_field(obj, &["associatedVocabulary", "relatedWords"]),
            grammar_notes: string_list(obj, &["grammar", "grammarNotes"]),
            collocations: collocation_field(obj),
            synonyms: term_note_list(obj, &["synonyms", "similarWords"]),
            antonyms: term_note_list(obj, &["antonyms"]),
            tips: string_field(obj, &["tips"]),
        }
    }
}

/// The full three-tier explanation for one word.
///
/// All three tiers are always present; an unrecoverable tier is an explicit
/// empty [`TierContent`] rather than an absent key. Entries are built fresh
/// per (word, response) pair and are not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// The surface form, case preserved as supplied.
    pub word: String,
    /// Academic-English tier.
    pub professional: TierContent,
    /// Bilingual tier.
    pub intermediate: TierContent,
    /// Simplified tier.
    pub elementary: TierContent,
}

impl VocabularyEntry {
    /// An entry with three empty tiers, each titled with the word.
    pub fn empty(word: &str) -> Self {
        Self {
            word: word.to_string(),
            professional: TierContent::empty(word),
            intermediate: TierContent::empty(word),
            elementary: TierContent::empty(word),
        }
    }

    /// Builds an entry from a parsed JSON object exposing a `modes` field.
    ///
    /// A tier absent from `modes` becomes an empty placeholder.
    pub fn from_modes(word: &str, value: &Value) -> Self {
        let modes = value.get("modes");
        let tier = |t: Tier| -> TierContent {
            modes
                .and_then(|m| m.get(t.key()))
                .map(|v| TierContent::from_value(word, v))
                .unwrap_or_else(|| TierContent::empty(word))
        };

        Self {
            word: word.to_string(),
            professional: tier(Tier::Professional),
            intermediate: tier(Tier::Intermediate),
            elementary: tier(Tier::Elementary),
        }
    }

    /// Accessor keyed by [`Tier`].
    pub fn tier(&self, tier: Tier) -> &TierContent {
        match tier {
            Tier::Professional => &self.professional,
            Tier::Intermediate => &self.intermediate,
            Tier::Elementary => &self.elementary,
        }
    }
}

type JsonMap = serde_json::Map<String, Value>;

fn string_field(obj: &JsonMap, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_str))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn string_list(obj: &JsonMap, keys: &[&str]) -> Vec<String> {
    for key in keys {
        if let Some(Value::Array(items)) = obj.get(*key) {
            return items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }
    Vec::new()
}

fn term_note_list(obj: &JsonMap, keys: &[&str]) -> Vec<TermNote> {
    for key in keys {
        if let Some(Value::Array(items)) = obj.get(*key) {
            return items
                .iter()
                .filter_map(|item| {
                    let entry = item.as_object()?;
                    let word = entry.get("word").and_then(Value::as_str)?.trim();
                    if word.is_empty() {
                        return None;
                    }
                    let explanation = entry
                        .get("explanation")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .trim();
                    Some(TermNote {
                        word: word.to_string(),
                        explanation: explanation.to_string(),
                    })
                })
                .collect();
        }
    }
    Vec::new()
}

fn collocation_field(obj: &JsonMap) -> BTreeMap<String, String> {
    let Some(Value::Object(entries)) = obj.get("collocations") else {
        return BTreeMap::new();
    };
    entries
        .iter()
        .filter_map(|(k, v)| Some((k.trim().to_string(), v.as_str()?.trim().to_string())))
        .collect()
}

fn related_field(obj: &JsonMap, keys: &[&str]) -> RelatedVocabulary {
    for key in keys {
        match obj.get(*key) {
            Some(Value::String(text)) => {
                return RelatedVocabulary::Text(text.trim().to_string());
            }
            Some(Value::Array(items)) => {
                if items.iter().any(Value::is_object) {
                    let glossed = items
                        .iter()
                        .filter_map(|item| {
                            let pair = item.as_object()?;
                            Some(GlossedTerm {
                                en: pair
                                    .get("en")
                                    .and_then(Value::as_str)
                                    .unwrap_or("")
                                    .trim()
                                    .to_string(),
                                zh: pair
                                    .get("zh")
                                    .and_then(Value::as_str)
                                    .unwrap_or("")
                                    .trim()
                                    .to_string(),
                            })
                        })
                        .collect();
                    return RelatedVocabulary::Glossed(glossed);
                }
                let terms = items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                return RelatedVocabulary::Terms(terms);
            }
            _ => {}
        }
    }
    RelatedVocabulary::default()
}
