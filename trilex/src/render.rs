//! Presentation renderer: turns a recovered entry into a tabbed document.
//!
//! Rendering is a pure function of the entry apart from the generated scope
//! id, which exists so interactive consumers can key tab state per render.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::entry::{RelatedVocabulary, TermNote, Tier, TierContent, VocabularyEntry};

/// Text shown when a tier carries no recovered definition.
pub const NO_DEFINITION: &str = "no definition";

const SCOPE_ID_LEN: usize = 6;
const SCOPE_ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// A fully laid-out entry: one tab per tier, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDocument {
    /// The word this document explains.
    pub word: String,
    /// Per-render identifier scoping any interactive tab state.
    pub scope_id: String,
    /// One pane per tier, ordered professional, intermediate, elementary.
    pub tabs: Vec<TabPane>,
}

/// One tier's pane: a labeled tab holding its sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabPane {
    pub tier: Tier,
    /// Human-readable tab label.
    pub label: &'static str,
    pub sections: Vec<Section>,
}

/// A field heading with its rendered body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub body: SectionBody,
}

/// The three layouts a section body can take.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionBody {
    Text(String),
    List(Vec<String>),
    /// (term, explanation) rows.
    Pairs(Vec<(String, String)>),
}

/// Per-tier field headings, mirroring the labels the prompts request.
struct Headings {
    definition: &'static str,
    pronunciation: &'static str,
    academic_usage: &'static str,
    everyday_use: &'static str,
    usage: &'static str,
    related: &'static str,
    grammar: &'static str,
    collocations: &'static str,
    synonyms: &'static str,
    antonyms: &'static str,
    tips: &'static str,
}

const fn headings(tier: Tier) -> Headings {
    match tier {
        Tier::Professional => Headings {
            definition: "Definition",
            pronunciation: "Pronunciation",
            academic_usage: "Academic Usage",
            everyday_use: "Everyday Use",
            usage: "Usage",
            related: "Associated Academic Vocabulary",
            grammar: "Grammar & Usage",
            collocations: "Collocations",
            synonyms: "Synonyms",
            antonyms: "Antonyms",
            tips: "Tips",
        },
        Tier::Intermediate => Headings {
            definition: "定义",
            pronunciation: "发音",
            academic_usage: "学术用法",
            everyday_use: "日常用法",
            usage: "用法",
            related: "相关学术词汇",
            grammar: "语法与用法",
            collocations: "常见搭配",
            synonyms: "同义词",
            antonyms: "反义词",
            tips: "小贴士",
        },
        Tier::Elementary => Headings {
            definition: "意思",
            pronunciation: "怎么读",
            academic_usage: "学术用法",
            everyday_use: "日常用法",
            usage: "怎么用",
            related: "相关词汇",
            grammar: "语法",
            collocations: "常见搭配",
            synonyms: "类似的词",
            antonyms: "反义词",
            tips: "小贴士",
        },
    }
}

/// Renders an entry into a tabbed document.
///
/// Pure apart from the scope id: two renders of the same entry differ only
/// in `scope_id`. Every tier-appropriate section renders whether or not its
/// field holds data — empty fields become empty bodies, and an empty
/// definition becomes the [`NO_DEFINITION`] placeholder — so consumers see
/// the same field grid for every entry. Fields foreign to a tier appear
/// only when the response populated them.
///
/// # Examples
///
/// ```
/// use trilex::{render, VocabularyEntry};
///
/// let doc = render(&VocabularyEntry::empty("liminal"));
/// assert_eq!(doc.word, "liminal");
/// assert_eq!(doc.tabs.len(), 3);
/// ```
pub fn render(entry: &VocabularyEntry) -> EntryDocument {
    EntryDocument {
        word: entry.word.clone(),
        scope_id: scope_id(),
        tabs: Tier::ALL
            .into_iter()
            .map(|tier| render_tab(tier, entry.tier(tier)))
            .collect(),
    }
}

fn render_tab(tier: Tier, content: &TierContent) -> TabPane {
    let h = headings(tier);
    let advanced = tier != Tier::Elementary;
    let mut sections = Vec::new();

    let definition = if content.definition.is_empty() {
        NO_DEFINITION.to_string()
    } else {
        content.definition.clone()
    };
    sections.push(Section {
        heading: h.definition,
        body: SectionBody::Text(definition),
    });

    push_text(&mut sections, h.pronunciation, &content.pronunciation, true);
    push_list(&mut sections, h.academic_usage, &content.academic_usage, advanced);
    push_list(&mut sections, h.everyday_use, &content.everyday_use, advanced);
    push_list(&mut sections, h.usage, &content.usage, !advanced);
    push_related(&mut sections, h.related, &content.related_vocabulary);
    push_list(&mut sections, h.grammar, &content.grammar_notes, advanced);
    if advanced || !content.collocations.is_empty() {
        sections.push(Section {
            heading: h.collocations,
            body: SectionBody::Pairs(
                content
                    .collocations
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
        });
    }
    push_pairs(&mut sections, h.synonyms, &content.synonyms, true);
    push_pairs(&mut sections, h.antonyms, &content.antonyms, tier == Tier::Professional);
    push_text(&mut sections, h.tips, &content.tips, !advanced);

    TabPane {
        tier,
        label: tier.label(),
        sections,
    }
}

fn push_text(sections: &mut Vec<Section>, heading: &'static str, text: &str, always: bool) {
    if text.is_empty() && !always {
        return;
    }
    sections.push(Section {
        heading,
        body: SectionBody::Text(text.to_string()),
    });
}

fn push_list(sections: &mut Vec<Section>, heading: &'static str, items: &[String], always: bool) {
    if items.is_empty() && !always {
        return;
    }
    sections.push(Section {
        heading,
        body: SectionBody::List(items.to_vec()),
    });
}

fn push_pairs(sections: &mut Vec<Section>, heading: &'static str, notes: &[TermNote], always: bool) {
    if notes.is_empty() && !always {
        return;
    }
    sections.push(Section {
        heading,
        body: SectionBody::Pairs(
            notes
                .iter()
                .map(|n| (n.word.clone(), n.explanation.clone()))
                .collect(),
        ),
    });
}

fn push_related(sections: &mut Vec<Section>, heading: &'static str, related: &RelatedVocabulary) {
    let body = match related {
        RelatedVocabulary::Terms(terms) => SectionBody::List(terms.clone()),
        RelatedVocabulary::Glossed(pairs) => SectionBody::Pairs(
            pairs
                .iter()
                .map(|p| (p.en.clone(), p.zh.clone()))
                .collect(),
        ),
        RelatedVocabulary::Text(text) => SectionBody::Text(text.clone()),
    };
    sections.push(Section { heading, body });
}

/// Six random lowercase alphanumerics. Presentation-only.
fn scope_id() -> String {
    let mut rng = rand::thread_rng();
    (0..SCOPE_ID_LEN)
        .map(|_| SCOPE_ID_CHARS[rng.gen_range(0..SCOPE_ID_CHARS.len())] as char)
        .collect()
}

impl fmt::Display for EntryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.word)?;
        for tab in &self.tabs {
            writeln!(f, "\n=== {} ===", tab.label)?;
            for section in &tab.sections {
                match &section.body {
                    SectionBody::Text(text) => writeln!(f, "{}: {}", section.heading, text)?,
                    SectionBody::List(items) => {
                        writeln!(f, "{}:", section.heading)?;
                        for item in items {
                            writeln!(f, "  • {item}")?;
                        }
                    }
                    SectionBody::Pairs(pairs) => {
                        writeln!(f, "{}:", section.heading)?;
                        for (term, explanation) in pairs {
                            if explanation.is_empty() {
                                writeln!(f, "  • {term}")?;
                            } else {
                                writeln!(f, "  • {term} ({explanation})")?;
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
