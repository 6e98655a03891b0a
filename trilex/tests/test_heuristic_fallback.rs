//! Heuristic fallback behavior through the public `parse` entry point:
//! brace-free content must still yield a fully-tiered entry.

use pretty_assertions::assert_eq;
use trilex::{parse, RelatedVocabulary, MODE_SEPARATOR};

fn tri_mode_response() -> String {
    format!(
        "📘 Word: paradigm\n\
         🧠 Definition: a typical example or pattern\n\
         🔊 Pronunciation: /ˈpærədaɪm/\n\
         🎯 Academic Usage:\n\
         • The study proposes a new paradigm.\n\
         💬 Everyday Use:\n\
         • A paradigm of good behaviour.\n\
         🔗 Associated Academic Vocabulary: model, framework\n\
         {MODE_SEPARATOR}\n\
         📘 词汇: paradigm\n\
         🧠 定义: 范式\n\
         🔊 发音: /ˈpærədaɪm/\n\
         🎯 学术用法:\n\
         • The paradigm shifted.\n\
         🔗 相关学术词汇: model (模型)\n\
         {MODE_SEPARATOR}\n\
         📘 词汇: paradigm\n\
         🧠 意思: 一种典型的例子\n\
         🔊 怎么读: pa-ra-daim\n\
         🎯 怎么用:\n\
         • This is a paradigm.\n\
         🔗 相关词汇: model\n\
         🧭 小贴士: 想想模范\n"
    )
}

#[test]
fn test_brace_free_content_uses_heuristic_path() {
    let entry = parse(&tri_mode_response(), "paradigm");

    assert_eq!(entry.professional.definition, "a typical example or pattern");
    assert_eq!(entry.professional.pronunciation, "/ˈpærədaɪm/");
    assert!(!entry.professional.academic_usage.is_empty());

    assert_eq!(entry.intermediate.definition, "范式");
    assert!(!entry.intermediate.academic_usage.is_empty());

    assert_eq!(entry.elementary.definition, "一种典型的例子");
    assert_eq!(entry.elementary.usage, vec!["This is a paradigm."]);
    assert_eq!(entry.elementary.tips, "想想模范");
}

#[test]
fn test_tier_specific_related_vocabulary_shapes() {
    let entry = parse(&tri_mode_response(), "paradigm");
    assert!(matches!(
        entry.professional.related_vocabulary,
        RelatedVocabulary::Terms(_)
    ));
    assert!(matches!(
        entry.intermediate.related_vocabulary,
        RelatedVocabulary::Glossed(_)
    ));
    assert!(matches!(
        entry.elementary.related_vocabulary,
        RelatedVocabulary::Text(_)
    ));
}

#[test]
fn test_all_tiers_present_even_for_plain_prose() {
    let entry = parse("Nothing structured about this sentence.", "word");
    assert_eq!(entry.word, "word");
    assert_eq!(entry.professional.title, "word");
    assert_eq!(entry.intermediate.title, "word");
    assert_eq!(entry.elementary.title, "word");
}

#[test]
fn test_invalid_json_falls_through_to_heuristic() {
    // Braces are present but unparseable even after repair; the heuristic
    // path still mines the labeled line.
    let raw = "{{{ not json\n🧠 Definition: recovered anyway";
    let entry = parse(raw, "x");
    assert_eq!(entry.professional.definition, "recovered anyway");
}
