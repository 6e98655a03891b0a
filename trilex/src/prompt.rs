//! Prompt construction for the language-model collaborator.
//!
//! The simplified prompt asks for one bare JSON object (the whole-response
//! strategy's fast path); the tri-mode prompt asks for the emoji-labeled
//! plain-text layout the heuristic extractor understands. Both exist because
//! some model backends follow JSON instructions reliably and some do not.

/// Prompt that narrows a frequency-ranked token list down to study-worthy
/// vocabulary. The model is asked for a bare comma-separated list.
pub fn refine_prompt(words: &[String]) -> String {
    format!(
        "Please identify and extract academic or valuable vocabulary words from the \
         following list. Focus on words that are important in academic contexts, \
         specialized terminology, or words that would be valuable for a language \
         learner to study. Exclude common everyday words, simple words, proper nouns, \
         and non-academic terms.\n\n\
         List of words: {}\n\n\
         Please return ONLY a comma-separated list of the academic words, with no \
         other text or explanations.",
        words.join(", ")
    )
}

/// Prompt requesting a three-tier entry as a single bare JSON object.
///
/// The schema matches [`TierContent::from_value`](crate::entry::TierContent::from_value):
/// a `modes` container with `professional`, `intermediate`, and `elementary`
/// tier objects.
pub fn entry_prompt(word: &str) -> String {
    format!(
        r#"Create a three-mode dictionary entry for the word "{word}" and return it as plain JSON. Return ONLY the JSON object, with no explanations and no code fences.

Format:
{{
  "word": "{word}",
  "modes": {{
    "professional": {{
      "title": "{word}",
      "definition": "academic definition in English",
      "pronunciation": "IPA transcription",
      "academicUsage": ["academic example sentence"],
      "everydayUse": ["everyday example sentence"],
      "associatedVocabulary": ["related term"],
      "grammar": ["grammar note"],
      "collocations": {{"collocation type": "collocation phrase"}},
      "synonyms": [{{"word": "synonym", "explanation": "short gloss"}}],
      "antonyms": [{{"word": "antonym", "explanation": "short gloss"}}]
    }},
    "intermediate": {{
      "title": "{word}",
      "definition": "简明中文释义",
      "pronunciation": "发音",
      "academicUsage": ["academic example sentence"],
      "everydayUse": ["everyday example sentence"],
      "associatedVocabulary": [{{"en": "English term", "zh": "中文释义"}}],
      "grammar": ["语法点"],
      "collocations": {{"搭配类型": "搭配词组"}},
      "synonyms": [{{"word": "同义词", "explanation": "解释"}}]
    }},
    "elementary": {{
      "title": "{word}",
      "definition": "简单中文解释",
      "pronunciation": "简化发音",
      "usage": ["simple example sentence"],
      "relatedWords": "related simple words",
      "tips": "memory aid",
      "similarWords": [{{"word": "simple synonym", "explanation": "解释"}}]
    }}
  }}
}}"#
    )
}

/// Prompt requesting the emoji-labeled plain-text layout, three modes
/// separated by the literal `###MODE_SEPARATOR` marker.
///
/// The section labels here are exactly the ones the heuristic extractor
/// scans for, per tier.
pub fn tri_mode_prompt(word: &str) -> String {
    format!(
        r#"Create a complete dictionary entry for the academic word "{word}" with the three presentation modes below. Separate the modes with the literal marker ###MODE_SEPARATOR and follow the section labels exactly, including the emoji.

Mode 1: professional English mode (fully in English, academic register)
📘 Word: {word}
🧠 Definition: [detailed academic definition]
🔊 Pronunciation: [IPA transcription]
🎯 Academic Usage:
• [academic example sentence 1]
• [academic example sentence 2]
💬 Everyday Use:
• [everyday example sentence 1]
• [everyday example sentence 2]
🔗 Associated Academic Vocabulary: [related academic terms, comma separated]
🧭 Grammar & Usage:
• [grammar note 1]
• [grammar note 2]
🔄 Collocations:
• [collocation type 1]: [collocation phrase]
• [collocation type 2]: [collocation phrase]
📝 Synonyms:
• [synonym 1] ([short gloss])
• [synonym 2] ([short gloss])
🚫 Antonyms:
• [antonym 1] ([short gloss])

###MODE_SEPARATOR

Mode 2: bilingual explanation mode (Chinese labels, English examples)
📘 词汇: {word}
🧠 定义: [简明中文释义]
🔊 发音: [音标]
🎯 学术用法:
• [English example sentence 1]
• [English example sentence 2]
💬 日常用法:
• [English example sentence 1]
• [English example sentence 2]
🔗 相关学术词汇: [term (中文释义), term (中文释义)]
🧭 语法与用法:
• [中文语法点 1]
• [中文语法点 2]
🔄 常见搭配:
• [搭配类型 1]: [搭配词组]
• [搭配类型 2]: [搭配词组]
📝 同义词:
• [同义词 1] ([中文解释])
• [同义词 2] ([中文解释])

###MODE_SEPARATOR

Mode 3: beginner mode (simple Chinese)
📘 词汇: {word}
🧠 意思: [非常简单的中文解释]
🔊 怎么读: [简化发音]
🎯 怎么用:
• [简单例句 1]
• [简单例句 2]
🔗 相关词汇: [简单相关词汇]
🧭 小贴士: [简单记忆方法]
📝 类似的词:
• [简单同义词 1] ([简单解释])

Follow the format strictly; keep the three modes independent and complete."#
    )
}
