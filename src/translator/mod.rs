//! 逐词翻译
//!
//! 输入文本转小写、去首尾空白后按空白切分，每个单词在词汇表中查找目标语言的译文。
//! 不做词干化、标点剥离或短语匹配：带标点的单词不会命中。

pub mod vocabulary;

pub use vocabulary::{Vocabulary, VocabularyStore};

use crate::models::vocabulary::responses::TranslationResponse;

/// 未学习单词的说明
pub const NOT_LEARNED: &str = "(not learned yet)";

/// Unicode 空白，外加 U+001C..=U+001F 信息分隔符
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|w| !w.is_empty())
}

/// 将 `text` 翻译为 `language`
///
/// `explanation` 与切分后的单词一一对应、顺序一致。
pub fn translate_text(text: &str, language: &str, vocabulary: &Vocabulary) -> TranslationResponse {
    let normalized = text.trim_matches(is_separator).to_lowercase();

    let mut translated_words = Vec::new();
    let mut explanation = Vec::new();

    for word in split_words(&normalized) {
        match vocabulary.lookup(word, language) {
            Some(translated) => {
                translated_words.push(translated);
                explanation.push(format!("{word} → {translated}"));
            }
            None => {
                translated_words.push(word);
                explanation.push(format!("{word} → {NOT_LEARNED}"));
            }
        }
    }

    TranslationResponse {
        translation: translated_words.join(" "),
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vocabulary() -> Vocabulary {
        let mut vocab = Vocabulary::default();
        vocab.insert("cat", "పిల్లి", "बिल्ली");
        vocab.insert("water", "నీరు", "पानी");
        vocab
    }

    #[test]
    fn test_known_word() {
        let result = translate_text("cat", "telugu", &sample_vocabulary());
        assert_eq!(result.translation, "పిల్లి");
        assert_eq!(result.explanation, vec!["cat → పిల్లి"]);
    }

    #[test]
    fn test_unknown_word_kept() {
        let result = translate_text("dog", "telugu", &sample_vocabulary());
        assert_eq!(result.translation, "dog");
        assert_eq!(result.explanation, vec!["dog → (not learned yet)"]);
    }

    #[test]
    fn test_unknown_language_kept() {
        let result = translate_text("cat", "tamil", &sample_vocabulary());
        assert_eq!(result.translation, "cat");
        assert_eq!(result.explanation, vec!["cat → (not learned yet)"]);
    }

    #[test]
    fn test_sentence_mixed() {
        let result = translate_text("  The CAT drinks Water ", "hindi", &sample_vocabulary());
        assert_eq!(result.translation, "the बिल्ली drinks पानी");
        assert_eq!(
            result.explanation,
            vec![
                "the → (not learned yet)",
                "cat → बिल्ली",
                "drinks → (not learned yet)",
                "water → पानी",
            ]
        );
    }

    #[test]
    fn test_explanation_matches_token_count() {
        let vocab = sample_vocabulary();
        for text in ["", "   ", "cat", "cat  cat\tcat\n", "a b c d e f", "a\u{1e}b"] {
            let expected = split_words(text).count();
            let result = translate_text(text, "telugu", &vocab);
            assert_eq!(result.explanation.len(), expected, "text: {text:?}");
        }
    }

    #[test]
    fn test_information_separators_split_words() {
        let result = translate_text("\u{1c}cat\u{1d}water\u{1f}", "telugu", &sample_vocabulary());
        assert_eq!(result.translation, "పిల్లి నీరు");
        assert_eq!(result.explanation, vec!["cat → పిల్లి", "water → నీరు"]);
    }

    #[test]
    fn test_empty_text() {
        let result = translate_text("", "telugu", &sample_vocabulary());
        assert_eq!(result.translation, "");
        assert!(result.explanation.is_empty());
    }

    #[test]
    fn test_punctuation_blocks_match() {
        let result = translate_text("cat.", "telugu", &sample_vocabulary());
        assert_eq!(result.translation, "cat.");
        assert_eq!(result.explanation, vec!["cat. → (not learned yet)"]);
    }

    #[test]
    fn test_whitespace_collapsed_in_output() {
        let result = translate_text("cat\t\twater", "telugu", &sample_vocabulary());
        assert_eq!(result.translation, "పిల్లి నీరు");
    }
}
