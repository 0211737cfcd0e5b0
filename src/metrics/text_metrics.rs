//! Elementary counts and ratios derived directly from text
//!
//! Every function here is total: degenerate input (empty text, no sentence
//! punctuation, no non-blank lines) yields 0 instead of failing.

use regex::Regex;
use std::sync::OnceLock;

fn sentence_terminators() -> &'static Regex {
    static TERMINATORS: OnceLock<Regex> = OnceLock::new();
    TERMINATORS.get_or_init(|| Regex::new(r"[.!?]+").expect("static regex"))
}

/// Number of whitespace-delimited tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Total character length, whitespace included
pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of non-blank runs between groups of `.`, `!` and `?`.
///
/// Text without terminal punctuation is one run, so it counts as one sentence.
/// Abbreviations and decimals split runs too ("Dr. Smith" is two).
pub fn sentence_count(text: &str) -> usize {
    sentence_terminators()
        .split(text)
        .filter(|run| !run.trim().is_empty())
        .count()
}

/// Number of non-blank lines
pub fn paragraph_count(text: &str) -> usize {
    text.split('\n').filter(|line| !line.trim().is_empty()).count()
}

/// Mean word length in characters; 0 without words
pub fn characters_per_word(text: &str) -> f64 {
    let (words, characters) = text
        .split_whitespace()
        .fold((0usize, 0usize), |(w, c), word| (w + 1, c + word.chars().count()));
    ratio(characters, words)
}

/// Words per sentence; 0 without sentences
pub fn words_per_sentence(text: &str) -> f64 {
    ratio(word_count(text), sentence_count(text))
}

/// Sentences per paragraph; 0 without paragraphs
pub fn sentences_per_paragraph(text: &str) -> f64 {
    ratio(sentence_count(text), paragraph_count(text))
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// All text metrics of one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub characters_per_word: f64,
    pub words_per_sentence: f64,
    pub sentences_per_paragraph: f64,
}

impl TextMetrics {
    pub fn measure(text: &str) -> Self {
        let words = word_count(text);
        let sentences = sentence_count(text);
        let paragraphs = paragraph_count(text);
        Self {
            characters: character_count(text),
            words,
            sentences,
            paragraphs,
            characters_per_word: characters_per_word(text),
            words_per_sentence: ratio(words, sentences),
            sentences_per_paragraph: ratio(sentences, paragraphs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_whitespace_tokens() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("Hello world. This is a test."), 6);
        assert_eq!(word_count("tabs\tand\nnewlines  too"), 4);
    }

    #[test]
    fn characters_include_whitespace() {
        assert_eq!(character_count(""), 0);
        assert_eq!(character_count("a b\n"), 4);
        assert_eq!(character_count("café"), 4);
    }

    #[test]
    fn sentences_split_on_terminal_punctuation() {
        assert_eq!(sentence_count(""), 0);
        assert_eq!(sentence_count("Hello."), 1);
        assert_eq!(sentence_count("Hello. World! How are you?"), 3);
        assert_eq!(sentence_count("Wait... what?!"), 2);
        assert_eq!(sentence_count("...!?"), 0);
        assert_eq!(sentence_count("no punctuation at all"), 1);
    }

    #[test]
    fn paragraphs_skip_blank_lines() {
        assert_eq!(paragraph_count("a\n\nb\nc"), 3);
        assert_eq!(paragraph_count(""), 0);
        assert_eq!(paragraph_count("  \n\t\n"), 0);
        assert_eq!(paragraph_count("one line"), 1);
    }

    #[test]
    fn ratios_degrade_to_zero() {
        assert_eq!(characters_per_word(""), 0.0);
        assert_eq!(words_per_sentence(""), 0.0);
        assert_eq!(words_per_sentence("?!"), 0.0);
        assert_eq!(sentences_per_paragraph("\n\n"), 0.0);
    }

    #[test]
    fn ratios_on_regular_text() {
        let text = "Hello world. This is a test.";
        assert_eq!(words_per_sentence(text), 3.0);
        assert!((characters_per_word(text) - 23.0 / 6.0).abs() < 1e-12);
        assert_eq!(sentences_per_paragraph("One. Two.\nThree."), 1.5);
    }

    #[test]
    fn repeated_calls_agree() {
        let text = "First paragraph. Still first!\n\nSecond paragraph?";
        assert_eq!(TextMetrics::measure(text), TextMetrics::measure(text));
        assert_eq!(sentence_count(text), sentence_count(text));
    }

    #[test]
    fn measure_matches_individual_functions() {
        let text = "First paragraph. Still first!\n\nSecond paragraph?";
        let m = TextMetrics::measure(text);
        assert_eq!(m.characters, character_count(text));
        assert_eq!(m.words, 6);
        assert_eq!(m.sentences, 3);
        assert_eq!(m.paragraphs, 2);
        assert_eq!(m.words_per_sentence, words_per_sentence(text));
        assert_eq!(m.characters_per_word, characters_per_word(text));
        assert_eq!(m.sentences_per_paragraph, 1.5);
    }
}
