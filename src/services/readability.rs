//! Readability scoring service - service layer
//!
//! Only knows "score this text"; it has no idea which document the text came from.

use crate::error::{AppError, AppResult};
use crate::models::ReadabilityScores;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Milliseconds of reading time per character
pub const READING_MS_PER_CHAR: f64 = 14.69;

/// Words familiar to most fourth-grade readers (Dale-Chall list)
const FAMILIAR_WORDS: &str = include_str!("../../data/familiar_words.txt");

/// The readability formulas a statistics record needs.
///
/// Implementations may fail on input they cannot score; callers propagate the error.
pub trait ReadabilityScorer: Send + Sync {
    fn flesch_reading_ease(&self, text: &str) -> AppResult<f64>;
    fn flesch_kincaid_grade(&self, text: &str) -> AppResult<f64>;
    fn gunning_fog(&self, text: &str) -> AppResult<f64>;
    fn dale_chall_readability_score(&self, text: &str) -> AppResult<f64>;
    fn automated_readability_index(&self, text: &str) -> AppResult<f64>;
    fn smog_index(&self, text: &str) -> AppResult<f64>;
    /// Reading time in seconds at `ms_per_char` milliseconds per character
    fn reading_time(&self, text: &str, ms_per_char: f64) -> AppResult<f64>;

    /// All seven scores, reading time at [`READING_MS_PER_CHAR`]
    fn scores(&self, text: &str) -> AppResult<ReadabilityScores> {
        Ok(ReadabilityScores {
            flesch_reading_ease: self.flesch_reading_ease(text)?,
            flesch_kincaid_grade: self.flesch_kincaid_grade(text)?,
            gunning_fog: self.gunning_fog(text)?,
            dale_chall: self.dale_chall_readability_score(text)?,
            automated_readability_index: self.automated_readability_index(text)?,
            smog_index: self.smog_index(text)?,
            reading_time_seconds: self.reading_time(text, READING_MS_PER_CHAR)?,
        })
    }
}

/// The published formulas, computed the way the `textstat` package does.
///
/// Differences from the reference package: syllables come from a vowel-group
/// heuristic rather than a hyphenation dictionary.
#[derive(Debug, Clone)]
pub struct FormulaScorer {
    familiar_words: HashSet<String>,
}

impl Default for FormulaScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormulaScorer {
    /// Scorer with the built-in Dale-Chall familiar-word list
    pub fn new() -> Self {
        Self::with_familiar_words(FAMILIAR_WORDS.split_whitespace())
    }

    pub fn with_familiar_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            familiar_words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn is_familiar(&self, word: &str) -> bool {
        self.familiar_words.contains(&word.to_lowercase())
    }

    /// Words after punctuation (apostrophes excepted) is stripped
    pub fn lexicon_count(&self, text: &str) -> usize {
        strip_punctuation(text).split_whitespace().count()
    }

    /// Sentence spans of three or more words, at least one
    pub fn sentence_count(&self, text: &str) -> usize {
        let spans: Vec<&str> = sentence_spans().find_iter(text).map(|m| m.as_str()).collect();
        let short = spans.iter().filter(|s| self.lexicon_count(s) <= 2).count();
        (spans.len() - short).max(1)
    }

    /// Characters other than spaces
    pub fn char_count(&self, text: &str) -> usize {
        text.chars().filter(|c| *c != ' ').count()
    }

    pub fn syllable_count(&self, text: &str) -> usize {
        strip_punctuation(text)
            .split_whitespace()
            .map(word_syllables)
            .sum()
    }

    /// Words of three or more syllables
    pub fn polysyllable_count(&self, text: &str) -> usize {
        strip_punctuation(text)
            .split_whitespace()
            .filter(|w| word_syllables(w) >= 3)
            .count()
    }

    /// Distinct unfamiliar words with at least `syllable_threshold` syllables
    pub fn difficult_words(&self, text: &str, syllable_threshold: usize) -> usize {
        let lower = text.to_lowercase();
        let distinct: HashSet<&str> = difficult_word_tokens()
            .find_iter(&lower)
            .map(|m| m.as_str())
            .collect();
        distinct
            .into_iter()
            .filter(|w| !self.familiar_words.contains(*w) && word_syllables(w) >= syllable_threshold)
            .count()
    }

    fn avg_sentence_length(&self, text: &str) -> f64 {
        legacy_round(
            divide(self.lexicon_count(text), self.sentence_count(text)).unwrap_or(0.0),
            1,
        )
    }

    fn avg_syllables_per_word(&self, text: &str) -> f64 {
        legacy_round(
            divide(self.syllable_count(text), self.lexicon_count(text)).unwrap_or(0.0),
            1,
        )
    }
}

impl ReadabilityScorer for FormulaScorer {
    fn flesch_reading_ease(&self, text: &str) -> AppResult<f64> {
        let score = 206.835
            - 1.015 * self.avg_sentence_length(text)
            - 84.6 * self.avg_syllables_per_word(text);
        finite("flesch_reading_ease", legacy_round(score, 2))
    }

    fn flesch_kincaid_grade(&self, text: &str) -> AppResult<f64> {
        let grade = 0.39 * self.avg_sentence_length(text)
            + 11.8 * self.avg_syllables_per_word(text)
            - 15.59;
        finite("flesch_kincaid_grade", legacy_round(grade, 1))
    }

    fn gunning_fog(&self, text: &str) -> AppResult<f64> {
        let Some(share) = divide(self.difficult_words(text, 3), self.lexicon_count(text)) else {
            return Ok(0.0);
        };
        let grade = 0.4 * (self.avg_sentence_length(text) + share * 100.0);
        finite("gunning_fog", legacy_round(grade, 2))
    }

    fn dale_chall_readability_score(&self, text: &str) -> AppResult<f64> {
        let words = self.lexicon_count(text);
        let easy = words.saturating_sub(self.difficult_words(text, 0));
        let Some(easy_share) = divide(easy, words) else {
            return Ok(0.0);
        };
        let difficult_percent = 100.0 - easy_share * 100.0;
        let mut score = 0.1579 * difficult_percent + 0.0496 * self.avg_sentence_length(text);
        if difficult_percent > 5.0 {
            score += 3.6365;
        }
        finite("dale_chall_readability_score", legacy_round(score, 2))
    }

    fn automated_readability_index(&self, text: &str) -> AppResult<f64> {
        let words = self.lexicon_count(text);
        let (Some(chars_per_word), Some(words_per_sentence)) = (
            divide(self.char_count(text), words),
            divide(words, self.sentence_count(text)),
        ) else {
            return Ok(0.0);
        };
        let index = 4.71 * legacy_round(chars_per_word, 2) + 0.5 * legacy_round(words_per_sentence, 2)
            - 21.43;
        finite("automated_readability_index", legacy_round(index, 1))
    }

    fn smog_index(&self, text: &str) -> AppResult<f64> {
        let sentences = self.sentence_count(text);
        if sentences < 3 {
            return Ok(0.0);
        }
        let polysyllables = self.polysyllable_count(text) as f64;
        let smog = 1.043 * (30.0 * polysyllables / sentences as f64).sqrt() + 3.1291;
        finite("smog_index", legacy_round(smog, 1))
    }

    fn reading_time(&self, text: &str, ms_per_char: f64) -> AppResult<f64> {
        let millis = text
            .split_whitespace()
            .fold(0.0, |total, w| total + w.chars().count() as f64 * ms_per_char);
        finite("reading_time", legacy_round(millis / 1000.0, 2))
    }
}

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\w\s']").expect("static regex"))
}

fn sentence_spans() -> &'static Regex {
    static SPANS: OnceLock<Regex> = OnceLock::new();
    SPANS.get_or_init(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("static regex"))
}

fn difficult_word_tokens() -> &'static Regex {
    static TOKENS: OnceLock<Regex> = OnceLock::new();
    TOKENS.get_or_init(|| Regex::new(r"[\w='\u{2018}]+").expect("static regex"))
}

fn strip_punctuation(text: &str) -> std::borrow::Cow<'_, str> {
    punctuation().replace_all(text, "")
}

fn divide(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator != 0).then(|| numerator as f64 / denominator as f64)
}

/// textstat's legacy rounding to `points` decimals: `floor(x * 10^p ± 0.5)`,
/// with the 0.5 taking the sign of `x`. Negative values move down (-3.92 → -4.0
/// at one decimal); zero of either sign stays `0.0`.
fn legacy_round(number: f64, points: i32) -> f64 {
    if number == 0.0 {
        return 0.0;
    }
    let p = 10f64.powi(points);
    ((number * p) + 0.5f64.copysign(number)).floor() / p
}

fn finite(formula: &'static str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::formula_failed(formula, format!("non-finite result {value}")))
    }
}

/// Vowel-group syllable estimate, never below one for a non-empty word
fn word_syllables(word: &str) -> usize {
    let chars: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if chars.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0usize;
    let mut previous_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = chars.len();
    if n > 2 {
        let (third, second, last) = (chars[n - 3], chars[n - 2], chars[n - 1]);
        let silent_e = last == 'e' && !is_vowel(second) && !(second == 'l' && !is_vowel(third));
        let silent_ed = last == 'd' && second == 'e' && !is_vowel(third) && !matches!(third, 't' | 'd');
        let silent_es = last == 's'
            && second == 'e'
            && !is_vowel(third)
            && !matches!(third, 's' | 'x' | 'z' | 'c' | 'g' | 'h');
        if silent_e || silent_ed || silent_es {
            count = count.saturating_sub(1);
        }
    }
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "The cat sat on the mat. The dog ran to the park.";

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test]
    fn syllable_heuristic() {
        assert_eq!(word_syllables("cat"), 1);
        assert_eq!(word_syllables("the"), 1);
        assert_eq!(word_syllables("make"), 1);
        assert_eq!(word_syllables("table"), 2);
        assert_eq!(word_syllables("jumped"), 1);
        assert_eq!(word_syllables("wanted"), 2);
        assert_eq!(word_syllables("boxes"), 2);
        assert_eq!(word_syllables("beautiful"), 3);
        assert_eq!(word_syllables("readability"), 5);
        assert_eq!(word_syllables("123"), 0);
    }

    #[test]
    fn counting_follows_textstat_conventions() {
        let scorer = FormulaScorer::new();
        assert_eq!(scorer.lexicon_count(SIMPLE), 12);
        assert_eq!(scorer.lexicon_count("-- , ..."), 0);
        assert_eq!(scorer.sentence_count(SIMPLE), 2);
        assert_eq!(scorer.sentence_count("Hi. Yes. Go now, please."), 1);
        assert_eq!(scorer.sentence_count(""), 1);
        assert_eq!(scorer.char_count("a b\nc"), 4);
    }

    #[test]
    fn familiar_words_are_loaded() {
        let scorer = FormulaScorer::new();
        assert!(scorer.is_familiar("park"));
        assert!(scorer.is_familiar("Because"));
        assert!(!scorer.is_familiar("photosynthesis"));
        assert_eq!(scorer.difficult_words(SIMPLE, 0), 0);
        assert_eq!(scorer.difficult_words("Photosynthesis photosynthesis converts light.", 3), 1);
    }

    #[test]
    fn simple_text_scores() {
        let scorer = FormulaScorer::new();
        assert_close(scorer.flesch_reading_ease(SIMPLE).unwrap(), 116.15, 1e-9);
        assert_close(scorer.flesch_kincaid_grade(SIMPLE).unwrap(), -1.5, 1e-9);
        assert_close(scorer.gunning_fog(SIMPLE).unwrap(), 2.4, 1e-9);
        assert_close(scorer.dale_chall_readability_score(SIMPLE).unwrap(), 0.3, 1e-9);
        // 4.71 * 3.08 + 0.5 * 6.0 - 21.43 = -3.9232; legacy rounding floors negatives
        assert_close(scorer.automated_readability_index(SIMPLE).unwrap(), -4.0, 1e-9);
        assert_eq!(scorer.smog_index(SIMPLE).unwrap(), 0.0);
    }

    #[test]
    fn smog_needs_three_sentences() {
        let scorer = FormulaScorer::new();
        let text = "Readability formulas estimate difficulty. \
                    Complicated vocabulary increases scores. \
                    Everyone understands simple words.";
        let polysyllables = scorer.polysyllable_count(text) as f64;
        assert!(polysyllables > 0.0);
        let expected = 1.043 * (30.0 * polysyllables / 3.0).sqrt() + 3.1291;
        assert_close(scorer.smog_index(text).unwrap(), expected, 0.051);
    }

    #[test]
    fn reading_time_uses_word_characters() {
        let scorer = FormulaScorer::new();
        // 37 non-whitespace characters at 14.69 ms each
        assert_close(scorer.reading_time(SIMPLE, READING_MS_PER_CHAR).unwrap(), 0.54, 1e-9);
        for blank in ["", "   ", "\n\t\n"] {
            let seconds = scorer.reading_time(blank, READING_MS_PER_CHAR).unwrap();
            assert_eq!(seconds, 0.0, "{blank:?}");
            assert!(seconds.is_sign_positive(), "{blank:?}");
        }
    }

    #[test]
    fn empty_text_never_fails() {
        let scorer = FormulaScorer::new();
        let scores = scorer.scores("").unwrap();
        assert_close(scores.flesch_reading_ease, 206.835, 0.011);
        assert_eq!(scores.gunning_fog, 0.0);
        assert_eq!(scores.dale_chall, 0.0);
        assert_eq!(scores.automated_readability_index, 0.0);
        assert_eq!(scores.smog_index, 0.0);
        assert_eq!(scores.reading_time_seconds, 0.0);
    }

    #[test]
    fn legacy_rounding_floors_negatives() {
        assert_eq!(legacy_round(2.25, 1), 2.3);
        assert_eq!(legacy_round(-2.25, 1), -2.3);
        assert_eq!(legacy_round(-3.92, 1), -4.0);
        assert_eq!(legacy_round(1.0, 2), 1.0);
        assert!(legacy_round(-0.0, 2).is_sign_positive());
        assert_eq!(legacy_round(-0.0, 2), 0.0);
    }
}
