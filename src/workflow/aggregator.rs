//! Readability aggregation - workflow layer
//!
//! Combines the pure text metrics with the readability scorer and the
//! passive-voice detector into one [`StatisticsRecord`].

use crate::error::AppResult;
use crate::metrics::TextMetrics;
use crate::models::StatisticsRecord;
use crate::services::{PassiveVoiceDetector, ReadabilityScorer};

/// Builds statistics records; holds no resources of its own
pub struct StatisticsAggregator<'a> {
    scorer: &'a dyn ReadabilityScorer,
    detector: &'a dyn PassiveVoiceDetector,
}

impl<'a> StatisticsAggregator<'a> {
    pub fn new(scorer: &'a dyn ReadabilityScorer, detector: &'a dyn PassiveVoiceDetector) -> Self {
        Self { scorer, detector }
    }

    /// All fifteen statistics of `text`.
    ///
    /// `Sentences` is the punctuation count; `Passive Sentences` is counted over
    /// the parser's own segmentation. Scorer and detector errors are returned as-is.
    pub fn calculate_all_statistics(&self, text: &str) -> AppResult<StatisticsRecord> {
        let scores = self.scorer.scores(text)?;
        let metrics = TextMetrics::measure(text);
        let passive_sentences = self.detector.passive_sentence_count(text)?;

        Ok(StatisticsRecord {
            scores,
            characters: metrics.characters,
            words: metrics.words,
            sentences: metrics.sentences,
            paragraphs: metrics.paragraphs,
            words_per_sentence: metrics.words_per_sentence,
            characters_per_word: metrics.characters_per_word,
            sentences_per_paragraph: metrics.sentences_per_paragraph,
            passive_sentences,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::infrastructure::RuleBasedParser;
    use crate::models::MetricValue;
    use crate::services::{DependencyPassiveDetector, FormulaScorer};
    use std::sync::Arc;

    fn with_aggregator<T>(f: impl FnOnce(&StatisticsAggregator<'_>) -> T) -> T {
        let scorer = FormulaScorer::new();
        let detector = DependencyPassiveDetector::new(Arc::new(RuleBasedParser::english()));
        let aggregator = StatisticsAggregator::new(&scorer, &detector);
        f(&aggregator)
    }

    #[test]
    fn record_always_has_all_fields() {
        with_aggregator(|aggregator| {
            for text in ["", "   ", "Hello world. This is a test.", "no punctuation", "?!?"] {
                let record = aggregator.calculate_all_statistics(text).unwrap();
                let names: Vec<&str> = record.entries().map(|(n, _)| n).collect();
                assert_eq!(names, StatisticsRecord::FIELD_NAMES.to_vec(), "{text:?}");
            }
        });
    }

    #[test]
    fn sample_text_statistics() {
        with_aggregator(|aggregator| {
            let record = aggregator
                .calculate_all_statistics("Hello world. This is a test.")
                .unwrap();
            assert_eq!(record.get("Characters"), Some(MetricValue::Count(28)));
            assert_eq!(record.get("Words"), Some(MetricValue::Count(6)));
            assert_eq!(record.get("Sentences"), Some(MetricValue::Count(2)));
            assert_eq!(record.get("Paragraphs"), Some(MetricValue::Count(1)));
            assert_eq!(record.get("Words per Sentence"), Some(MetricValue::Score(3.0)));
            assert_eq!(record.get("Sentences per Paragraph"), Some(MetricValue::Score(2.0)));
            assert_eq!(record.get("Passive Sentences"), Some(MetricValue::Count(0)));
            // 23 word characters * 14.69 ms = 0.33787 s
            assert_eq!(record.get("Reading Time (seconds)"), Some(MetricValue::Score(0.34)));
        });
    }

    #[test]
    fn empty_text_degrades_to_zero() {
        with_aggregator(|aggregator| {
            let record = aggregator.calculate_all_statistics("").unwrap();
            assert_eq!(record.words, 0);
            assert_eq!(record.sentences, 0);
            assert_eq!(record.words_per_sentence, 0.0);
            assert_eq!(record.passive_sentences, 0);
        });
    }

    #[test]
    fn passive_count_uses_parser_segmentation() {
        with_aggregator(|aggregator| {
            // Two punctuation runs ("Dr" and the rest) but one parser sentence
            let record = aggregator
                .calculate_all_statistics("Dr. Smith was hired by the clinic.")
                .unwrap();
            assert_eq!(record.sentences, 2);
            assert_eq!(record.passive_sentences, 1);
        });
    }

    struct BrokenScorer;

    impl ReadabilityScorer for BrokenScorer {
        fn flesch_reading_ease(&self, _: &str) -> AppResult<f64> {
            Err(AppError::formula_failed("flesch_reading_ease", "no text model"))
        }
        fn flesch_kincaid_grade(&self, _: &str) -> AppResult<f64> {
            Ok(0.0)
        }
        fn gunning_fog(&self, _: &str) -> AppResult<f64> {
            Ok(0.0)
        }
        fn dale_chall_readability_score(&self, _: &str) -> AppResult<f64> {
            Ok(0.0)
        }
        fn automated_readability_index(&self, _: &str) -> AppResult<f64> {
            Ok(0.0)
        }
        fn smog_index(&self, _: &str) -> AppResult<f64> {
            Ok(0.0)
        }
        fn reading_time(&self, _: &str, _: f64) -> AppResult<f64> {
            Ok(0.0)
        }
    }

    #[test]
    fn scorer_failure_propagates() {
        let detector = DependencyPassiveDetector::new(Arc::new(RuleBasedParser::english()));
        let aggregator = StatisticsAggregator::new(&BrokenScorer, &detector);
        let err = aggregator.calculate_all_statistics("Text.").unwrap_err();
        assert!(err.to_string().contains("flesch_reading_ease"));
    }
}
