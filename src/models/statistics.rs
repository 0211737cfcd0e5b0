//! The fixed-shape statistics record produced for every document

use std::fmt;

/// Header of the column holding the document file name
pub const BROCHURE_ID_COLUMN: &str = "BrochureID";

/// A single metric value: either an exact count or a (possibly rounded) score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Score(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Score(x) => x,
        }
    }
}

impl fmt::Display for MetricValue {
    /// Counts print as integers; scores always keep a fractional digit (`3.0`, `206.84`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricValue::Count(n) => write!(f, "{}", n),
            MetricValue::Score(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            MetricValue::Score(x) => write!(f, "{}", x),
        }
    }
}

/// Scores delegated to a [`ReadabilityScorer`](crate::services::ReadabilityScorer)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub dale_chall: f64,
    pub automated_readability_index: f64,
    pub smog_index: f64,
    pub reading_time_seconds: f64,
}

/// Statistics of one document.
///
/// The set and order of metrics is fixed: see [`StatisticsRecord::FIELD_NAMES`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsRecord {
    pub scores: ReadabilityScores,
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub words_per_sentence: f64,
    pub characters_per_word: f64,
    pub sentences_per_paragraph: f64,
    pub passive_sentences: usize,
}

impl StatisticsRecord {
    pub const FIELD_COUNT: usize = 15;

    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] = [
        "Flesch Reading Ease",
        "Flesch-Kincaid Grade",
        "Gunning Fog Index",
        "Dale-Chall Readability Score",
        "Automated Readability Index",
        "SMOG Index",
        "Reading Time (seconds)",
        "Characters",
        "Words",
        "Sentences",
        "Paragraphs",
        "Words per Sentence",
        "Characters per Word",
        "Sentences per Paragraph",
        "Passive Sentences",
    ];

    /// Values in `FIELD_NAMES` order
    pub fn values(&self) -> [MetricValue; Self::FIELD_COUNT] {
        use MetricValue::{Count, Score};
        let s = &self.scores;
        [
            Score(s.flesch_reading_ease),
            Score(s.flesch_kincaid_grade),
            Score(s.gunning_fog),
            Score(s.dale_chall),
            Score(s.automated_readability_index),
            Score(s.smog_index),
            Score(s.reading_time_seconds),
            Count(self.characters),
            Count(self.words),
            Count(self.sentences),
            Count(self.paragraphs),
            Score(self.words_per_sentence),
            Score(self.characters_per_word),
            Score(self.sentences_per_paragraph),
            Count(self.passive_sentences),
        ]
    }

    /// `(name, value)` pairs in field order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, MetricValue)> {
        Self::FIELD_NAMES.into_iter().zip(self.values())
    }

    /// Look a metric up by its column name
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.entries().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

/// One output row: a record tagged with the file it came from
#[derive(Debug, Clone, PartialEq)]
pub struct BrochureRow {
    pub brochure_id: String,
    pub statistics: StatisticsRecord,
}

impl BrochureRow {
    pub fn new(brochure_id: impl Into<String>, statistics: StatisticsRecord) -> Self {
        Self {
            brochure_id: brochure_id.into(),
            statistics,
        }
    }

    /// Column headers: the metric names followed by `BrochureID`
    pub fn headers() -> Vec<&'static str> {
        let mut headers = StatisticsRecord::FIELD_NAMES.to_vec();
        headers.push(BROCHURE_ID_COLUMN);
        headers
    }

    /// Cells rendered in `headers()` order
    pub fn cells(&self) -> Vec<String> {
        let mut cells: Vec<String> = self
            .statistics
            .values()
            .iter()
            .map(ToString::to_string)
            .collect();
        cells.push(self.brochure_id.clone());
        cells
    }
}
