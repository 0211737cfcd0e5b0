pub mod csv_writer;
pub mod extractor;
pub mod failure_log;
pub mod passive_voice;
pub mod readability;

pub use csv_writer::{CsvStatsWriter, StatsWriter};
pub use extractor::{DocumentExtractor, DocxExtractor};
pub use failure_log::FailureLog;
pub use passive_voice::{DependencyPassiveDetector, PassiveVoiceDetector};
pub use readability::{FormulaScorer, ReadabilityScorer, READING_MS_PER_CHAR};
