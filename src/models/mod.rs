pub mod document;
pub mod loaders;
pub mod statistics;

pub use document::{Document, DocumentFile};
pub use loaders::list_documents;
pub use statistics::{
    BrochureRow, MetricValue, ReadabilityScores, StatisticsRecord, BROCHURE_ID_COLUMN,
};
