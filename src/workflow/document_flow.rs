//! Document processing flow - workflow layer
//!
//! Core job: define the complete processing of "one document"
//!
//! Order:
//! 1. extract plain text
//! 2. text metrics + readability scores + passive sentences
//! 3. tag the record with the file name

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::models::{BrochureRow, Document};
use crate::services::{DocumentExtractor, PassiveVoiceDetector, ReadabilityScorer};
use crate::utils::logging::truncate_text;
use crate::workflow::aggregator::StatisticsAggregator;
use crate::workflow::document_ctx::DocumentCtx;

/// Document processing flow
///
/// - Orchestrates extraction and aggregation for a single document
/// - Owns no resources; borrows the services from the caller
/// - Either returns a complete row or an error, never a partial row
pub struct DocumentFlow<'a> {
    extractor: &'a dyn DocumentExtractor,
    aggregator: StatisticsAggregator<'a>,
}

impl<'a> DocumentFlow<'a> {
    pub fn new(
        extractor: &'a dyn DocumentExtractor,
        scorer: &'a dyn ReadabilityScorer,
        detector: &'a dyn PassiveVoiceDetector,
    ) -> Self {
        Self {
            extractor,
            aggregator: StatisticsAggregator::new(scorer, detector),
        }
    }

    pub fn run(&self, path: &Path, ctx: &DocumentCtx) -> Result<BrochureRow> {
        let text = self
            .extractor
            .extract_text(path)
            .with_context(|| format!("failed to extract text from {}", ctx.name))?;
        let document = Document::new(ctx.name.clone(), text);

        debug!(
            "{} extracted {} characters: {}",
            ctx,
            document.text.chars().count(),
            truncate_text(&document.text, 60)
        );

        let statistics = self
            .aggregator
            .calculate_all_statistics(&document.text)
            .with_context(|| format!("failed to compute statistics for {}", ctx.name))?;

        debug!(
            "{} words={} sentences={} passive={} flesch={}",
            ctx,
            statistics.words,
            statistics.sentences,
            statistics.passive_sentences,
            statistics.scores.flesch_reading_ease
        );

        Ok(BrochureRow::new(document.id, statistics))
    }
}
