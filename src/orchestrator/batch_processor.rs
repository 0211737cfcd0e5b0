//! Batch document processor - orchestration layer
//!
//! ## Responsibilities
//!
//! Entry point of the application: owns the services and drives a whole run.
//!
//! 1. **Initialisation**: build the parser resource once and wire the services
//! 2. **Discovery**: list the documents in the input folder
//! 3. **Sequential processing**: one document at a time through `DocumentFlow`
//! 4. **Failure policy**: abort on the first failure, or skip and log it
//! 5. **Output**: hand every row to the table writer, header included
//!
//! ## Notes
//!
//! - Only this layer decides what a failing document means for the batch
//! - The parser lives as long as the `App` and is dropped with it

use crate::config::Config;
use crate::infrastructure::{RuleBasedParser, SyntacticParser};
use crate::models::{list_documents, BrochureRow};
use crate::services::{
    CsvStatsWriter, DependencyPassiveDetector, DocumentExtractor, DocxExtractor, FailureLog,
    FormulaScorer, PassiveVoiceDetector, ReadabilityScorer, StatsWriter,
};
use crate::utils::logging::{
    log_document_start, log_documents_found, log_startup, print_final_stats,
};
use crate::workflow::{DocumentCtx, DocumentFlow};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// A document that was skipped under the skip-and-log policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub name: String,
    pub reason: String,
}

/// Outcome of one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub output_path: PathBuf,
    /// Matching documents found in the folder
    pub total: usize,
    /// Rows written to the table
    pub rows: Vec<BrochureRow>,
    pub failures: Vec<DocumentFailure>,
}

/// Application main structure
pub struct App {
    config: Config,
    extractor: Box<dyn DocumentExtractor>,
    scorer: Box<dyn ReadabilityScorer>,
    detector: Box<dyn PassiveVoiceDetector>,
    writer: Box<dyn StatsWriter>,
    failure_log: FailureLog,
}

impl App {
    /// Build the application with the default services.
    ///
    /// The parser resource is acquired here, once per run.
    pub fn initialize(config: Config) -> Result<Self> {
        let parser: Arc<dyn SyntacticParser> = Arc::new(RuleBasedParser::english());
        info!("✓ Parser resource loaded");

        Ok(Self::with_services(
            config,
            Box::new(DocxExtractor::new()),
            Box::new(FormulaScorer::new()),
            Box::new(DependencyPassiveDetector::new(parser)),
            Box::new(CsvStatsWriter::new()),
        ))
    }

    /// Build the application around caller-supplied services
    pub fn with_services(
        config: Config,
        extractor: Box<dyn DocumentExtractor>,
        scorer: Box<dyn ReadabilityScorer>,
        detector: Box<dyn PassiveVoiceDetector>,
        writer: Box<dyn StatsWriter>,
    ) -> Self {
        let failure_log = FailureLog::with_path(config.failure_log_file.clone());
        Self {
            config,
            extractor,
            scorer,
            detector,
            writer,
            failure_log,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run over the configured folder and output path
    pub async fn run(&self) -> Result<BatchReport> {
        log_startup(&self.config);
        self.process_brochures(&self.config.folder_path, &self.config.output_csv_path)
            .await
    }

    /// Compute statistics for every matching document in `folder_path` and
    /// write them to `output_csv_path`.
    ///
    /// With `skip_failed_documents` off, the first failing document aborts the
    /// run and no table is written.
    pub async fn process_brochures(
        &self,
        folder_path: impl AsRef<Path>,
        output_csv_path: impl AsRef<Path>,
    ) -> Result<BatchReport> {
        let folder = folder_path.as_ref();
        let output = output_csv_path.as_ref();

        let documents = list_documents(
            folder,
            &self.config.document_extension,
            self.config.sort_documents,
        )
        .await
        .with_context(|| format!("cannot list documents in {}", folder.display()))?;

        let total = documents.len();
        log_documents_found(total, &self.config.document_extension);

        let flow = DocumentFlow::new(
            self.extractor.as_ref(),
            self.scorer.as_ref(),
            self.detector.as_ref(),
        );
        let mut rows = Vec::with_capacity(total);
        let mut failures = Vec::new();

        for (idx, document) in documents.iter().enumerate() {
            let ctx = DocumentCtx::new(document.name.clone(), idx + 1, total);
            log_document_start(&ctx.name);

            match flow.run(document.path(), &ctx) {
                Ok(row) => rows.push(row),
                Err(e) if self.config.skip_failed_documents => {
                    let reason = format!("{:#}", e);
                    error!("{} ❌ skipped: {}", ctx, reason);
                    self.failure_log.write(&ctx.name, &reason)?;
                    failures.push(DocumentFailure {
                        name: ctx.name.clone(),
                        reason,
                    });
                }
                Err(e) => {
                    error!("{} ❌ aborting batch", ctx);
                    return Err(e);
                }
            }
        }

        self.writer
            .write_all(&rows, output)
            .with_context(|| format!("cannot write statistics to {}", output.display()))?;

        print_final_stats(
            rows.len(),
            failures.len(),
            total,
            &output.display().to_string(),
        );

        Ok(BatchReport {
            output_path: output.to_path_buf(),
            total,
            rows,
            failures,
        })
    }
}
