//! # Readability Stats
//!
//! Computes readability and structural statistics for a folder of documents
//! and writes one table row per document.
//!
//! ## Architecture
//!
//! The crate is split into strict layers:
//!
//! ### ① Infrastructure
//! - `infrastructure/` - owns the parser resource, only exposes capabilities
//! - `RuleBasedParser` - sentence segmentation plus dependency roles
//!
//! ### ② Metrics
//! - `metrics/` - pure counts and ratios, no dependencies
//!
//! ### ③ Services
//! - `services/` - "what can I do", one text or file at a time
//! - `DocxExtractor` - document → plain text
//! - `FormulaScorer` - readability formulas
//! - `DependencyPassiveDetector` - passive sentences
//! - `CsvStatsWriter` / `FailureLog` - output
//!
//! ### ④ Workflow
//! - `workflow/` - the complete processing of one document
//! - `StatisticsAggregator` - text → `StatisticsRecord`
//! - `DocumentFlow` - extract → aggregate → row
//!
//! ### ⑤ Orchestration
//! - `orchestrator/` - the batch: discovery, failure policy, output

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod metrics;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// Commonly used re-exports
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{RuleBasedParser, SyntacticParser};
pub use models::{BrochureRow, Document, MetricValue, StatisticsRecord};
pub use orchestrator::{App, BatchReport, DocumentFailure};
pub use services::{PassiveVoiceDetector, ReadabilityScorer};
pub use workflow::StatisticsAggregator;
