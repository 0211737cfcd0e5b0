//! Orchestration layer
//!
//! Batch processing and scheduling: the "command centre" of the application.
//!
//! ```text
//! batch_processor (App: Vec<DocumentFile>, failure policy, output)
//!     ↓
//! workflow::DocumentFlow (one document: extract → aggregate)
//!     ↓
//! services (extractor / readability / passive voice / writers)
//!     ↓
//! metrics + infrastructure (pure text metrics, parser resource)
//! ```
//!
//! Design rules:
//!
//! 1. Only this layer owns the services and the parser resource
//! 2. Dependencies point downwards only
//! 3. No text analysis here, only scheduling and bookkeeping

pub mod batch_processor;

pub use batch_processor::{App, BatchReport, DocumentFailure};
