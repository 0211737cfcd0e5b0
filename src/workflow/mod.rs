pub mod aggregator;
pub mod document_ctx;
pub mod document_flow;

pub use aggregator::StatisticsAggregator;
pub use document_ctx::DocumentCtx;
pub use document_flow::DocumentFlow;
