//! Document processing context
//!
//! Wraps "which document of the batch am I on"

use std::fmt::Display;

/// Context of one document in a batch run
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// File name, becomes the `BrochureID`
    pub name: String,

    /// Position in the batch (from 1, only used for logging)
    pub index: usize,

    /// Number of documents in the batch
    pub total: usize,
}

impl DocumentCtx {
    pub fn new(name: impl Into<String>, index: usize, total: usize) -> Self {
        Self {
            name: name.into(),
            index,
            total,
        }
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{} {}]", self.index, self.total, self.name)
    }
}
