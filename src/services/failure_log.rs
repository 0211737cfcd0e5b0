//! Failure log service - service layer
//!
//! Only knows how to append "this document failed" lines; it does not decide
//! whether a failure is skipped or fatal.

use crate::error::{AppError, AppResult};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// Appends skipped documents to a plain-text log
pub struct FailureLog {
    log_file_path: String,
}

impl FailureLog {
    /// Log at the default `failed_documents.txt`
    pub fn new() -> Self {
        Self {
            log_file_path: "failed_documents.txt".to_string(),
        }
    }

    /// Log at a custom path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.log_file_path
    }

    /// Record one failed document
    ///
    /// # Arguments
    /// - `document`: file name of the document
    /// - `reason`: the error that stopped it
    pub fn write(&self, document: &str, reason: &str) -> AppResult<()> {
        debug!("recording failure: {} | {}", document, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
            .map_err(|source| AppError::write_failed(&self.log_file_path, source))?;

        let line = format!(
            "{} | {} | {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            document,
            reason.replace('\n', " ")
        );

        file.write_all(line.as_bytes())
            .map_err(|source| AppError::write_failed(&self.log_file_path, source))?;

        Ok(())
    }
}

impl Default for FailureLog {
    fn default() -> Self {
        Self::new()
    }
}
