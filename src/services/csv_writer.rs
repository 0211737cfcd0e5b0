//! Statistics table writer - service layer

use crate::error::{AppError, AppResult, FileError};
use crate::models::BrochureRow;
use csv::WriterBuilder;
use std::path::Path;
use tracing::debug;

/// Writes every row of a run to a destination, header first
pub trait StatsWriter: Send + Sync {
    fn write_all(&self, rows: &[BrochureRow], path: &Path) -> AppResult<()>;
}

/// Comma-separated output with a header row, even when there are no rows
#[derive(Debug, Clone)]
pub struct CsvStatsWriter {
    delimiter: u8,
}

impl Default for CsvStatsWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvStatsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl StatsWriter for CsvStatsWriter {
    fn write_all(&self, rows: &[BrochureRow], path: &Path) -> AppResult<()> {
        let path_str = path.display().to_string();
        let csv_error = |source: csv::Error| {
            AppError::File(FileError::Csv {
                path: path_str.clone(),
                source,
            })
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| AppError::write_failed(parent.display().to_string(), source))?;
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(csv_error)?;

        writer.write_record(BrochureRow::headers()).map_err(csv_error)?;
        for row in rows {
            writer.write_record(row.cells()).map_err(csv_error)?;
        }
        writer
            .flush()
            .map_err(|source| AppError::write_failed(&path_str, source))?;

        debug!("wrote {} rows to {}", rows.len(), path_str);
        Ok(())
    }
}
