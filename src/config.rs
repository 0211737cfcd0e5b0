use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// Program configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Folder holding the documents to analyse
    pub folder_path: String,
    /// Destination of the statistics table
    pub output_csv_path: String,
    /// Document extension to pick up, without the dot
    pub document_extension: String,
    /// Sort document names before processing
    pub sort_documents: bool,
    /// Log and skip documents that fail instead of aborting the batch
    pub skip_failed_documents: bool,
    /// Where skipped documents are recorded
    pub failure_log_file: String,
    /// Enable debug logging
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder_path: "input_docx".to_string(),
            output_csv_path: "results.csv".to_string(),
            document_extension: "docx".to_string(),
            sort_documents: true,
            skip_failed_documents: false,
            failure_log_file: "failed_documents.txt".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Load a TOML config file; missing keys keep their defaults
    pub fn from_toml_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// Apply `READABILITY_*` / `VERBOSE_LOGGING` environment variables on top of `self`
    pub fn with_env_overrides(self) -> AppResult<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let bool_var = |name: &str, current: bool| -> AppResult<bool> {
            match lookup(name) {
                Some(value) => parse_bool(&value).ok_or_else(|| {
                    ConfigError::EnvVarParseFailed {
                        var_name: name.to_string(),
                        value,
                        expected_type: "bool".to_string(),
                    }
                    .into()
                }),
                None => Ok(current),
            }
        };

        Ok(Self {
            sort_documents: bool_var("READABILITY_SORT_DOCUMENTS", self.sort_documents)?,
            skip_failed_documents: bool_var("READABILITY_SKIP_FAILED", self.skip_failed_documents)?,
            verbose_logging: bool_var("VERBOSE_LOGGING", self.verbose_logging)?,
            folder_path: lookup("READABILITY_INPUT_DIR").unwrap_or(self.folder_path),
            output_csv_path: lookup("READABILITY_OUTPUT_CSV").unwrap_or(self.output_csv_path),
            document_extension: lookup("READABILITY_DOCUMENT_EXTENSION")
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or(self.document_extension),
            failure_log_file: lookup("READABILITY_FAILURE_LOG").unwrap_or(self.failure_log_file),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
