use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Document extraction errors
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),
    /// Parser or readability formula errors
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),
    /// File system errors
    #[error("file error: {0}")]
    File(#[from] FileError),
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while turning a document file into plain text
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The document file could not be opened
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a readable zip package
    #[error("corrupt document package {path}: {source}")]
    Archive {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },
    /// The package has no main document part
    #[error("{path} has no {part} part")]
    MissingPart { path: String, part: String },
    /// The main document part is not well-formed XML
    #[error("malformed document XML in {path}: {source}")]
    Xml {
        path: String,
        #[source]
        source: quick_xml::Error,
    },
}

/// Errors raised by the parser or the readability formulas
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The syntactic parser rejected the text
    #[error("parser failed: {reason}")]
    Parser { reason: String },
    /// A readability formula could not be evaluated
    #[error("formula {formula} failed: {reason}")]
    Formula {
        formula: &'static str,
        reason: String,
    },
}

/// File system errors
#[derive(Debug, Error)]
pub enum FileError {
    /// Input directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: String },
    /// Input directory could not be listed
    #[error("cannot read directory {path}: {source}")]
    ReadDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Writing an output file failed
    #[error("cannot write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// CSV serialisation failed
    #[error("cannot write CSV {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML
    #[error("cannot parse config file {path}: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// Environment variable holds a value of the wrong type
    #[error("environment variable {var_name}: value '{value}' is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== Convenience constructors ==========

impl AppError {
    /// Build a document-open error
    pub fn open_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Extraction(ExtractionError::Open {
            path: path.into(),
            source,
        })
    }

    /// Build a file-write error
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// Build a formula error
    pub fn formula_failed(formula: &'static str, reason: impl Into<String>) -> Self {
        AppError::Analysis(AnalysisError::Formula {
            formula,
            reason: reason.into(),
        })
    }

    /// Build a parser error
    pub fn parser_failed(reason: impl Into<String>) -> Self {
        AppError::Analysis(AnalysisError::Parser {
            reason: reason.into(),
        })
    }
}

// ========== Result alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_document() {
        let err = AppError::Extraction(ExtractionError::MissingPart {
            path: "A.docx".to_string(),
            part: "word/document.xml".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "extraction error: A.docx has no word/document.xml part"
        );
    }

    #[test]
    fn env_parse_error_mentions_value() {
        let err = ConfigError::EnvVarParseFailed {
            var_name: "READABILITY_SKIP_FAILED".to_string(),
            value: "maybe".to_string(),
            expected_type: "bool".to_string(),
        };
        assert!(err.to_string().contains("'maybe'"));
    }
}
