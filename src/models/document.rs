use std::path::{Path, PathBuf};

/// A document discovered in the input folder, before extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// File name, used as the `BrochureID`
    pub name: String,
    pub path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A document's identifier and its extracted plain text
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
