use crate::error::FileError;
use crate::models::document::DocumentFile;
use anyhow::Result;
use std::path::Path;
use tokio::fs;

/// List the documents in `folder_path` whose extension matches `extension`
/// (case-insensitive, without the dot).
///
/// Directories and other files are ignored. Without `sort`, entries come back
/// in filesystem enumeration order, which differs between platforms.
pub async fn list_documents(
    folder_path: &Path,
    extension: &str,
    sort: bool,
) -> Result<Vec<DocumentFile>> {
    if !fs::try_exists(folder_path).await.unwrap_or(false) {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.display().to_string(),
        }
        .into());
    }

    let read_dir_failed = |source: std::io::Error| FileError::ReadDirFailed {
        path: folder_path.display().to_string(),
        source,
    };

    let mut entries = fs::read_dir(folder_path).await.map_err(read_dir_failed)?;
    let mut documents = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_failed)? {
        let path = entry.path();
        if !has_extension(&path, extension) {
            continue;
        }
        if entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        tracing::debug!("found document: {}", path.display());
        documents.push(DocumentFile::new(path));
    }

    if sort {
        documents.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(documents)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension.trim_start_matches('.')))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn picks_matching_files_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.docx", "a.DOCX", "notes.txt", "c.docx.bak"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("folder.docx")).unwrap();

        let docs = list_documents(dir.path(), "docx", true).await.unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.DOCX", "b.docx"]);
    }

    #[tokio::test]
    async fn missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_documents(&dir.path().join("nope"), "docx", true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("directory not found"));
    }

    #[tokio::test]
    async fn empty_folder_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let docs = list_documents(dir.path(), "docx", false).await.unwrap();
        assert!(docs.is_empty());
    }
}
