//! Document text extraction service - service layer

use crate::error::{AppError, AppResult, ExtractionError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Turns a document file into plain text
pub trait DocumentExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> AppResult<String>;
}

/// Extracts the body paragraphs of an Office Open XML word-processing document.
///
/// Paragraphs are joined with `\n`. Tables, text boxes, headers, footers and
/// footnotes are not part of the body paragraph stream and are skipped.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor;

const DOCUMENT_PART: &str = "word/document.xml";

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Paragraph texts of a `word/document.xml` part.
    ///
    /// Tables and text boxes are skipped whole, so their paragraphs never mix
    /// with the surrounding body paragraph.
    pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_paragraph = false;
        let mut in_text = false;
        let mut in_properties = false;
        let mut skip_depth = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(e) if is_skipped_subtree(e.name().as_ref()) => skip_depth += 1,
                Event::End(e) if is_skipped_subtree(e.name().as_ref()) => {
                    skip_depth = skip_depth.saturating_sub(1)
                }
                Event::Eof => break,
                _ if skip_depth > 0 => {}
                Event::Start(e) => match e.name().as_ref() {
                    b"w:p" => {
                        in_paragraph = true;
                        current.clear();
                    }
                    b"w:t" if in_paragraph => in_text = true,
                    b"w:pPr" => in_properties = true,
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:p" => paragraphs.push(String::new()),
                    b"w:tab" if in_paragraph && !in_properties => current.push('\t'),
                    b"w:cr" if in_paragraph && !in_properties => current.push('\n'),
                    b"w:br" if in_paragraph && !in_properties && is_line_break(&e)? => {
                        current.push('\n')
                    }
                    _ => {}
                },
                Event::Text(t) if in_text => current.push_str(&t.unescape()?),
                Event::CData(t) if in_text => {
                    current.push_str(&String::from_utf8_lossy(&t.into_inner()))
                }
                Event::End(e) => match e.name().as_ref() {
                    b"w:p" if in_paragraph => {
                        paragraphs.push(std::mem::take(&mut current));
                        in_paragraph = false;
                    }
                    b"w:t" => in_text = false,
                    b"w:pPr" => in_properties = false,
                    _ => {}
                },
                _ => {}
            }
        }

        Ok(paragraphs)
    }
}

/// Elements whose whole content stays out of the body paragraph stream:
/// tables, text-box content, and the legacy copy of alternate content.
fn is_skipped_subtree(name: &[u8]) -> bool {
    matches!(name, b"w:tbl" | b"w:txbxContent" | b"mc:Fallback")
}

/// `w:br` without a type, or of type `textWrapping`, is a line break;
/// page and column breaks add nothing.
fn is_line_break(element: &BytesStart<'_>) -> Result<bool, quick_xml::Error> {
    Ok(match element.try_get_attribute("w:type")? {
        None => true,
        Some(kind) => kind.value.as_ref() == b"textWrapping",
    })
}

impl DocumentExtractor for DocxExtractor {
    fn extract_text(&self, path: &Path) -> AppResult<String> {
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|source| AppError::open_failed(&path_str, source))?;
        let mut archive = zip::ZipArchive::new(file).map_err(|source| ExtractionError::Archive {
            path: path_str.clone(),
            source,
        })?;

        let mut xml = String::new();
        {
            let mut part = archive.by_name(DOCUMENT_PART).map_err(|source| match source {
                zip::result::ZipError::FileNotFound => ExtractionError::MissingPart {
                    path: path_str.clone(),
                    part: DOCUMENT_PART.to_string(),
                },
                source => ExtractionError::Archive {
                    path: path_str.clone(),
                    source,
                },
            })?;
            part.read_to_string(&mut xml)
                .map_err(|source| AppError::open_failed(&path_str, source))?;
        }

        let paragraphs = Self::paragraphs_from_xml(&xml).map_err(|source| ExtractionError::Xml {
            path: path_str.clone(),
            source,
        })?;

        debug!("{}: {} paragraphs extracted", path_str, paragraphs.len());
        Ok(paragraphs.join("\n"))
    }
}
