// src/source/pdf.rs
use std::path::{Path, PathBuf};
use lopdf::Document;
use crate::source::{PageTextSource, RawPage};
use crate::utils::error::SourceError;

/// Reads page text straight out of a PDF with `lopdf`.
pub struct PdfSource {
    path: PathBuf,
}

impl PdfSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl PageTextSource for PdfSource {
    fn pages(&self) -> Result<Vec<RawPage>, SourceError> {
        let path_str = self.path.display().to_string();
        tracing::info!("Loading PDF: {}", path_str);

        let doc = Document::load(&self.path).map_err(|e| SourceError::PdfLoad {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(SourceError::Empty(path_str));
        }

        let mut pages = Vec::with_capacity(page_numbers.len());
        for (index, page_number) in page_numbers.into_iter().enumerate() {
            let text = doc.extract_text(&[page_number]).map_err(|e| SourceError::PageText {
                page: page_number,
                reason: e.to_string(),
            })?;
            tracing::trace!("Page {} yielded {} bytes of text", page_number, text.len());
            pages.push(RawPage::new(index, text));
        }

        tracing::debug!("Extracted text from {} pages of {}", pages.len(), path_str);
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_load_error() {
        let source = PdfSource::new("/nonexistent/kas_extractor/report.pdf");
        assert!(matches!(source.pages(), Err(SourceError::PdfLoad { .. })));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let path = std::env::temp_dir().join(format!("kas_extractor_garbage_{}.pdf", std::process::id()));
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let result = PdfSource::new(&path).pages();
        assert!(matches!(result, Err(SourceError::PdfLoad { .. })));

        std::fs::remove_file(&path).ok();
    }
}
