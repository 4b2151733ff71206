// src/source/mod.rs
pub mod pdf;
pub mod text;

use std::path::Path;
use crate::utils::error::SourceError;

pub use pdf::PdfSource;
pub use text::TextSource;

/// Plain text of one document page. Pages are kept in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub index: usize,
    pub text: String,
}

impl RawPage {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self { index, text: text.into() }
    }
}

/// Anything that can hand out the per-page text of a document.
pub trait PageTextSource {
    fn pages(&self) -> Result<Vec<RawPage>, SourceError>;
}

/// How an input path should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputKind {
    /// Decide from the file extension
    Auto,
    Pdf,
    /// Plain text with pages separated by form feeds (pdftotext output)
    Text,
}

/// Picks the page source for `path`.
pub fn open_source(path: &Path, kind: InputKind) -> Result<Box<dyn PageTextSource>, SourceError> {
    let kind = match kind {
        InputKind::Auto => {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase());
            match ext.as_deref() {
                Some("pdf") => InputKind::Pdf,
                Some("txt") | Some("text") => InputKind::Text,
                _ => return Err(SourceError::Unsupported(path.display().to_string())),
            }
        }
        explicit => explicit,
    };
    tracing::debug!("Reading {} as {:?}", path.display(), kind);

    Ok(match kind {
        InputKind::Pdf => Box::new(PdfSource::new(path)),
        _ => Box::new(TextSource::new(path)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_kind_rejects_unknown_extensions() {
        let result = open_source(Path::new("report.docx"), InputKind::Auto);
        assert!(matches!(result, Err(SourceError::Unsupported(_))));
    }

    #[test]
    fn explicit_kind_ignores_extension() {
        assert!(open_source(Path::new("report.dump"), InputKind::Text).is_ok());
        assert!(open_source(Path::new("REPORT.PDF"), InputKind::Auto).is_ok());
    }
}
