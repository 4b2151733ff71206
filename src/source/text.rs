// src/source/text.rs
use std::path::{Path, PathBuf};
use crate::source::{PageTextSource, RawPage};
use crate::utils::error::SourceError;

const FORM_FEED: char = '\u{0c}';

/// Reads a plain-text dump where pages are separated by form feeds, as written by `pdftotext`.
pub struct TextSource {
    path: PathBuf,
}

impl TextSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

/// Splits a text dump into pages. A trailing form feed does not start an extra page.
pub fn split_pages(dump: &str) -> Vec<RawPage> {
    let body = dump.strip_suffix(FORM_FEED).unwrap_or(dump);
    body.split(FORM_FEED)
        .enumerate()
        .map(|(index, text)| RawPage::new(index, text))
        .collect()
}

impl PageTextSource for TextSource {
    fn pages(&self) -> Result<Vec<RawPage>, SourceError> {
        let bytes = std::fs::read(&self.path)?;
        // pdftotext can emit invalid UTF-8 in ligatures
        let dump = String::from_utf8_lossy(&bytes);
        if dump.trim().is_empty() {
            return Err(SourceError::Empty(self.path.display().to_string()));
        }

        let pages = split_pages(&dump);
        tracing::debug!("Read {} pages from {}", pages.len(), self.path.display());
        Ok(pages)
    }
}
