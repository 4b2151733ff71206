// src/extractors/mod.rs
pub mod company;
pub mod dedup;
pub mod lines;
pub mod note;
pub mod patterns;
pub mod period;
pub mod record;

pub use note::NoteSpan;
pub use record::{CashRecord, NoteRow};

use crate::config::ParserConfig;
use crate::source::RawPage;
use lines::NoteParser;

/// Everything pulled out of one document.
#[derive(Debug, Clone)]
pub struct NoteExtraction {
    pub company: String,
    /// `None` when no page carries the cash note heading.
    pub span: Option<NoteSpan>,
    pub periods: Vec<String>,
    pub records: Vec<CashRecord>,
}

impl NoteExtraction {
    pub fn rows(&self) -> Vec<NoteRow> {
        record::assemble(&self.records, &self.company)
    }
}

/// Locates the cash note in a document and parses it into records.
pub struct CashNoteExtractor {
    config: ParserConfig,
}

impl CashNoteExtractor {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn extract(&self, pages: &[RawPage]) -> NoteExtraction {
        let company = pages
            .first()
            .map(|p| company::company_name(&p.text))
            .unwrap_or_else(|| company::UNKNOWN_COMPANY.to_string());

        let Some(span) = note::extract_note_text(pages) else {
            tracing::warn!("No 'Kas dan Setara Kas' note found in {} pages", pages.len());
            return NoteExtraction { company, span: None, periods: Vec::new(), records: Vec::new() };
        };

        let (periods, records) = NoteParser::new(&self.config).parse_note(&span.text);
        tracing::info!(
            "Note {} ({} pages): {} records over periods {:?}",
            span.note_number,
            span.last_page - span.first_page + 1,
            records.len(),
            periods
        );

        NoteExtraction { company, span: Some(span), periods, records }
    }
}
