// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::extractors::{NoteExtraction, NoteRow};
use crate::utils::error::StorageError;

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory like: /base_dir/<document stem>/
    fn document_dir(&self, stem: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(stem);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir)?;
        }
        Ok(target_dir)
    }

    /// Saves the extracted rows as a table, one row per record
    pub fn save_rows(&self, stem: &str, rows: &[NoteRow], format: OutputFormat) -> Result<PathBuf, StorageError> {
        let target_dir = self.document_dir(stem)?;

        let file_path = match format {
            OutputFormat::Csv => {
                let file_path = target_dir.join(format!("{}_cash_equivalents.csv", stem));
                let mut writer = csv::Writer::from_path(&file_path)?;
                if rows.is_empty() {
                    // serde only writes the header together with the first record
                    writer.write_record(["period", "bank", "currency", "amount", "placement_type", "company"])?;
                }
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
                file_path
            }
            OutputFormat::Json => {
                let file_path = target_dir.join(format!("{}_cash_equivalents.json", stem));
                let body = serde_json::to_string_pretty(rows)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                fs::write(&file_path, body)?;
                file_path
            }
        };

        tracing::info!("Saved {} rows to {}", rows.len(), file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the extraction in JSON format
    pub fn save_metadata(
        &self,
        stem: &str,
        source: &Path,
        page_count: usize,
        extraction: &NoteExtraction,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.document_dir(stem)?;
        let file_path = target_dir.join(format!("{}_meta.json", stem));

        let metadata = serde_json::json!({
            "source": source.display().to_string(),
            "company": extraction.company,
            "page_count": page_count,
            "note_found": extraction.span.is_some(),
            "note_number": extraction.span.as_ref().map(|s| s.note_number.clone()),
            "note_pages": extraction.span.as_ref().map(|s| [s.first_page + 1, s.last_page + 1]),
            "periods": extraction.periods,
            "record_count": extraction.records.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves the raw text of the located note, for checking what the parser saw
    pub fn save_note_text(&self, stem: &str, text: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.document_dir(stem)?.join(format!("{}_note.txt", stem));
        fs::write(&file_path, text)?;
        tracing::info!("Saved note text to {}", file_path.display());
        Ok(file_path)
    }

    /// Path for debug artifacts of a document
    pub fn debug_path(&self, stem: &str, name: &str) -> Result<PathBuf, StorageError> {
        let debug_dir = self.document_dir(stem)?.join("debug");
        fs::create_dir_all(&debug_dir)?;
        Ok(debug_dir.join(name))
    }
}
