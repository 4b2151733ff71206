// src/utils/error.rs
use thiserror::Error;

// Errors raised by the page text collaborators (PDF / text dumps)
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load PDF {path}: {reason}")]
    PdfLoad { path: String, reason: String },

    #[error("Failed to extract text from page {page}: {reason}")]
    PageText { page: u32, reason: String },

    #[error("Document has no pages: {0}")]
    Empty(String),

    #[error("Unsupported input type: {0}")]
    Unsupported(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Input rejected: {0}")]
    Source(#[from] SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
