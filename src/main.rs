// src/main.rs
mod config;
mod extractors;
mod source;
mod storage;
mod utils;

use std::path::{Path, PathBuf};
use clap::Parser;
use config::ParserConfig;
use extractors::patterns::{BANK_CAPTION_RE, DATE_FULL_RE, NEXT_NOTE_RE, NOTE_HEAD_RE, TOTAL_RE};
use extractors::CashNoteExtractor;
use source::InputKind;
use storage::{OutputFormat, StorageManager};
use utils::AppError;

/// Extracts the "Kas dan Setara Kas" (cash and cash equivalents) note from financial statements
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Financial statement files (PDF, or text dumps with form-feed page breaks)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// How to read the inputs
    #[arg(long, value_enum, default_value = "auto")]
    input_kind: InputKind,

    /// Output directory for extracted tables
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Table format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Parser config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Smallest number treated as an amount (overrides the config file)
    #[arg(long)]
    min_amount: Option<u64>,

    /// Debug mode - save the note text and an annotated page dump
    #[arg(short, long)]
    debug: bool,
}

fn load_config(args: &Args) -> Result<ParserConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => ParserConfig::load(path)?,
        None => ParserConfig::default(),
    };
    if let Some(min_amount) = args.min_amount {
        tracing::debug!("Setting min_amount to {} from command-line argument", min_amount);
        config.min_amount = min_amount;
    }
    config.validate()?;
    Ok(config)
}

fn document_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Runs one document through the extractor and writes its outputs. Returns the row count.
fn process_document(
    path: &Path,
    args: &Args,
    extractor: &CashNoteExtractor,
    storage: &StorageManager,
) -> Result<usize, AppError> {
    let pages = source::open_source(path, args.input_kind)?.pages()?;
    tracing::info!("Read {} pages from {}", pages.len(), path.display());

    let stem = document_stem(path);
    let extraction = extractor.extract(&pages);

    if args.debug {
        let page_texts: Vec<&str> = pages.iter().map(|p| p.text.as_str()).collect();
        let debug_patterns = [
            (&*NOTE_HEAD_RE, "note"),
            (&*NEXT_NOTE_RE, "heading"),
            (&*DATE_FULL_RE, "date"),
            (&*BANK_CAPTION_RE, "bank"),
            (&*TOTAL_RE, "total"),
        ];
        let dump_path = storage.debug_path(&stem, "pages_annotated.txt")?;
        if let Err(e) = utils::text_debug::save_debug_pages(&page_texts, &dump_path, &debug_patterns) {
            tracing::warn!("Failed to create debug page dump: {}", e);
        }
        if let Some(span) = &extraction.span {
            storage.save_note_text(&stem, &span.text)?;
        }
    }

    let rows = extraction.rows();
    storage.save_rows(&stem, &rows, args.format)?;
    storage.save_metadata(&stem, path, pages.len(), &extraction)?;
    Ok(rows.len())
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Parser configuration and storage
    let config = load_config(&args)?;
    let storage = StorageManager::new(&args.output_dir)?;
    let extractor = CashNoteExtractor::new(config);

    // 4. Process each document
    let mut success_count = 0;
    let mut failure_count = 0;

    for path in &args.inputs {
        tracing::info!("Processing {}", path.display());
        match process_document(path, &args, &extractor, &storage) {
            Ok(rows) => {
                tracing::info!("Extracted {} rows from {}", rows, path.display());
                success_count += 1;
            }
            Err(e) => {
                tracing::error!("Failed to process {}: {}", path.display(), e);
                failure_count += 1;
            }
        }
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", success_count, failure_count);

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!("Failed to process any of {} documents", failure_count)));
    }

    Ok(())
}
