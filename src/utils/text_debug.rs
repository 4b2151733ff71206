// src/utils/text_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::utils::error::StorageError;
use regex::Regex;

/// Wraps every highlighted byte range of `text` in `[[kind>>` ... `<<kind]]` markers.
/// Overlapping ranges are dropped after the first one (by start position).
pub fn annotate_text(text: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| (h.0, std::cmp::Reverse(h.1)));

    let mut annotated = String::with_capacity(text.len() + highlights.len() * 16);
    let mut last_pos = 0;

    for (start, end, kind) in sorted_highlights {
        if start < last_pos || end > text.len() {
            continue; // overlaps the previous marker
        }
        annotated.push_str(&text[last_pos..start]);
        annotated.push_str(&format!("[[{}>>", kind));
        annotated.push_str(&text[start..end]);
        annotated.push_str(&format!("<<{}]]", kind));
        last_pos = end;
    }

    annotated.push_str(&text[last_pos..]);
    annotated
}

/// Saves an annotated dump of every page with all matches of the given patterns marked.
pub fn save_debug_pages(
    pages: &[&str],
    filename: &Path,
    patterns: &[(&Regex, &str)],
) -> Result<(), StorageError> {
    let mut file = File::create(filename)?;

    for (index, page) in pages.iter().enumerate() {
        let mut highlights = Vec::new();
        for (re, kind) in patterns {
            for mat in re.find_iter(page) {
                highlights.push((mat.start(), mat.end(), *kind));
            }
        }

        writeln!(file, "===== page {} ({} markers) =====", index + 1, highlights.len())?;
        writeln!(file, "{}", annotate_text(page, &highlights))?;
    }

    tracing::info!("Saved debug page dump to {}", filename.display());
    Ok(())
}
