// src/extractors/note.rs
use crate::extractors::patterns::{NEXT_NOTE_RE, NOTE_HEAD_RE};
use crate::source::RawPage;

/// Text of the cash note, from its heading up to the next note's heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSpan {
    pub note_number: String,
    pub text: String,
    pub first_page: usize,
    pub last_page: usize,
}

fn same_note(a: &str, b: &str) -> bool {
    a.trim_start_matches('0') == b.trim_start_matches('0')
}

/// Byte offset of the first line-anchored note heading whose number differs from `note_number`.
fn next_note_offset(text: &str, note_number: &str) -> Option<usize> {
    NEXT_NOTE_RE.captures_iter(text).find_map(|caps| {
        let heading = caps.get(0)?;
        if same_note(&caps[1], note_number) {
            tracing::trace!("Heading '{}' repeats note {}, continuing", heading.as_str().trim(), note_number);
            None
        } else {
            Some(heading.start())
        }
    })
}

/// Finds the "Kas dan Setara Kas" note and returns its text, or `None` if no page carries the heading.
///
/// Capture starts at the heading on the first matching page and runs across pages until a
/// heading with a different note number begins. Repeated headings with the same number
/// (continued notes) do not end the span.
pub fn extract_note_text(pages: &[RawPage]) -> Option<NoteSpan> {
    let mut span: Option<NoteSpan> = None;
    let mut buf: Vec<&str> = Vec::new();

    for page in pages {
        let text = match &mut span {
            None => {
                let Some(caps) = NOTE_HEAD_RE.captures(&page.text) else { continue };
                let (Some(head), Some(number)) = (caps.get(0), caps.get(1)) else { continue };
                tracing::debug!("Found note {} heading on page {}", number.as_str(), page.index + 1);
                span = Some(NoteSpan {
                    note_number: number.as_str().to_string(),
                    text: String::new(),
                    first_page: page.index,
                    last_page: page.index,
                });
                &page.text[head.start()..]
            }
            Some(current) => {
                current.last_page = page.index;
                page.text.as_str()
            }
        };

        let note_number = span.as_ref().map(|s| s.note_number.as_str()).unwrap_or_default();
        if let Some(end) = next_note_offset(text, note_number) {
            tracing::debug!("Next note starts on page {}, closing note {}", page.index + 1, note_number);
            buf.push(&text[..end]);
            break;
        }
        buf.push(text);
    }

    let mut span = span?;
    span.text = buf.join("\n");
    tracing::debug!(
        "Note {} spans pages {}-{} ({} bytes)",
        span.note_number,
        span.first_page + 1,
        span.last_page + 1,
        span.text.len()
    );
    Some(span)
}
