// src/extractors/patterns.rs
//
// Regexes shared by the note locator, the period resolver and the line parser.
use once_cell::sync::Lazy;
use regex::Regex;

const DAY_MONTH: &str = concat!(
    r"\d{1,2}\s+(?:Januari|Februari|Maret|April|Mei|Juni|Juli|Agustus|September|Oktober|November|Desember",
    r"|January|February|March|April|May|June|July|August|September|October|November|December)",
);

// --- Note boundaries ---
/// Heading of the cash note, e.g. "5. Kas dan Setara Kas". Group 1 is the note number.
pub static NOTE_HEAD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n?\s*(\d+)\.\s*Kas\s+dan\s+Setara\s+Kas").expect("Failed to compile NOTE_HEAD_RE")
});

/// Any numbered note heading at the start of a line. Group 1 is the note number.
pub static NEXT_NOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(\d+)\s*\.\s+").expect("Failed to compile NEXT_NOTE_RE")
});

// --- Periods ---
pub static DATE_FULL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i){}\s+\d{{4}}", DAY_MONTH)).expect("Failed to compile DATE_FULL_RE")
});

/// A whole line holding only a day and month, optionally followed by a slash.
pub static DATE_HALF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^{}(?:\s*/\s*)?$", DAY_MONTH)).expect("Failed to compile DATE_HALF_RE")
});

pub static YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b20\d{2}\b").expect("Failed to compile YEAR_RE")
});

// --- Amounts ---
/// Digit groups of 1-3 separated by '.' or ',' with an optional decimal tail.
pub static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,3}(?:[.,]\d{3})*(?:[.,]\d+)?").expect("Failed to compile NUMBER_RE")
});

pub static NUMBER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}(?:[.,]\d{3})*(?:[.,]\d+)?$").expect("Failed to compile NUMBER_LINE_RE")
});

pub static PARENTHESISED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\([^)]*\)").expect("Failed to compile PARENTHESISED_RE")
});

// --- Captions ---
pub static BANK_CAPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:PT\s+)?[A-Z0-9&.'\- ()]*\bBANK\b").expect("Failed to compile BANK_CAPTION_RE")
});

pub static TOTAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:total|jumlah)\b").expect("Failed to compile TOTAL_RE")
});

/// "X, Y dan Z" enumerations, which only appear on summary rows.
pub static COMPOSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i),\s*[^,]*\bdan\b").expect("Failed to compile COMPOSITE_RE")
});

pub static LEGAL_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*\(\s*PERSERO\s*\)|\s*\bTBK\b").expect("Failed to compile LEGAL_SUFFIX_RE")
});

/// Parenthesised footnote references such as "(Catatan 30)"; names like "(Hong Kong)" are kept.
pub static NOTE_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\([^()]*\d[^()]*\)").expect("Failed to compile NOTE_REF_RE")
});

/// Amount columns (or "-" placeholders) trailing a caption. Parentheses must be balanced.
pub static TRAILING_AMOUNTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\s+(?:\(\d[\d.,]*\)|\d[\d.,]*|-))+\s*$")
        .expect("Failed to compile TRAILING_AMOUNTS_RE")
});

// --- Document level ---
pub static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)PT\s+[A-Z0-9 .,&()"'-]+?\s+Tbk"#).expect("Failed to compile COMPANY_RE")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_heading_captures_number() {
        let caps = NOTE_HEAD_RE.captures("Catatan\n 12. KAS DAN SETARA KAS\n").unwrap();
        assert_eq!(&caps[1], "12");
    }

    #[test]
    fn next_note_is_line_anchored() {
        assert!(NEXT_NOTE_RE.is_match("text\n6. Piutang usaha"));
        assert!(!NEXT_NOTE_RE.is_match("lihat Catatan 6. Piutang"));
        assert!(!NEXT_NOTE_RE.is_match("1.234.567"));
    }

    #[test]
    fn half_date_requires_whole_line() {
        assert!(DATE_HALF_RE.is_match("31 Desember /"));
        assert!(DATE_HALF_RE.is_match("31 december"));
        assert!(!DATE_HALF_RE.is_match("31 December 2023"));
    }

    #[test]
    fn number_tokens() {
        let found: Vec<&str> = NUMBER_RE.find_iter("12 1.234.567 8,900,000.50").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["12", "1.234.567", "8,900,000.50"]);
        assert!(NUMBER_LINE_RE.is_match("5.000.000"));
        assert!(!NUMBER_LINE_RE.is_match("Rp 5.000.000"));
    }

    #[test]
    fn caption_patterns() {
        assert!(BANK_CAPTION_RE.is_match("PT Bank Central Asia Tbk"));
        assert!(BANK_CAPTION_RE.is_match("BANK OF CHINA (HONG KONG)"));
        assert!(!BANK_CAPTION_RE.is_match("Deposito berjangka"));
        assert!(TOTAL_RE.is_match("Jumlah kas di bank"));
        assert!(!TOTAL_RE.is_match("Subtotals"));
        assert!(COMPOSITE_RE.is_match("Kas, bank dan deposito"));
    }

    #[test]
    fn trailing_amounts_are_stripped_but_names_are_not() {
        assert_eq!(TRAILING_AMOUNTS_RE.replace("PT BANK X 1.234 (5.678) -", ""), "PT BANK X");
        assert_eq!(TRAILING_AMOUNTS_RE.replace("PT BANK Y 500 7.000.000", ""), "PT BANK Y");
        assert_eq!(TRAILING_AMOUNTS_RE.replace("BANK 9 NUSANTARA 1.000", ""), "BANK 9 NUSANTARA");
        assert_eq!(TRAILING_AMOUNTS_RE.replace("PT BANK Z (CATATAN 30)", ""), "PT BANK Z (CATATAN 30)");
        assert_eq!(NOTE_REF_RE.replace_all("PT BANK Z (Catatan 30) 1.000", ""), "PT BANK Z 1.000");
    }
}
