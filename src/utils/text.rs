// src/utils/text.rs

/// Title-cases `s` word by word: a letter is upper-cased when the character
/// before it is not a cased letter, and lower-cased otherwise.
///
/// "31 DESEMBER 2023" -> "31 Desember 2023", "PT BANK (PERSERO) TBK" -> "Pt Bank (Persero) Tbk".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && !prev_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

/// Non-empty trimmed lines, in document order.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_follows_letter_runs() {
        assert_eq!(title_case("31 DESEMBER 2023"), "31 Desember 2023");
        assert_eq!(title_case("31 december 2022"), "31 December 2022");
        assert_eq!(title_case("PT BANK MANDIRI (PERSERO) TBK"), "Pt Bank Mandiri (Persero) Tbk");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }

    #[test]
    fn non_empty_lines_trims_and_drops_blanks() {
        let lines = non_empty_lines("  a  \n\n \t\nb\r\n");
        assert_eq!(lines, vec!["a", "b"]);
    }
}
