// src/extractors/lines.rs
//
// Row-oriented parser for the note body. Lines are folded through a small state machine:
// caption lines open a pending row, standalone numbers on the following lines fill it,
// and the next different caption (or the second amount) closes it.
use crate::config::{CurrencyHint, ParserConfig};
use crate::extractors::dedup::dedup_records;
use crate::extractors::patterns::{
    BANK_CAPTION_RE, COMPOSITE_RE, LEGAL_SUFFIX_RE, NOTE_REF_RE, NUMBER_LINE_RE, NUMBER_RE,
    PARENTHESISED_RE, TOTAL_RE, TRAILING_AMOUNTS_RE,
};
use crate::extractors::period::build_periods;
use crate::extractors::record::{CashRecord, PlacementType};
use crate::utils::text::non_empty_lines;

/// Amounts per caption: one per reporting period.
const MAX_AMOUNTS: usize = 2;

pub const TOTAL_LABEL: &str = "TOTAL";

/// What a single line contributes to the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Institution or summary row; carries the derived label.
    Caption(String),
    /// A line holding nothing but a number token. `None` when it cannot be read as an integer.
    Number(Option<u64>),
    Other,
}

pub fn is_caption(line: &str) -> bool {
    BANK_CAPTION_RE.is_match(line) || is_total(line)
}

fn is_total(line: &str) -> bool {
    TOTAL_RE.is_match(line) || COMPOSITE_RE.is_match(line)
}

/// Label of a caption line: "TOTAL" for summary rows, otherwise the upper-cased
/// institution name without "(Persero)", "Tbk", footnote references or trailing amount columns.
pub fn caption_label(line: &str) -> String {
    if is_total(line) {
        return TOTAL_LABEL.to_string();
    }
    let name = LEGAL_SUFFIX_RE.replace_all(line, "");
    let name = NOTE_REF_RE.replace_all(&name, "");
    let name = TRAILING_AMOUNTS_RE.replace(&name, "");
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(|c: char| c == ',' || c == '.')
        .to_uppercase()
}

pub fn classify(line: &str) -> LineKind {
    if NUMBER_LINE_RE.is_match(line) {
        LineKind::Number(parse_amount(line))
    } else if is_caption(line) {
        LineKind::Caption(caption_label(line))
    } else {
        LineKind::Other
    }
}

/// Digits of a number token as an integer; separators and decimal marks are dropped.
fn parse_amount(token: &str) -> Option<u64> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Up to two amounts printed on the caption line itself, ignoring parenthesised
/// footnote references such as "(Catatan 30)".
pub fn inline_amounts(line: &str, min_amount: u64) -> Vec<u64> {
    let clean = PARENTHESISED_RE.replace_all(line, "");
    NUMBER_RE
        .find_iter(&clean)
        .filter_map(|m| parse_amount(m.as_str()))
        .filter(|v| *v >= min_amount)
        .take(MAX_AMOUNTS)
        .collect()
}

/// Currency and placement type in force at the current line. Both persist until a later line changes them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StickyState {
    currency: String,
    placement: PlacementType,
}

impl StickyState {
    fn observe(&mut self, line: &str, hints: &[CurrencyHint]) {
        let low = line.to_lowercase();
        if low.contains("deposito") || low.contains("time deposit") {
            self.placement = PlacementType::TimeDeposit;
        }
        if low.contains("kas di bank") || low.contains("cash in banks") {
            self.placement = PlacementType::CashInBank;
        }
        for hint in hints {
            if low.contains(&hint.keyword.to_lowercase()) {
                self.currency = hint.iso.clone();
            }
        }
    }
}

/// A caption waiting for its amounts.
#[derive(Debug)]
struct PendingCaption {
    label: String,
    currency: String,
    placement: PlacementType,
    amounts: Vec<u64>,
}

impl PendingCaption {
    fn is_full(&self) -> bool {
        self.amounts.len() >= MAX_AMOUNTS
    }

    /// Pairs amount `i` with period `i`, reusing the first period when only one exists.
    fn emit(self, periods: &[String], out: &mut Vec<CashRecord>) {
        tracing::trace!("Caption '{}' -> {:?}", self.label, self.amounts);
        for (idx, amount) in self.amounts.into_iter().take(MAX_AMOUNTS).enumerate() {
            let period = periods.get(idx).or_else(|| periods.first());
            out.push(CashRecord {
                period: period.cloned().unwrap_or_default(),
                bank: self.label.clone(),
                currency: self.currency.clone(),
                amount,
                placement_type: self.placement,
            });
        }
    }
}

enum ScanState {
    SeekingCaption,
    CollectingAmounts(PendingCaption),
}

pub struct NoteParser<'a> {
    config: &'a ParserConfig,
}

impl<'a> NoteParser<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Self { config }
    }

    /// Associates amounts with caption lines. The result may hold duplicates.
    pub fn associate(&self, lines: &[&str], periods: &[String]) -> Vec<CashRecord> {
        let mut sticky = StickyState {
            currency: self.config.default_currency.clone(),
            placement: PlacementType::CashInBank,
        };
        let mut records = Vec::new();
        let mut state = ScanState::SeekingCaption;

        for line in lines {
            sticky.observe(line, &self.config.currency_hints);
            let kind = classify(line);

            state = match state {
                ScanState::SeekingCaption => self.open_caption(line, kind, &sticky, periods, &mut records),
                ScanState::CollectingAmounts(mut pending) => match kind {
                    LineKind::Number(value) => {
                        if let Some(v) = value.filter(|v| *v >= self.config.min_amount) {
                            pending.amounts.push(v);
                        }
                        if pending.is_full() {
                            pending.emit(periods, &mut records);
                            ScanState::SeekingCaption
                        } else {
                            ScanState::CollectingAmounts(pending)
                        }
                    }
                    LineKind::Caption(ref label)
                        if *label == pending.label && inline_amounts(line, self.config.min_amount).is_empty() =>
                    {
                        tracing::trace!("Caption '{}' wraps onto the next line", label);
                        ScanState::CollectingAmounts(pending)
                    }
                    LineKind::Caption(_) => {
                        pending.emit(periods, &mut records);
                        self.open_caption(line, kind, &sticky, periods, &mut records)
                    }
                    LineKind::Other => ScanState::CollectingAmounts(pending),
                },
            };
        }

        if let ScanState::CollectingAmounts(pending) = state {
            pending.emit(periods, &mut records);
        }
        records
    }

    fn open_caption(
        &self,
        line: &str,
        kind: LineKind,
        sticky: &StickyState,
        periods: &[String],
        records: &mut Vec<CashRecord>,
    ) -> ScanState {
        let LineKind::Caption(label) = kind else {
            return ScanState::SeekingCaption;
        };
        let pending = PendingCaption {
            label,
            currency: sticky.currency.clone(),
            placement: sticky.placement,
            amounts: inline_amounts(line, self.config.min_amount),
        };
        if pending.is_full() {
            pending.emit(periods, records);
            ScanState::SeekingCaption
        } else {
            ScanState::CollectingAmounts(pending)
        }
    }

    /// Full note parse: periods, amount association, then deduplication.
    pub fn parse_note(&self, text: &str) -> (Vec<String>, Vec<CashRecord>) {
        let periods = build_periods(text, self.config);
        let lines = non_empty_lines(text);
        let records = dedup_records(self.associate(&lines, &periods));
        tracing::debug!("Parsed {} lines into {} records", lines.len(), records.len());
        (periods, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods() -> Vec<String> {
        vec!["31 December 2023".to_string(), "31 December 2022".to_string()]
    }

    fn run(lines: &[&str]) -> Vec<CashRecord> {
        let config = ParserConfig::default();
        NoteParser::new(&config).associate(lines, &periods())
    }

    #[test]
    fn caption_with_inline_amounts() {
        let records = run(&["PT BANK MANDIRI (PERSERO) TBK 1.234.567 2.345.678"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].bank, "PT BANK MANDIRI");
        assert_eq!(records[0].amount, 1_234_567);
        assert_eq!(records[0].period, "31 December 2023");
        assert_eq!(records[1].amount, 2_345_678);
        assert_eq!(records[1].period, "31 December 2022");
        assert!(records.iter().all(|r| r.currency == "IDR" && r.placement_type == PlacementType::CashInBank));
    }

    #[test]
    fn total_with_amounts_on_following_lines() {
        let records = run(&["TOTAL", "5.000.000", "6.000.000", "7.000.000"]);
        let got: Vec<(&str, u64)> = records.iter().map(|r| (r.bank.as_str(), r.amount)).collect();
        assert_eq!(got, vec![("TOTAL", 5_000_000), ("TOTAL", 6_000_000)]);
    }

    #[test]
    fn wrapped_caption_is_one_logical_row() {
        let records = run(&["PT Bank Central Asia Tbk", "PT BANK CENTRAL ASIA,", "1.000.000", "2.000.000"]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.bank == "PT BANK CENTRAL ASIA"));
        assert_eq!(records[1].period, "31 December 2022");
    }

    #[test]
    fn different_caption_ends_lookahead() {
        let records = run(&["PT Bank A", "1.000.000", "PT Bank B", "2.000.000", "3.000.000"]);
        let got: Vec<(&str, u64, &str)> =
            records.iter().map(|r| (r.bank.as_str(), r.amount, r.period.as_str())).collect();
        assert_eq!(
            got,
            vec![
                ("PT BANK A", 1_000_000, "31 December 2023"),
                ("PT BANK B", 2_000_000, "31 December 2023"),
                ("PT BANK B", 3_000_000, "31 December 2022"),
            ]
        );
    }

    #[test]
    fn small_numbers_and_parenthesised_refs_are_not_amounts() {
        let records = run(&["PT Bank A (Catatan 30) 1.500 12", "7", "2.500"]);
        let amounts: Vec<u64> = records.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![1_500, 2_500]);
        assert!(records.iter().all(|r| r.amount >= 1_000));
    }

    #[test]
    fn sticky_currency_and_placement() {
        let records = run(&[
            "Kas di bank",
            "Rupiah",
            "PT Bank A 1.000 2.000",
            "Dolar AS",
            "PT Bank B 3.000 4.000",
            "Deposito berjangka",
            "PT Bank C 5.000 6.000",
        ]);
        let got: Vec<(&str, &str, PlacementType)> =
            records.iter().map(|r| (r.bank.as_str(), r.currency.as_str(), r.placement_type)).collect();
        assert_eq!(
            got,
            vec![
                ("PT BANK A", "IDR", PlacementType::CashInBank),
                ("PT BANK A", "IDR", PlacementType::CashInBank),
                ("PT BANK B", "USD", PlacementType::CashInBank),
                ("PT BANK B", "USD", PlacementType::CashInBank),
                ("PT BANK C", "USD", PlacementType::TimeDeposit),
                ("PT BANK C", "USD", PlacementType::TimeDeposit),
            ]
        );
    }

    #[test]
    fn later_currency_hint_wins_on_the_same_line() {
        let records = run(&["Yen dan euro", "PT Bank A 1.000 2.000"]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.currency == "EUR"));
    }

    #[test]
    fn composite_and_jumlah_lines_are_totals() {
        assert_eq!(classify("Jumlah kas di bank"), LineKind::Caption(TOTAL_LABEL.to_string()));
        assert_eq!(classify("Kas, bank dan deposito"), LineKind::Caption(TOTAL_LABEL.to_string()));
        assert_eq!(classify("1.234"), LineKind::Number(Some(1_234)));
        assert_eq!(classify("Pihak ketiga"), LineKind::Other);
    }

    #[test]
    fn single_period_is_reused_for_second_amount() {
        let config = ParserConfig::default();
        let records = NoteParser::new(&config).associate(&["TOTAL 1.000 2.000"], &["Current".to_string()]);
        assert!(records.iter().all(|r| r.period == "Current"));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn repeated_caption_with_own_amounts_opens_a_new_row() {
        let records = run(&[
            "PT Bank Mandiri (Persero) Tbk 1.500.000 -",
            "Dolar AS",
            "PT Bank Mandiri (Persero) Tbk 2.000.000 3.000.000",
        ]);
        let got: Vec<(&str, u64, &str, &str)> = records
            .iter()
            .map(|r| (r.bank.as_str(), r.amount, r.currency.as_str(), r.period.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("PT BANK MANDIRI", 1_500_000, "IDR", "31 December 2023"),
                ("PT BANK MANDIRI", 2_000_000, "USD", "31 December 2023"),
                ("PT BANK MANDIRI", 3_000_000, "USD", "31 December 2022"),
            ]
        );
    }

    #[test]
    fn footnote_references_are_dropped_from_labels() {
        assert_eq!(caption_label("PT Bank Rakyat Indonesia (Persero) Tbk (Catatan 30)"), "PT BANK RAKYAT INDONESIA");
        assert_eq!(caption_label("PT Bank Mandiri (Persero) Tbk (Note 5) 1.000 2.000"), "PT BANK MANDIRI");
        assert_eq!(caption_label("Bank of China (Hong Kong) Ltd 1.000"), "BANK OF CHINA (HONG KONG) LTD");
    }

    #[test]
    fn caption_without_amounts_emits_nothing() {
        assert!(run(&["PT Bank A", "Pihak ketiga", "PT Bank B"]).is_empty());
    }

    #[test]
    fn parse_note_resolves_periods_and_dedups() {
        let text = "\
5. Kas dan Setara Kas
31 Desember 2023 31 Desember 2022
Kas di bank
Rupiah
PT Bank Mandiri (Persero) Tbk 1.234.567 2.345.678
PT Bank Mandiri (Persero) Tbk 1.234.567 2.345.678
Jumlah
1.234.567
2.345.678
";
        let config = ParserConfig::default();
        let (periods, records) = NoteParser::new(&config).parse_note(text);
        assert_eq!(periods, vec!["31 Desember 2023", "31 Desember 2022"]);
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].bank, "PT BANK MANDIRI");
        assert_eq!(records[2].bank, TOTAL_LABEL);
        assert_eq!(records[3].period, "31 Desember 2022");
    }
}
