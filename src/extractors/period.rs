// src/extractors/period.rs
use crate::config::ParserConfig;
use crate::extractors::patterns::{DATE_FULL_RE, DATE_HALF_RE, YEAR_RE};
use crate::utils::text::{non_empty_lines, title_case};

/// Period label used when the note names no usable date.
pub const FALLBACK_PERIOD: &str = "Current";

/// Works out the one or two reporting periods a note is laid out in.
///
/// Comparative notes either print both dates in full ("31 Desember 2023" / "31 Desember 2022")
/// or print a day-month header once with the years on a separate header line. Full dates win;
/// half dates plus years are only searched in the first `half_date_window` lines.
pub fn build_periods(text: &str, config: &ParserConfig) -> Vec<String> {
    let mut full: Vec<String> = Vec::new();
    for m in DATE_FULL_RE.find_iter(text) {
        let date = title_case(m.as_str());
        if !full.contains(&date) {
            full.push(date);
        }
        if full.len() == 2 {
            tracing::debug!("Periods from full dates: {:?}", full);
            return full;
        }
    }

    let mut halves: Vec<String> = Vec::new();
    let mut years: Vec<&str> = Vec::new();
    for line in non_empty_lines(text).into_iter().take(config.half_date_window) {
        if let Some(m) = DATE_HALF_RE.find(line) {
            halves.push(title_case(m.as_str().replace('/', "").trim()));
        }
        years.extend(YEAR_RE.find_iter(line).map(|y| y.as_str()));
    }

    if let (Some(first_half), Some(first_year)) = (halves.first(), years.first()) {
        let second_half = halves.get(1).unwrap_or(first_half);
        let second_year = years.get(1).unwrap_or(first_year);
        let periods = vec![
            format!("{} {}", first_half, first_year),
            format!("{} {}", second_half, second_year),
        ];
        tracing::debug!("Periods from half dates and year headers: {:?}", periods);
        return periods;
    }

    tracing::debug!("No reporting date found, using '{}'", FALLBACK_PERIOD);
    vec![FALLBACK_PERIOD.to_string()]
}
