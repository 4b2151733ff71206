// src/extractors/company.rs
use crate::extractors::patterns::COMPANY_RE;
use crate::utils::text::title_case;

pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Reads the "PT ... Tbk" company name off the first page of the report.
pub fn company_name(first_page: &str) -> String {
    match COMPANY_RE.find(first_page) {
        Some(m) => {
            let name = title_case(m.as_str()).trim().to_string();
            tracing::debug!("Company name: {}", name);
            name
        }
        None => {
            tracing::warn!("No 'PT ... Tbk' company name on the first page");
            UNKNOWN_COMPANY.to_string()
        }
    }
}
