// src/config.rs
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::utils::AppError;

/// A substring keyword that switches the sticky currency of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyHint {
    pub keyword: String,
    pub iso: String,
}

impl CurrencyHint {
    fn new(keyword: &str, iso: &str) -> Self {
        Self { keyword: keyword.to_string(), iso: iso.to_string() }
    }
}

/// Tunables for the note parser. Defaults reproduce the stock heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Smallest value accepted as a monetary amount; smaller numbers are row indexes or note refs.
    pub min_amount: u64,
    /// How many non-empty lines are searched for half dates and year headers.
    pub half_date_window: usize,
    pub default_currency: String,
    /// Checked in order on every line; a later hit overwrites an earlier one.
    pub currency_hints: Vec<CurrencyHint>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_amount: 1_000,
            half_date_window: 60,
            default_currency: "IDR".to_string(),
            currency_hints: vec![
                CurrencyHint::new("rupiah", "IDR"),
                CurrencyHint::new("us dollar", "USD"),
                CurrencyHint::new("dolar as", "USD"),
                CurrencyHint::new("peso", "PHP"),
                CurrencyHint::new("yen", "JPY"),
                CurrencyHint::new("euro", "EUR"),
            ],
        }
    }
}

impl ParserConfig {
    /// Loads a JSON config file; missing fields fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let config: ParserConfig = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("Invalid config {}: {}", path.display(), e)))?;
        config.validate()?;
        tracing::debug!("Loaded parser config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let is_iso = |code: &str| code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase());

        if !is_iso(&self.default_currency) {
            return Err(AppError::Config(format!(
                "default_currency must be a 3-letter upper-case code, got '{}'",
                self.default_currency
            )));
        }
        for hint in &self.currency_hints {
            if hint.keyword.trim().is_empty() {
                return Err(AppError::Config("currency hint keyword must not be empty".to_string()));
            }
            if !is_iso(&hint.iso) {
                return Err(AppError::Config(format!(
                    "currency hint '{}' maps to invalid code '{}'",
                    hint.keyword, hint.iso
                )));
            }
        }
        if self.half_date_window == 0 {
            return Err(AppError::Config("half_date_window must be at least 1".to_string()));
        }
        Ok(())
    }
}
