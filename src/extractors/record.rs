// src/extractors/record.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether funds sit in on-demand bank balances or fixed-term deposits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlacementType {
    #[default]
    CashInBank,
    TimeDeposit,
}

impl PlacementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementType::CashInBank => "cash_in_bank",
            PlacementType::TimeDeposit => "time_deposit",
        }
    }
}

impl fmt::Display for PlacementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One amount disclosed in the note for one institution (or total) and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashRecord {
    pub period: String,
    pub bank: String,
    pub currency: String,
    pub amount: u64,
    pub placement_type: PlacementType,
}

/// A record as it appears in the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRow {
    pub period: String,
    pub bank: String,
    pub currency: String,
    pub amount: u64,
    pub placement_type: PlacementType,
    pub company: String,
}

/// Attaches the document's company name to every record.
pub fn assemble(records: &[CashRecord], company: &str) -> Vec<NoteRow> {
    records
        .iter()
        .map(|r| NoteRow {
            period: r.period.clone(),
            bank: r.bank.clone(),
            currency: r.currency.clone(),
            amount: r.amount,
            placement_type: r.placement_type,
            company: company.to_string(),
        })
        .collect()
}
