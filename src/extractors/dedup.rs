// src/extractors/dedup.rs
use std::collections::HashSet;
use crate::extractors::record::{CashRecord, PlacementType};

/// Drops records repeating an earlier (period, bank, amount, placement type), keeping first-seen order.
pub fn dedup_records(mut records: Vec<CashRecord>) -> Vec<CashRecord> {
    let before = records.len();
    let mut seen: HashSet<(String, String, u64, PlacementType)> = HashSet::with_capacity(before);
    records.retain(|r| seen.insert((r.period.clone(), r.bank.clone(), r.amount, r.placement_type)));

    if records.len() < before {
        tracing::debug!("Dropped {} duplicate records", before - records.len());
    }
    records
}
