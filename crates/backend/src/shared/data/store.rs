use contracts::domain::a001_sales_record::{SalesRecord, MONTH_NAMES};
use std::collections::HashSet;

/// Immutable snapshot of the sales table.
///
/// Built exactly once at startup (synthetic generator or CSV loader), then
/// shared read-only behind an `Arc` for the process lifetime. There is no
/// mutation API: the dashboard pipeline only ever borrows the rows.
#[derive(Debug, Clone)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct month names present in the table, calendar order
    pub fn months(&self) -> Vec<String> {
        let present: HashSet<u32> = self.records.iter().map(|r| r.month_index()).collect();
        MONTH_NAMES
            .iter()
            .enumerate()
            .filter(|(i, _)| present.contains(&(*i as u32 + 1)))
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Distinct region labels present in the table, label order
    pub fn regions(&self) -> Vec<String> {
        let present: HashSet<&str> = self.records.iter().map(|r| r.region.label()).collect();
        let mut labels: Vec<String> = present.into_iter().map(|s| s.to_string()).collect();
        labels.sort();
        labels
    }

    /// Distinct product labels present in the table, label order
    pub fn products(&self) -> Vec<String> {
        let present: HashSet<&str> = self.records.iter().map(|r| r.product.label()).collect();
        let mut labels: Vec<String> = present.into_iter().map(|s| s.to_string()).collect();
        labels.sort();
        labels
    }
}
