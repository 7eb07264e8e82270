use serde::{Deserialize, Serialize};

/// Request for the sales overview dashboard.
///
/// Each selector is either an empty string ("no filter") or a value from the
/// corresponding distinct-value list. Unrecognized values match nothing and
/// yield the empty result, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub product: String,
}

/// Scalar KPIs over the filtered subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Sum of amount, currency units
    pub total_amount: f64,
    /// Sum of quantity
    pub total_quantity: u64,
    /// total_amount / total_quantity, 0 when total_quantity is 0
    pub avg_ticket: f64,
    /// Share of Complete rows, percent (0..=100), 0 for the empty subset
    pub completion_rate: f64,
}

/// One (category, value) point of a grouped-aggregate series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub category: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// One row of the detail slice (top 10 by amount)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDetailRow {
    /// ISO date (yyyy-mm-dd); display formatting is the frontend's job
    pub date: String,
    pub region: String,
    pub product: String,
    pub quantity: u32,
    pub amount: f64,
    pub status: String,
}

/// Response for the sales overview dashboard — the full ViewModel of one
/// pipeline invocation.
///
/// Series ordering contract:
/// - `daily`: chronological
/// - `by_region`: amount descending
/// - `by_product`: product-label order
/// - `performance`: quantity share of the max region (0..=100), ascending
/// - `by_month`: calendar order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    pub kpis: KpiSummary,
    pub daily: Vec<SeriesPoint>,
    pub by_region: Vec<SeriesPoint>,
    pub by_product: Vec<SeriesPoint>,
    pub performance: Vec<SeriesPoint>,
    pub by_month: Vec<SeriesPoint>,
    pub detail_rows: Vec<SalesDetailRow>,
    /// Size of the filtered subset; 0 drives the explicit "no data" state
    pub matched_rows: usize,
}

/// Distinct selector values for the three filter dropdowns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    /// Months present in the table, calendar order
    pub months: Vec<String>,
    /// Regions present in the table, label order
    pub regions: Vec<String>,
    /// Products present in the table, label order
    pub products: Vec<String>,
}
