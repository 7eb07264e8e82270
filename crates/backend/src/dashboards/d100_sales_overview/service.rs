use crate::shared::data::store::SalesTable;
use contracts::dashboards::d100_sales_overview::dto::{
    FilterOptionsResponse, KpiSummary, SalesDetailRow, SalesOverviewRequest, SalesOverviewResponse,
    SeriesPoint,
};
use contracts::domain::a001_sales_record::{Product, Region, SalesRecord, MONTH_NAMES};
use std::collections::HashMap;

/// Number of rows in the detail slice
const DETAIL_ROWS: usize = 10;

/// Recompute the full dashboard ViewModel from the table and the three
/// selector values.
///
/// Pure and total: no I/O, identical inputs produce identical output, and any
/// selector value that matches nothing simply yields the empty result.
pub fn overview(table: &SalesTable, request: &SalesOverviewRequest) -> SalesOverviewResponse {
    let filtered = filter_records(table, request);

    SalesOverviewResponse {
        kpis: compute_kpis(&filtered),
        daily: daily_series(&filtered),
        by_region: region_series(&filtered),
        by_product: product_series(&filtered),
        performance: performance_series(&filtered),
        by_month: monthly_series(&filtered),
        detail_rows: detail_slice(&filtered),
        matched_rows: filtered.len(),
    }
}

/// Distinct selector values for the filter dropdowns
pub fn filter_options(table: &SalesTable) -> FilterOptionsResponse {
    FilterOptionsResponse {
        months: table.months(),
        regions: table.regions(),
        products: table.products(),
    }
}

/// Conjunctive equality filters; an empty selector applies no filter
fn filter_records<'a>(table: &'a SalesTable, request: &SalesOverviewRequest) -> Vec<&'a SalesRecord> {
    table
        .records()
        .iter()
        .filter(|r| request.month.is_empty() || r.month_name() == request.month)
        .filter(|r| request.region.is_empty() || r.region.label() == request.region)
        .filter(|r| request.product.is_empty() || r.product.label() == request.product)
        .collect()
}

fn compute_kpis(filtered: &[&SalesRecord]) -> KpiSummary {
    let total_amount: f64 = filtered.iter().map(|r| r.amount).sum();
    let total_quantity: u64 = filtered.iter().map(|r| r.quantity as u64).sum();

    // Explicit guards: both ratios are defined as 0 over the empty domain
    let avg_ticket = if total_quantity > 0 {
        total_amount / total_quantity as f64
    } else {
        0.0
    };
    let completion_rate = if filtered.is_empty() {
        0.0
    } else {
        let complete = filtered.iter().filter(|r| r.status.is_complete()).count();
        complete as f64 / filtered.len() as f64 * 100.0
    };

    KpiSummary {
        total_amount,
        total_quantity,
        avg_ticket,
        completion_rate,
    }
}

/// Sum of amount by day, chronological
fn daily_series(filtered: &[&SalesRecord]) -> Vec<SeriesPoint> {
    let mut by_day: HashMap<chrono::NaiveDate, f64> = HashMap::new();
    for r in filtered {
        *by_day.entry(r.date).or_insert(0.0) += r.amount;
    }
    let mut days: Vec<_> = by_day.into_iter().collect();
    days.sort_by_key(|(date, _)| *date);
    days.into_iter()
        .map(|(date, value)| SeriesPoint::new(date.format("%d/%m/%Y").to_string(), value))
        .collect()
}

/// Sum of amount by region, descending by amount
fn region_series(filtered: &[&SalesRecord]) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = Region::ALL
        .iter()
        .filter_map(|region| {
            let sum: f64 = filtered
                .iter()
                .filter(|r| r.region == *region)
                .map(|r| r.amount)
                .sum();
            filtered
                .iter()
                .any(|r| r.region == *region)
                .then(|| SeriesPoint::new(region.label(), sum))
        })
        .collect();
    points.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    points
}

/// Sum of amount by product, product-label order
fn product_series(filtered: &[&SalesRecord]) -> Vec<SeriesPoint> {
    Product::ALL
        .iter()
        .filter_map(|product| {
            let sum: f64 = filtered
                .iter()
                .filter(|r| r.product == *product)
                .map(|r| r.amount)
                .sum();
            filtered
                .iter()
                .any(|r| r.product == *product)
                .then(|| SeriesPoint::new(product.label(), sum))
        })
        .collect()
}

/// Sum of quantity by region, normalized to 0..=100 of the max region,
/// ascending (the horizontal performance bars read bottom-up)
fn performance_series(filtered: &[&SalesRecord]) -> Vec<SeriesPoint> {
    let mut quantities: Vec<(&'static str, u64)> = Region::ALL
        .iter()
        .filter_map(|region| {
            let sum: u64 = filtered
                .iter()
                .filter(|r| r.region == *region)
                .map(|r| r.quantity as u64)
                .sum();
            filtered
                .iter()
                .any(|r| r.region == *region)
                .then_some((region.label(), sum))
        })
        .collect();

    let max = quantities.iter().map(|(_, q)| *q).max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }

    quantities.sort_by_key(|(_, q)| *q);
    quantities
        .into_iter()
        .map(|(label, q)| SeriesPoint::new(label, (q as f64 / max as f64 * 100.0).round()))
        .collect()
}

/// Sum of amount by calendar month, calendar order (never alphabetical)
fn monthly_series(filtered: &[&SalesRecord]) -> Vec<SeriesPoint> {
    let mut by_month = [0.0f64; 12];
    let mut seen = [false; 12];
    for r in filtered {
        let idx = (r.month_index() - 1) as usize;
        by_month[idx] += r.amount;
        seen[idx] = true;
    }
    (0..12)
        .filter(|i| seen[*i])
        .map(|i| SeriesPoint::new(MONTH_NAMES[i], by_month[i]))
        .collect()
}

/// Top rows by amount descending; the sort is stable, so rows with equal
/// amounts keep their original table order
fn detail_slice(filtered: &[&SalesRecord]) -> Vec<SalesDetailRow> {
    let mut rows: Vec<&SalesRecord> = filtered.to_vec();
    rows.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
    rows.truncate(DETAIL_ROWS);
    rows.into_iter()
        .map(|r| SalesDetailRow {
            date: r.date.format("%Y-%m-%d").to_string(),
            region: r.region.label().to_string(),
            product: r.product.label().to_string(),
            quantity: r.quantity,
            amount: r.amount,
            status: r.status.label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::generator;
    use chrono::NaiveDate;
    use contracts::domain::a001_sales_record::SaleStatus;

    fn rec(
        date: (i32, u32, u32),
        region: Region,
        product: Product,
        quantity: u32,
        amount: f64,
        status: SaleStatus,
    ) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            region,
            product,
            quantity,
            amount,
            status,
        }
    }

    fn request(month: &str, region: &str, product: &str) -> SalesOverviewRequest {
        SalesOverviewRequest {
            month: month.to_string(),
            region: region.to_string(),
            product: product.to_string(),
        }
    }

    #[test]
    fn test_sul_single_row_scenario() {
        let table = SalesTable::new(vec![rec(
            (2024, 1, 10),
            Region::Sul,
            Product::ProdutoA,
            10,
            100.0,
            SaleStatus::Complete,
        )]);

        let resp = overview(&table, &request("", "Sul", ""));
        assert_eq!(resp.kpis.total_amount, 100.0);
        assert_eq!(resp.kpis.total_quantity, 10);
        assert_eq!(resp.kpis.avg_ticket, 10.0);
        assert_eq!(resp.kpis.completion_rate, 100.0);
        assert_eq!(resp.matched_rows, 1);
        assert_eq!(resp.detail_rows.len(), 1);
        assert_eq!(resp.detail_rows[0].region, "Sul");
        assert_eq!(resp.detail_rows[0].product, "Produto A");
        assert_eq!(resp.detail_rows[0].status, "Completo");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let table = SalesTable::new(vec![
            rec((2024, 1, 1), Region::Sul, Product::ProdutoA, 1, 10.0, SaleStatus::Complete),
            rec((2024, 1, 2), Region::Sul, Product::ProdutoB, 1, 20.0, SaleStatus::Complete),
            rec((2024, 2, 1), Region::Sul, Product::ProdutoA, 1, 40.0, SaleStatus::Complete),
            rec((2024, 1, 3), Region::Norte, Product::ProdutoA, 1, 80.0, SaleStatus::Complete),
        ]);

        let resp = overview(&table, &request("January", "Sul", "Produto A"));
        assert_eq!(resp.matched_rows, 1);
        assert_eq!(resp.kpis.total_amount, 10.0);
    }

    #[test]
    fn test_unknown_selector_yields_empty_not_error() {
        let table = generator::generate(42, 100);
        let resp = overview(&table, &request("Smarch", "", ""));
        assert_eq!(resp.matched_rows, 0);
        assert_eq!(resp.kpis.total_amount, 0.0);
        assert_eq!(resp.kpis.total_quantity, 0);
        assert_eq!(resp.kpis.avg_ticket, 0.0);
        assert_eq!(resp.kpis.completion_rate, 0.0);
        assert!(resp.daily.is_empty());
        assert!(resp.by_region.is_empty());
        assert!(resp.by_product.is_empty());
        assert!(resp.performance.is_empty());
        assert!(resp.by_month.is_empty());
        assert!(resp.detail_rows.is_empty());
    }

    #[test]
    fn test_zero_quantity_avg_guard() {
        let table = SalesTable::new(vec![rec(
            (2024, 1, 1),
            Region::Sul,
            Product::ProdutoA,
            0,
            50.0,
            SaleStatus::Pending,
        )]);
        let resp = overview(&table, &request("", "", ""));
        assert_eq!(resp.kpis.avg_ticket, 0.0);
        assert!(resp.kpis.avg_ticket.is_finite());
        assert_eq!(resp.kpis.completion_rate, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let table = generator::generate(42, 500);
        let req = request("February", "Norte", "");
        assert_eq!(overview(&table, &req), overview(&table, &req));
    }

    #[test]
    fn test_detail_slice_is_top_10_desc_and_subset() {
        let table = generator::generate(42, 500);
        let req = request("", "Sudeste", "");
        let resp = overview(&table, &req);

        assert!(resp.detail_rows.len() <= 10);
        for pair in resp.detail_rows.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
        // Every detail row exists in the table and matches the filter
        for row in &resp.detail_rows {
            assert_eq!(row.region, "Sudeste");
            assert!(table.records().iter().any(|r| {
                r.region.label() == row.region
                    && r.product.label() == row.product
                    && r.quantity == row.quantity
                    && r.amount == row.amount
            }));
        }
    }

    #[test]
    fn test_top_10_tie_keeps_original_order() {
        // Two amount-500 rows, distinguishable by product
        let table = SalesTable::new(vec![
            rec((2024, 1, 1), Region::Sul, Product::ProdutoA, 1, 500.0, SaleStatus::Complete),
            rec((2024, 1, 2), Region::Sul, Product::ProdutoB, 1, 500.0, SaleStatus::Complete),
            rec((2024, 1, 3), Region::Sul, Product::ProdutoC, 1, 900.0, SaleStatus::Complete),
        ]);
        let resp = overview(&table, &request("", "", ""));
        assert_eq!(resp.detail_rows[0].product, "Produto C");
        assert_eq!(resp.detail_rows[1].product, "Produto A");
        assert_eq!(resp.detail_rows[2].product, "Produto B");
    }

    #[test]
    fn test_region_series_sums_to_total_amount() {
        let table = generator::generate(42, 500);
        for req in [request("", "", ""), request("March", "", "Produto B")] {
            let resp = overview(&table, &req);
            let series_sum: f64 = resp.by_region.iter().map(|p| p.value).sum();
            assert!((series_sum - resp.kpis.total_amount).abs() < 1e-6);
        }
    }

    #[test]
    fn test_region_series_descending() {
        let table = generator::generate(42, 500);
        let resp = overview(&table, &request("", "", ""));
        for pair in resp.by_region.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn test_performance_normalized_ascending_with_max_100() {
        let table = generator::generate(42, 500);
        let resp = overview(&table, &request("", "", ""));
        assert!(!resp.performance.is_empty());
        for point in &resp.performance {
            assert!(point.value >= 0.0 && point.value <= 100.0);
        }
        for pair in resp.performance.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
        assert_eq!(resp.performance.last().unwrap().value, 100.0);
    }

    #[test]
    fn test_monthly_series_calendar_order() {
        // April row inserted before February: string sort would give
        // "April" < "February", calendar order must not
        let table = SalesTable::new(vec![
            rec((2024, 4, 1), Region::Sul, Product::ProdutoA, 1, 40.0, SaleStatus::Complete),
            rec((2024, 2, 1), Region::Sul, Product::ProdutoA, 1, 20.0, SaleStatus::Complete),
        ]);
        let resp = overview(&table, &request("", "", ""));
        let categories: Vec<&str> = resp.by_month.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories, vec!["February", "April"]);
    }

    #[test]
    fn test_daily_series_chronological() {
        let table = generator::generate(42, 500);
        let resp = overview(&table, &request("", "Norte", ""));
        let dates: Vec<NaiveDate> = resp
            .daily
            .iter()
            .map(|p| NaiveDate::parse_from_str(&p.category, "%d/%m/%Y").unwrap())
            .collect();
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_filter_options_from_table() {
        let table = generator::generate(42, 500);
        let options = filter_options(&table);
        assert_eq!(options.months, vec!["January", "February", "March", "April"]);
        assert_eq!(
            options.regions,
            vec!["Centro-Oeste", "Nordeste", "Norte", "Sudeste", "Sul"]
        );
        assert_eq!(
            options.products,
            vec!["Produto A", "Produto B", "Produto C", "Produto D"]
        );
    }
}
