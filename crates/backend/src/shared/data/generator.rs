use super::store::SalesTable;
use chrono::{Duration, NaiveDate};
use contracts::domain::a001_sales_record::{Product, Region, SaleStatus, SalesRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// First day of the sampling window
const WINDOW_START: (i32, u32, u32) = (2024, 1, 1);
/// Last day of the sampling window (inclusive)
const WINDOW_END: (i32, u32, u32) = (2024, 4, 30);

/// Generate the synthetic sales table.
///
/// Deterministic for a fixed seed: dates uniform over the 2024-01-01..=04-30
/// window, region/product uniform, quantity in [50,300), amount in
/// [1000,10000), status 90/10 weighted toward Complete.
pub fn generate(seed: u64, rows: usize) -> SalesTable {
    let mut rng = StdRng::seed_from_u64(seed);

    let start = NaiveDate::from_ymd_opt(WINDOW_START.0, WINDOW_START.1, WINDOW_START.2)
        .expect("valid window start");
    let end =
        NaiveDate::from_ymd_opt(WINDOW_END.0, WINDOW_END.1, WINDOW_END.2).expect("valid window end");
    let window_days = (end - start).num_days() + 1;

    let mut records = Vec::with_capacity(rows);
    for _ in 0..rows {
        let date = start + Duration::days(rng.gen_range(0..window_days));
        let region = Region::ALL[rng.gen_range(0..Region::ALL.len())];
        let product = Product::ALL[rng.gen_range(0..Product::ALL.len())];
        let quantity = rng.gen_range(50..300u32);
        let amount = rng.gen_range(1000.0..10000.0f64);
        let status = if rng.gen_bool(0.9) {
            SaleStatus::Complete
        } else {
            SaleStatus::Pending
        };

        records.push(SalesRecord {
            date,
            region,
            product,
            quantity,
            amount,
            status,
        });
    }

    SalesTable::new(records)
}
