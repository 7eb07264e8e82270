use super::store::SalesTable;
use chrono::NaiveDate;
use contracts::domain::a001_sales_record::{Product, Region, SaleStatus, SalesRecord};
use std::path::{Path, PathBuf};

/// Columns the loader requires after header normalization
const REQUIRED_COLUMNS: [&str; 6] = ["date", "region", "product", "quantity", "amount", "status"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("sales file not found at: {0}")]
    NotFound(PathBuf),
    #[error("failed to read sales file: {0}")]
    Csv(#[from] csv::Error),
    #[error("sales file is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("invalid value in line {line}, column '{column}': {message}")]
    InvalidValue {
        line: usize,
        column: String,
        message: String,
    },
}

/// Normalize a header name: trim, lowercase, spaces to underscores
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Load the sales table from a comma-separated file.
///
/// Headers are normalized before lookup; the schema is validated up front and
/// a file missing any required column is rejected with an error naming the
/// missing columns. Dates accept day-first `dd/mm/yyyy` and ISO `yyyy-mm-dd`.
pub fn load_csv(path: &Path) -> Result<SalesTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| column(name).is_none())
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let idx_date = column("date").expect("validated above");
    let idx_region = column("region").expect("validated above");
    let idx_product = column("product").expect("validated above");
    let idx_quantity = column("quantity").expect("validated above");
    let idx_amount = column("amount").expect("validated above");
    let idx_status = column("status").expect("validated above");

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        // 1-based file line, accounting for the header row
        let line = i + 2;

        let field = |idx: usize| row.get(idx).unwrap_or("");
        let invalid = |column: &str, message: String| LoadError::InvalidValue {
            line,
            column: column.to_string(),
            message,
        };

        let date = parse_date(field(idx_date))
            .ok_or_else(|| invalid("date", format!("unparseable date '{}'", field(idx_date))))?;
        let region = Region::parse_label(field(idx_region))
            .ok_or_else(|| invalid("region", format!("unknown region '{}'", field(idx_region))))?;
        let product = Product::parse_label(field(idx_product)).ok_or_else(|| {
            invalid("product", format!("unknown product '{}'", field(idx_product)))
        })?;
        let quantity: u32 = field(idx_quantity).parse().map_err(|_| {
            invalid(
                "quantity",
                format!("'{}' is not a non-negative integer", field(idx_quantity)),
            )
        })?;
        let amount: f64 = field(idx_amount)
            .parse()
            .map_err(|_| invalid("amount", format!("'{}' is not a number", field(idx_amount))))?;
        if amount < 0.0 || amount.is_nan() {
            return Err(invalid("amount", format!("'{amount}' is not a non-negative number")));
        }
        let status = SaleStatus::parse_label(field(idx_status))
            .ok_or_else(|| invalid("status", format!("unknown status '{}'", field(idx_status))))?;

        records.push(SalesRecord {
            date,
            region,
            product,
            quantity,
            amount,
            status,
        });
    }

    Ok(SalesTable::new(records))
}

/// Day-first first (the source convention), ISO as fallback
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("d100_loader_{}_{}.csv", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Data Formatada "), "data_formatada");
        assert_eq!(normalize_header("AMOUNT"), "amount");
        assert_eq!(normalize_header("status"), "status");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = Path::new("/definitely/not/here/dados.csv");
        match load_csv(path) {
            Err(LoadError::NotFound(p)) => assert_eq!(p, path.to_path_buf()),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_columns_are_named() {
        let path = temp_csv(
            "missing",
            "date,region,quantity\n01/02/2024,Sul,10\n",
        );
        match load_csv(&path) {
            Err(LoadError::MissingColumns(cols)) => {
                assert_eq!(cols, vec!["product", "amount", "status"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_loads_with_messy_headers() {
        let path = temp_csv(
            "messy",
            " Date ,REGION,Product,quantity,Amount,Status\n\
             15/03/2024,Sul,Produto A,10,100.5,Completo\n\
             2024-04-02,Centro-Oeste,Produto D,3,99.0,Pendente\n",
        );
        let table = load_csv(&path).unwrap();
        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(first.region, Region::Sul);
        assert_eq!(first.quantity, 10);
        assert_eq!(first.status, SaleStatus::Complete);
        let second = &table.records()[1];
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
        assert_eq!(second.region, Region::CentroOeste);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_bad_cell_reports_line_and_column() {
        let path = temp_csv(
            "badcell",
            "date,region,product,quantity,amount,status\n\
             01/01/2024,Sul,Produto A,10,100.0,Completo\n\
             02/01/2024,Marte,Produto A,10,100.0,Completo\n",
        );
        match load_csv(&path) {
            Err(LoadError::InvalidValue { line, column, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "region");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let path = temp_csv(
            "negqty",
            "date,region,product,quantity,amount,status\n\
             01/01/2024,Sul,Produto A,-5,100.0,Completo\n",
        );
        match load_csv(&path) {
            Err(LoadError::InvalidValue { column, .. }) => assert_eq!(column, "quantity"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        std::fs::remove_file(path).ok();
    }
}
