use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// English month names, calendar order. Index 0 = January.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sales region (A001 dimension)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Norte,
    Nordeste,
    CentroOeste,
    Sudeste,
    Sul,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Norte,
        Region::Nordeste,
        Region::CentroOeste,
        Region::Sudeste,
        Region::Sul,
    ];

    /// Display label, matches the dataset values
    pub fn label(&self) -> &'static str {
        match self {
            Region::Norte => "Norte",
            Region::Nordeste => "Nordeste",
            Region::CentroOeste => "Centro-Oeste",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }

    pub fn parse_label(s: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.label() == s)
    }
}

/// Product line (A001 dimension)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    ProdutoA,
    ProdutoB,
    ProdutoC,
    ProdutoD,
}

impl Product {
    pub const ALL: [Product; 4] = [
        Product::ProdutoA,
        Product::ProdutoB,
        Product::ProdutoC,
        Product::ProdutoD,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Product::ProdutoA => "Produto A",
            Product::ProdutoB => "Produto B",
            Product::ProdutoC => "Produto C",
            Product::ProdutoD => "Produto D",
        }
    }

    pub fn parse_label(s: &str) -> Option<Product> {
        Product::ALL.into_iter().find(|p| p.label() == s)
    }
}

/// Completion status of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleStatus {
    Complete,
    Pending,
}

impl SaleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Complete => "Completo",
            SaleStatus::Pending => "Pendente",
        }
    }

    pub fn parse_label(s: &str) -> Option<SaleStatus> {
        match s {
            "Completo" => Some(SaleStatus::Complete),
            "Pendente" => Some(SaleStatus::Pending),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SaleStatus::Complete)
    }
}

/// One row of the sales table (A001).
///
/// The month is not stored: it is always derived from `date`, so the two can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: Region,
    pub product: Product,
    pub quantity: u32,
    pub amount: f64,
    pub status: SaleStatus,
}

impl SalesRecord {
    /// Calendar month index, 1..=12
    pub fn month_index(&self) -> u32 {
        self.date.month()
    }

    /// English month name ("January".."December"), used for the month
    /// selector and the monthly chart categories
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.date.month0()) as usize]
    }
}
