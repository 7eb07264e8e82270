//! Presentation adapter: maps one pipeline response (the ViewModel DTO) to
//! renderable chart specs, formatted KPI strings and table rows. Stateless
//! and 1:1 — every field of the response feeds exactly one widget.

use crate::shared::number_format::{format_currency, format_int, format_percent};
use chrono::NaiveDate;
use contracts::dashboards::d100_sales_overview::dto::{SalesOverviewResponse, SeriesPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Filled area line (daily trend)
    AreaLine,
    /// Vertical bars
    Bar,
    /// Donut, values shown as share of the total
    Donut,
    /// Horizontal bars
    HBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub kind: ChartKind,
    pub points: Vec<SeriesPoint>,
}

/// One rendered row of the detail table, all columns display-ready
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRowVm {
    pub date: String,
    pub region: String,
    pub product: String,
    pub quantity: String,
    pub amount: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardVm {
    pub kpi_total_amount: String,
    pub kpi_total_quantity: String,
    pub kpi_avg_ticket: String,
    pub kpi_completion_rate: String,
    pub charts: Vec<ChartSpec>,
    pub detail_rows: Vec<DetailRowVm>,
    /// False when the filtered subset was empty; the page then renders the
    /// explicit "no data" state instead of empty charts
    pub has_data: bool,
}

impl DashboardVm {
    pub fn from_response(response: &SalesOverviewResponse) -> Self {
        let charts = vec![
            ChartSpec {
                title: "Evolução de Vendas",
                kind: ChartKind::AreaLine,
                points: response.daily.clone(),
            },
            ChartSpec {
                title: "Vendas por Região",
                kind: ChartKind::Bar,
                points: response.by_region.clone(),
            },
            ChartSpec {
                title: "Distribuição por Produto",
                kind: ChartKind::Donut,
                points: response.by_product.clone(),
            },
            ChartSpec {
                title: "Performance por Região",
                kind: ChartKind::HBar,
                points: response.performance.clone(),
            },
            ChartSpec {
                title: "Comparativo Mensal",
                kind: ChartKind::Bar,
                points: response.by_month.clone(),
            },
        ];

        let detail_rows = response
            .detail_rows
            .iter()
            .map(|row| DetailRowVm {
                date: display_date(&row.date),
                region: row.region.clone(),
                product: row.product.clone(),
                quantity: format_int(row.quantity as u64),
                amount: format_currency(row.amount),
                status: format!("✓ {}", row.status),
            })
            .collect();

        Self {
            kpi_total_amount: format_currency(response.kpis.total_amount),
            kpi_total_quantity: format_int(response.kpis.total_quantity),
            kpi_avg_ticket: format_currency(response.kpis.avg_ticket),
            kpi_completion_rate: format_percent(response.kpis.completion_rate),
            charts,
            detail_rows,
            has_data: response.matched_rows > 0,
        }
    }
}

/// ISO wire date → dd/mm/yyyy for display
fn display_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}
