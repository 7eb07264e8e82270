use axum::{extract::Query, extract::State, Json};
use contracts::dashboards::d100_sales_overview::dto::{
    FilterOptionsResponse, SalesOverviewRequest, SalesOverviewResponse,
};
use std::sync::Arc;

use crate::dashboards::d100_sales_overview::service;
use crate::shared::data::store::SalesTable;

/// GET /api/d100/overview?month=February&region=Sul&product=Produto%20A
///
/// The pipeline is a total function over the request domain, so this handler
/// has no error path: unknown selector values produce the empty result.
pub async fn get_overview(
    State(table): State<Arc<SalesTable>>,
    Query(request): Query<SalesOverviewRequest>,
) -> Json<SalesOverviewResponse> {
    tracing::info!(
        "D100 Dashboard: recompute for month='{}' region='{}' product='{}'",
        request.month,
        request.region,
        request.product
    );

    let response = service::overview(&table, &request);

    tracing::info!(
        "D100 Dashboard: {} rows matched, {} detail rows",
        response.matched_rows,
        response.detail_rows.len()
    );
    Json(response)
}

/// GET /api/d100/filters
pub async fn get_filter_options(
    State(table): State<Arc<SalesTable>>,
) -> Json<FilterOptionsResponse> {
    let options = service::filter_options(&table);
    tracing::info!(
        "D100 Dashboard: returning {} months / {} regions / {} products",
        options.months.len(),
        options.regions.len(),
        options.products.len()
    );
    Json(options)
}
