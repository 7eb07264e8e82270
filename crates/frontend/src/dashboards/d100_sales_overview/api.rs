use contracts::dashboards::d100_sales_overview::dto::{
    FilterOptionsResponse, SalesOverviewResponse,
};
use gloo_net::http::Request;

const API_BASE: &str = "/api/d100";

/// Fetch the distinct selector values for the three dropdowns
pub async fn fetch_filter_options() -> Result<FilterOptionsResponse, String> {
    let url = format!("{}/filters", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: FilterOptionsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch the recomputed dashboard for the current selector values
/// (empty string = "all")
pub async fn fetch_overview(
    month: &str,
    region: &str,
    product: &str,
) -> Result<SalesOverviewResponse, String> {
    let url = format!(
        "{}/overview?month={}&region={}&product={}",
        API_BASE,
        urlencoding::encode(month),
        urlencoding::encode(region),
        urlencoding::encode(product)
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: SalesOverviewResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
