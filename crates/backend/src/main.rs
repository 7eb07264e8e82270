pub mod api;
pub mod dashboards;
pub mod shared;

use shared::data::store::SalesTable;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{routing::get, Router};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request logging middleware: method, path, status, elapsed
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let response = next.run(req).await;

        let status = response.status().as_u16();
        let ms = start.elapsed().as_millis();
        if response.status().is_success() {
            tracing::info!("{status} {method} {path} ({ms}ms)");
        } else {
            tracing::warn!("{status} {method} {path} ({ms}ms)");
        }
        response
    }

    let config = shared::config::load_config()?;

    // The table is built exactly once; the snapshot is immutable and shared
    // read-only for the process lifetime.
    let table = build_table(&config)?;
    tracing::info!(
        "Sales table ready: {} rows from '{}' source",
        table.len(),
        config.dataset.source
    );
    let table = Arc::new(table);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // D100 Sales Overview dashboard
        .route(
            "/api/d100/overview",
            get(api::handlers::d100_sales_overview::get_overview),
        )
        .route(
            "/api/d100/filters",
            get(api::handlers::d100_sales_overview::get_filter_options),
        )
        .with_state(table)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let port = shared::config::effective_port(&config);
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

/// Construct the sales table from the configured source. The synthetic path
/// cannot fail; a missing or malformed CSV is fatal and surfaced as-is.
fn build_table(config: &shared::config::Config) -> anyhow::Result<SalesTable> {
    use anyhow::Context;

    match config.dataset.source.as_str() {
        "synthetic" => Ok(shared::data::generator::generate(
            config.dataset.seed,
            config.dataset.rows,
        )),
        "csv" => {
            let path = std::path::Path::new(&config.dataset.csv_path);
            shared::data::loader::load_csv(path)
                .with_context(|| format!("loading sales data from {}", path.display()))
        }
        other => anyhow::bail!("unknown dataset source '{other}' (expected 'synthetic' or 'csv')"),
    }
}
