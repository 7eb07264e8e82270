use crate::dashboards::d100_sales_overview::api;
use crate::dashboards::d100_sales_overview::ui::charts::ChartCard;
use crate::dashboards::d100_sales_overview::ui::detail_table::DetailTable;
use crate::dashboards::d100_sales_overview::view_model::DashboardVm;
use crate::shared::components::select::Select;
use contracts::dashboards::d100_sales_overview::dto::FilterOptionsResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Build dropdown options with the leading "all" entry (empty value)
fn with_all_option(all_label: &str, values: &[String]) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), all_label.to_string())];
    options.extend(values.iter().map(|v| (v.clone(), v.clone())));
    options
}

/// Sales overview dashboard (D100).
///
/// The three selector signals are the only inputs; every change re-invokes
/// the backend pipeline and the whole output fragment is replaced.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let month = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let product = RwSignal::new(String::new());

    let filter_options = RwSignal::new(None::<FilterOptionsResponse>);
    let (data, set_data) = signal(None::<DashboardVm>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Load filter options on mount
    spawn_local(async move {
        match api::fetch_filter_options().await {
            Ok(options) => filter_options.set(Some(options)),
            Err(err) => {
                log::error!("Failed to load D100 filter options: {}", err);
            }
        }
    });

    // Recompute whenever any selector changes
    Effect::new(move |_| {
        let m = month.get();
        let r = region.get();
        let p = product.get();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_overview(&m, &r, &p).await {
                Ok(response) => {
                    set_data.set(Some(DashboardVm::from_response(&response)));
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let month_options = Signal::derive(move || {
        with_all_option(
            "Todos",
            filter_options
                .get()
                .map(|o| o.months)
                .unwrap_or_default()
                .as_slice(),
        )
    });
    let region_options = Signal::derive(move || {
        with_all_option(
            "Todas",
            filter_options
                .get()
                .map(|o| o.regions)
                .unwrap_or_default()
                .as_slice(),
        )
    });
    let product_options = Signal::derive(move || {
        with_all_option(
            "Todos",
            filter_options
                .get()
                .map(|o| o.products)
                .unwrap_or_default()
                .as_slice(),
        )
    });

    view! {
        <div id="d100_sales_overview--dashboard" class="d100-dashboard">
            <div class="filter-panel">
                <Select
                    label="Mês:"
                    value=Signal::derive(move || month.get())
                    on_change=Callback::new(move |v| month.set(v))
                    options=month_options
                />
                <Select
                    label="Região:"
                    value=Signal::derive(move || region.get())
                    on_change=Callback::new(move |v| region.set(v))
                    options=region_options
                />
                <Select
                    label="Produto:"
                    value=Signal::derive(move || product.get())
                    on_change=Callback::new(move |v| product.set(v))
                    options=product_options
                />
            </div>

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="d100-error">
                            <strong>"⚠ Erro: "</strong>
                            {err}
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if loading.get() {
                    view! {
                        <div class="d100-loading">
                            <span>"Carregando dados..."</span>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || match data.get() {
                None => view! { <></> }.into_any(),
                Some(vm) if !vm.has_data => {
                    view! {
                        <div class="d100-empty">
                            <p>"Nenhum dado encontrado para os filtros selecionados"</p>
                        </div>
                    }
                    .into_any()
                }
                Some(vm) => render_dashboard(vm).into_any(),
            }}
        </div>
    }
}

/// The full output fragment for one ViewModel: KPI cards, the five charts
/// and the detail table. Rebuilt wholesale on every recompute.
fn render_dashboard(vm: DashboardVm) -> impl IntoView {
    let charts = vm
        .charts
        .into_iter()
        .map(|spec| view! { <ChartCard spec=spec /> })
        .collect_view();

    view! {
        <div class="kpi-grid">
            <div class="kpi-card kpi-card--primary">
                <div class="kpi-card__label">"Vendas Totais"</div>
                <div class="kpi-card__value">{vm.kpi_total_amount}</div>
            </div>
            <div class="kpi-card kpi-card--green">
                <div class="kpi-card__label">"Quantidade Vendida"</div>
                <div class="kpi-card__value">{vm.kpi_total_quantity}</div>
            </div>
            <div class="kpi-card kpi-card--amber">
                <div class="kpi-card__label">"Ticket Médio"</div>
                <div class="kpi-card__value">{vm.kpi_avg_ticket}</div>
            </div>
            <div class="kpi-card kpi-card--red">
                <div class="kpi-card__label">"Taxa Conversão"</div>
                <div class="kpi-card__value">{vm.kpi_completion_rate}</div>
            </div>
        </div>

        <div class="charts-grid">{charts}</div>

        <div class="detail-section">
            <h3>"Detalhes de Vendas"</h3>
            <DetailTable rows=vm.detail_rows />
        </div>
    }
}
