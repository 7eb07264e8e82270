use crate::dashboards::d100_sales_overview::ui::dashboard::SalesOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Dashboard de Vendas"</h1>
                <p>"Análise de vendas e performance por mês, região e produto"</p>
            </header>

            <main class="app-content">
                <SalesOverviewDashboard />
            </main>

            <footer class="app-footer">
                "© 2024 Dashboard de Vendas"
            </footer>
        </div>
    }
}
