use crate::dashboards::d100_sales_overview::view_model::DetailRowVm;
use leptos::prelude::*;

/// Detail table: top 10 sales by amount, fixed 6 columns.
#[component]
pub fn DetailTable(rows: Vec<DetailRowVm>) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <p class="detail-table__empty">"Nenhum dado encontrado"</p>
        }
        .into_any();
    }

    let body = rows
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.date}</td>
                    <td>{row.region}</td>
                    <td>{row.product}</td>
                    <td class="detail-table__num">{row.quantity}</td>
                    <td class="detail-table__num">{row.amount}</td>
                    <td>{row.status}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="detail-table">
            <thead>
                <tr>
                    <th>"Data"</th>
                    <th>"Região"</th>
                    <th>"Produto"</th>
                    <th>"Quantidade"</th>
                    <th>"Valor (R$)"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
    .into_any()
}
