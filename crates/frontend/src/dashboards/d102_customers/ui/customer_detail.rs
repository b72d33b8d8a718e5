use crate::dashboards::d102_customers::api;
use crate::dashboards::d102_customers::projections::{customer_badges, customer_location};
use crate::shared::components::query_view;
use crate::shared::date_utils::{format_full_date, full_date};
use crate::shared::formatters::{format_currency, format_number, format_percent};
use crate::shared::icons::icon;
use crate::shared::list_utils::or_dash;
use crate::shared::query::{use_query, QueryOptions};
use contracts::dashboards::d102_customers::{Customer, CustomerOrder};
use contracts::dashboards::d105_predictions::CustomerLtvPrediction;
use leptos::prelude::*;
use thaw::*;

/// Side panel with profile, predicted LTV and recent orders of one customer.
#[component]
pub fn CustomerDetail(customer_id: i64, on_close: Callback<()>) -> impl IntoView {
    let customer = use_query(move || api::customer_query(customer_id), QueryOptions::default());
    let orders = use_query(move || api::customer_orders_query(customer_id), QueryOptions::default());
    let ltv = use_query(move || api::customer_ltv_query(customer_id), QueryOptions::default());

    view! {
        <aside class="detail-panel">
            <div class="detail-panel__header">
                <h3 class="detail-panel__title">{format!("Cliente #{}", customer_id)}</h3>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>
            {query_view(customer, 160, |c| view! { <CustomerProfile customer=c /> })}
            <h4 class="detail-panel__section">"Previsão de LTV"</h4>
            {query_view(ltv, 80, |p| view! { <LtvSummary prediction=p /> })}
            <h4 class="detail-panel__section">"Pedidos recentes"</h4>
            {query_view(orders, 200, |o| view! { <OrderHistory orders=o /> })}
        </aside>
    }
}

#[component]
fn CustomerProfile(customer: Customer) -> impl IntoView {
    let location = customer_location(&customer);
    let badges = customer_badges(&customer);
    let first_order = customer.first_order_date.map(full_date);
    let last_order = customer.last_order_date.map(full_date);

    view! {
        <dl class="detail-list">
            <dt>"ID externo"</dt>
            <dd>{customer.external_customer_id}</dd>
            <dt>"Local"</dt>
            <dd>{location}</dd>
            <dt>"Segmento RFM"</dt>
            <dd>{or_dash(customer.rfm_segment)}</dd>
            <dt>"Canal de aquisição"</dt>
            <dd>{or_dash(customer.first_order_channel)}</dd>
            <dt>"Primeiro pedido"</dt>
            <dd>{or_dash(first_order)}</dd>
            <dt>"Último pedido"</dt>
            <dd>{or_dash(last_order)}</dd>
            <dt>"Pedidos"</dt>
            <dd>{format_number(customer.total_orders as f64)}</dd>
            <dt>"Receita total"</dt>
            <dd>{format_currency(customer.total_revenue)}</dd>
            <dt>"Ticket médio"</dt>
            <dd>{format_currency(customer.average_order_value)}</dd>
        </dl>
        <div class="detail-panel__badges">
            {badges.into_iter().map(|b| view! { <span class="badge badge--muted">{b}</span> }).collect_view()}
        </div>
    }
}

#[component]
fn LtvSummary(prediction: CustomerLtvPrediction) -> impl IntoView {
    let current = prediction
        .current_metrics
        .as_ref()
        .map(|m| m.total_revenue)
        .or(prediction.current_ltv)
        .unwrap_or(0.0);
    let ltv_3y = prediction
        .predictions
        .as_ref()
        .map(|p| p.ltv_3y)
        .or(prediction.predicted_ltv_3y)
        .unwrap_or(0.0);
    let retention = prediction.predictions.as_ref().map(|p| p.retention_probability * 100.0);

    view! {
        <div class="ltv-summary">
            <div class="ltv-summary__item">
                <span class="ltv-summary__label">"Atual"</span>
                <span class="ltv-summary__value">{format_currency(current)}</span>
            </div>
            <div class="ltv-summary__item">
                <span class="ltv-summary__label">"1 ano"</span>
                <span class="ltv-summary__value">{format_currency(prediction.ltv_1y())}</span>
            </div>
            <div class="ltv-summary__item">
                <span class="ltv-summary__label">"3 anos"</span>
                <span class="ltv-summary__value">{format_currency(ltv_3y)}</span>
            </div>
            {retention.map(|r| view! {
                <div class="ltv-summary__item">
                    <span class="ltv-summary__label">"Retenção"</span>
                    <span class="ltv-summary__value">{format_percent(r, 0)}</span>
                </div>
            })}
            <span class="ltv-summary__confidence">
                {format!("Confiança: {}", or_dash(Some(prediction.prediction_confidence)))}
            </span>
        </div>
    }
}

#[component]
fn OrderHistory(orders: Vec<CustomerOrder>) -> impl IntoView {
    if orders.is_empty() {
        return view! { <div class="chart-empty">"Nenhum pedido"</div> }.into_any();
    }
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Pedido"</TableHeaderCell>
                    <TableHeaderCell>"Data"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Itens"</TableHeaderCell>
                    <TableHeaderCell>"Total"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {orders
                    .into_iter()
                    .map(|o| {
                        view! {
                            <TableRow>
                                <TableCell>{o.external_order_id}</TableCell>
                                <TableCell>{format_full_date(&o.order_date)}</TableCell>
                                <TableCell>{o.status}</TableCell>
                                <TableCell>{o.items}</TableCell>
                                <TableCell>{format_currency(o.total_amount)}</TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}
