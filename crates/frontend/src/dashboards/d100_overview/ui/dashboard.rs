use crate::dashboards::d100_overview::api;
use crate::dashboards::d100_overview::projections::{
    channel_revenue, revenue_series, secondary_kpi_values, visible_alerts, PANEL_ALERTS,
    SECONDARY_KPIS,
};
use crate::layout::global_context::use_global_context;
use crate::layout::Shell;
use crate::shared::chart::ChartDatum;
use crate::shared::colors::{PRIMARY, SUCCESS};
use crate::shared::components::card_animated::STAGGER_MS;
use crate::shared::components::charts::{AreaChart, AreaChartData, AreaSeries, BarChart, DonutChart};
use crate::shared::components::{query_view, AlertsList, CardAnimated, CounterFormat, KpiCard, StatCard};
use crate::shared::formatters::{format_currency, format_number};
use crate::shared::page_frame::PageFrame;
use crate::shared::query::{use_query, PageLoad, QueryOptions};
use contracts::dashboards::d100_overview::{KpiData, TopProduct};
use contracts::shared::period::Period;
use leptos::prelude::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let period = RwSignal::new(Period::default());

    let kpis = use_query(move || api::kpis_query(period.get()), QueryOptions::default());
    let revenue = use_query(move || api::revenue_chart_query(period.get()), QueryOptions::default());
    let top_products = use_query(move || api::top_products_query(period.get()), QueryOptions::default());
    let top_channels = use_query(move || api::top_channels_query(period.get()), QueryOptions::default());
    let alerts = use_query(api::alerts_query, QueryOptions::alerts());

    let loading = Signal::derive(move || PageLoad::any_pending(&[kpis.is_loading(), revenue.is_loading()]));

    let kpi = move |pick: fn(&KpiData) -> f64| Signal::derive(move || kpis.with_data(|k| k.map(pick)));
    let change = move |pick: fn(&KpiData) -> Option<f64>| {
        Signal::derive(move || kpis.with_data(|k| k.and_then(pick)))
    };

    let panel_alerts = Signal::derive(move || {
        let dismissed = ctx.dismissed_alerts.get();
        alerts.with_data(|a| visible_alerts(a.map(Vec::as_slice).unwrap_or_default(), &dismissed, PANEL_ALERTS))
    });
    let on_dismiss = Callback::new(move |id: String| ctx.dismiss_alert(id));

    let secondary = move |index: usize| {
        Signal::derive(move || {
            kpis.with_data(|k| k.map(|k| secondary_kpi_values(k)[index].clone()))
        })
    };

    view! {
        <Shell title="Dashboard" subtitle="Visão geral do seu e-commerce" period=period loading=loading>
            <PageFrame page_id="d100_overview--dashboard">
                <div class="welcome">
                    <h2 class="welcome__title">
                        "Bem-vindo ao " <span class="gradient-text">"Cortex Analytics"</span>
                    </h2>
                    <p class="welcome__subtitle">"Aqui está o resumo do desempenho do seu e-commerce"</p>
                </div>

                <Show when=move || panel_alerts.with(|a| !a.is_empty())>
                    <CardAnimated title="Alertas Inteligentes">
                        <p class="dashboard-card__subtitle">"Atenção necessária"</p>
                        <AlertsList alerts=panel_alerts on_dismiss=on_dismiss />
                    </CardAnimated>
                </Show>

                <div class="kpi-grid">
                    <KpiCard
                        title="Receita Total"
                        icon_name="revenue"
                        value=kpi(|k| k.total_revenue)
                        change=change(|k| k.revenue_change)
                        format=CounterFormat::Currency
                        error=kpis.error_signal()
                        on_retry=kpis.retry_callback()
                    />
                    <KpiCard
                        title="Pedidos"
                        icon_name="orders"
                        value=kpi(|k| k.total_orders as f64)
                        change=change(|k| k.orders_change)
                        format=CounterFormat::Number
                        error=kpis.error_signal()
                        on_retry=kpis.retry_callback()
                        delay_ms=STAGGER_MS
                    />
                    <KpiCard
                        title="Clientes"
                        icon_name="customers"
                        value=kpi(|k| k.total_customers as f64)
                        change=change(|k| k.customers_change)
                        format=CounterFormat::Number
                        error=kpis.error_signal()
                        on_retry=kpis.retry_callback()
                        delay_ms=STAGGER_MS * 2
                    />
                    <KpiCard
                        title="Ticket Médio"
                        icon_name="ticket"
                        value=kpi(|k| k.avg_order_value)
                        change=change(|k| k.aov_change)
                        format=CounterFormat::Currency
                        error=kpis.error_signal()
                        on_retry=kpis.retry_callback()
                        delay_ms=STAGGER_MS * 3
                    />
                </div>

                <div class="stat-grid">
                    {SECONDARY_KPIS
                        .into_iter()
                        .enumerate()
                        .map(|(i, (label, icon_name))| {
                            view! {
                                <StatCard
                                    label=label
                                    icon_name=icon_name
                                    value=secondary(i)
                                    delay_ms={STAGGER_MS * (4 + i as u32)}
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="chart-grid">
                    <CardAnimated title="Receita e Pedidos" delay_ms=STAGGER_MS * 3>
                        <p class="dashboard-card__subtitle">"Evolução no período"</p>
                        {query_view(revenue, 300, |points| {
                            let (labels, revenue, orders) = revenue_series(&points);
                            let data = AreaChartData {
                                labels,
                                series: vec![
                                    AreaSeries { name: "Receita".to_string(), color: PRIMARY, values: revenue },
                                    AreaSeries { name: "Pedidos".to_string(), color: SUCCESS, values: orders },
                                ],
                                band: None,
                            };
                            view! { <AreaChart data=data /> }
                        })}
                    </CardAnimated>
                    <CardAnimated title="Receita por Canal" delay_ms=STAGGER_MS * 4>
                        <p class="dashboard-card__subtitle">"Distribuição de vendas"</p>
                        {query_view(top_channels, 300, |channels| {
                            let data = channel_revenue(&channels);
                            let total: f64 = data.iter().map(|d| d.value).sum();
                            view! {
                                <DonutChart data=data format=CounterFormat::Currency center_label=format_currency(total) />
                            }
                        })}
                    </CardAnimated>
                </div>

                <div class="chart-grid">
                    <CardAnimated title="Top Produtos" delay_ms=STAGGER_MS * 5>
                        <p class="dashboard-card__subtitle">"Mais vendidos no período"</p>
                        {query_view(top_products, 280, |products| view! { <TopProductsList products=products /> })}
                    </CardAnimated>
                    <CardAnimated title="Performance por Canal" delay_ms=STAGGER_MS * 6>
                        <p class="dashboard-card__subtitle">"Receita e participação"</p>
                        {query_view(top_channels, 280, |channels| {
                            let data: Vec<ChartDatum> = channel_revenue(&channels);
                            view! { <BarChart data=data format=CounterFormat::Currency height_px=280 /> }
                        })}
                    </CardAnimated>
                </div>
            </PageFrame>
        </Shell>
    }
}

#[component]
fn TopProductsList(products: Vec<TopProduct>) -> impl IntoView {
    if products.is_empty() {
        return view! { <div class="chart-empty">"Sem vendas no período"</div> }.into_any();
    }
    view! {
        <ol class="ranked-list">
            {products
                .into_iter()
                .enumerate()
                .map(|(i, p)| {
                    view! {
                        <li class="ranked-list__item">
                            <span class="ranked-list__rank">{i + 1}</span>
                            <div class="ranked-list__main">
                                <p class="ranked-list__name">{p.product_name}</p>
                                <p class="ranked-list__meta">{p.category.unwrap_or_default()}</p>
                            </div>
                            <div class="ranked-list__figures">
                                <p class="ranked-list__value">{format_currency(p.revenue)}</p>
                                <p class="ranked-list__meta">{format!("{} vendidos", format_number(p.units_sold as f64))}</p>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_any()
}
