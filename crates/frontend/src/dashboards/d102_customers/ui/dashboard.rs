use super::customer_detail::CustomerDetail;
use super::customer_list::CustomerList;
use crate::dashboards::d102_customers::api;
use crate::dashboards::d102_customers::projections::{
    channel_chart, cohort_grid, is_paid_channel, retention_style, rfm_chart, COHORT_MONTHS, LTV_ROWS,
};
use crate::layout::Shell;
use crate::shared::colors::{color_for, RFM_SEGMENT_COLORS};
use crate::shared::components::card_animated::STAGGER_MS;
use crate::shared::components::charts::{BarChart, DonutChart};
use crate::shared::components::{query_view, CardAnimated, CounterFormat, KpiCard, StatCard, StatTone};
use crate::shared::formatters::{format_currency, format_number, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::query::{use_query, PageLoad, QueryOptions};
use contracts::dashboards::d102_customers::{CohortCell, CohortLtv, CustomerDistribution, RfmSegment};
use contracts::shared::period::Period;
use leptos::prelude::*;

#[component]
pub fn CustomersDashboard() -> impl IntoView {
    // The customer endpoints are not period-scoped; the selector only
    // keeps the header consistent across pages.
    let period = RwSignal::new(Period::default());
    let selected = RwSignal::new(None::<i64>);

    let distribution = use_query(api::distribution_query, QueryOptions::default());
    let rfm = use_query(api::rfm_segments_query, QueryOptions::default());
    let cohorts = use_query(api::cohort_query, QueryOptions::default());
    let ltv = use_query(api::ltv_by_cohort_query, QueryOptions::default());

    let loading = Signal::derive(move || PageLoad::any_pending(&[distribution.is_loading()]));

    let metric = move |pick: fn(&CustomerDistribution) -> f64| {
        Signal::derive(move || distribution.with_data(|d| d.map(pick)))
    };
    let stat = move |render: fn(&CustomerDistribution) -> String| {
        Signal::derive(move || distribution.with_data(|d| d.map(render)))
    };

    view! {
        <Shell title="Clientes" subtitle="Análise de clientes e segmentação" period=period loading=loading>
            <PageFrame page_id="d102_customers--dashboard">
                <div class="kpi-grid kpi-grid--3">
                    <KpiCard
                        title="Total de Clientes"
                        icon_name="customers"
                        value=metric(|d| d.total_customers as f64)
                        format=CounterFormat::Number
                        error=distribution.error_signal()
                        on_retry=distribution.retry_callback()
                    />
                    <KpiCard
                        title="Novos (30d)"
                        icon_name="trending-up"
                        value=metric(|d| d.new_customers_30d as f64)
                        format=CounterFormat::Number
                        error=distribution.error_signal()
                        on_retry=distribution.retry_callback()
                        delay_ms=STAGGER_MS
                    />
                    <KpiCard
                        title="Taxa de Recompra"
                        icon_name="repeat"
                        value=metric(|d| d.repeat_rate)
                        format=CounterFormat::Percent { decimals: 1 }
                        error=distribution.error_signal()
                        on_retry=distribution.retry_callback()
                        delay_ms=STAGGER_MS * 2
                    />
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Clientes Recorrentes"
                        icon_name="repeat"
                        value=stat(|d| format_number(d.repeat_customers as f64))
                        delay_ms=STAGGER_MS * 3
                    />
                    <StatCard
                        label="Clientes VIP"
                        icon_name="customers"
                        value=stat(|d| format_number(d.vip_customers as f64))
                        tone=StatTone::Good
                        delay_ms=STAGGER_MS * 4
                    />
                    <StatCard
                        label="Churned"
                        icon_name="trending-down"
                        value=stat(|d| format_number(d.churned_customers as f64))
                        delay_ms=STAGGER_MS * 5
                    />
                    <StatCard
                        label="Taxa de Churn"
                        icon_name="alert-triangle"
                        value=stat(|d| format_percent(d.churn_rate, 1))
                        tone=StatTone::Warning
                        delay_ms=STAGGER_MS * 6
                    />
                </div>

                <div class="chart-grid">
                    <CardAnimated title="Segmentação RFM" delay_ms=STAGGER_MS * 4>
                        <p class="dashboard-card__subtitle">"Distribuição de clientes por segmento"</p>
                        {query_view(rfm, 260, |segments| view! { <RfmBreakdown segments=segments /> })}
                    </CardAnimated>
                    <CardAnimated title="Aquisição por Canal" delay_ms=STAGGER_MS * 5>
                        <p class="dashboard-card__subtitle">"Origem dos clientes"</p>
                        {query_view(distribution, 260, |d| {
                            view! { <BarChart data=channel_chart(&d.by_channel) format=CounterFormat::Currency /> }
                        })}
                    </CardAnimated>
                </div>

                <CardAnimated title="Análise de Cohort" delay_ms=STAGGER_MS * 6>
                    <p class="dashboard-card__subtitle">"Retenção de clientes por mês de aquisição"</p>
                    {query_view(cohorts, 260, |cells| view! { <CohortTable cells=cells /> })}
                </CardAnimated>

                <CardAnimated title="LTV por Cohort e Canal" delay_ms=STAGGER_MS * 7>
                    <p class="dashboard-card__subtitle">"Valor vitalício por mês de aquisição"</p>
                    {query_view(ltv, 300, |rows| view! { <LtvTable rows=rows /> })}
                </CardAnimated>

                <CardAnimated title="Clientes" delay_ms=STAGGER_MS * 8>
                    <div class="list-with-detail">
                        <CustomerList selected=selected />
                        {move || selected.get().map(|id| {
                            view! {
                                <CustomerDetail
                                    customer_id=id
                                    on_close=Callback::new(move |_| selected.set(None))
                                />
                            }
                        })}
                    </div>
                </CardAnimated>
            </PageFrame>
        </Shell>
    }
}

#[component]
fn RfmBreakdown(segments: Vec<RfmSegment>) -> impl IntoView {
    let data = rfm_chart(&segments);
    let total: u64 = segments.iter().map(|s| s.count).sum();
    view! {
        <div class="split">
            <DonutChart data=data format=CounterFormat::Number center_label=format_number(total as f64) />
            <ul class="legend-list">
                {segments
                    .into_iter()
                    .enumerate()
                    .map(|(i, s)| {
                        let swatch = format!("background-color: {};", color_for(&s.segment, i, RFM_SEGMENT_COLORS));
                        view! {
                            <li class="legend-list__item">
                                <span class="legend-list__swatch" style=swatch></span>
                                <span class="legend-list__name">{s.segment}</span>
                                <span class="legend-list__value">
                                    {format!("{} ({})", format_number(s.count as f64), format_percent(s.percentage, 1))}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn CohortTable(cells: Vec<CohortCell>) -> impl IntoView {
    let rows = cohort_grid(&cells);
    if rows.is_empty() {
        return view! { <div class="chart-empty">"Sem cohorts disponíveis"</div> }.into_any();
    }
    view! {
        <div class="table-wrapper">
            <table class="cohort-table">
                <thead>
                    <tr>
                        <th>"Cohort"</th>
                        <th>"Tamanho"</th>
                        {(0..COHORT_MONTHS).map(|m| view! { <th>{format!("Mês {}", m)}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td class="cohort-table__month">{row.label}</td>
                                    <td class="cohort-table__size">{format_number(row.cohort_size as f64)}</td>
                                    {row
                                        .retention
                                        .into_iter()
                                        .map(|rate| {
                                            view! {
                                                <td>
                                                    <span class="cohort-table__cell" style=retention_style(rate)>
                                                        {format!("{:.0}%", rate)}
                                                    </span>
                                                </td>
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

#[component]
fn LtvTable(rows: Vec<CohortLtv>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Cohort"</th>
                        <th>"Canal"</th>
                        <th class="num">"Clientes"</th>
                        <th class="num">"LTV Médio"</th>
                        <th class="num">"Pedidos Médios"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .take(LTV_ROWS)
                        .map(|row| {
                            let badge = if is_paid_channel(row.acquisition_channel.as_deref()) {
                                "badge badge--primary"
                            } else {
                                "badge badge--muted"
                            };
                            view! {
                                <tr>
                                    <td>{row.cohort_month}</td>
                                    <td>
                                        <span class=badge>{row.acquisition_channel.unwrap_or_else(|| "N/A".to_string())}</span>
                                    </td>
                                    <td class="num">{format_number(row.cohort_size as f64)}</td>
                                    <td class="num">{format_currency(row.avg_ltv)}</td>
                                    <td class="num">{format!("{:.1}", row.avg_orders)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
