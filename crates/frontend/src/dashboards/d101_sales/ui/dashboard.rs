use crate::dashboards::d101_sales::api;
use crate::dashboards::d101_sales::projections::{
    channel_revenue, comparison_rows, funnel_width, period_series, HeatmapGrid, HOURS, WEEKDAYS,
};
use crate::layout::Shell;
use crate::shared::colors::{palette, with_alpha, PRIMARY};
use crate::shared::components::card_animated::STAGGER_MS;
use crate::shared::components::charts::{AreaChart, AreaChartData, AreaSeries, BarChart};
use crate::shared::components::{query_view, CardAnimated, CounterFormat, GroupBySelector, KpiCard};
use crate::shared::formatters::{format_currency, format_number, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::query::{use_query, PageLoad, QueryOptions};
use contracts::dashboards::d101_sales::{FunnelStage, HeatmapCell, PeriodComparison, SalesOverview};
use contracts::shared::period::{GroupBy, Period};
use leptos::prelude::*;

#[component]
pub fn SalesDashboard() -> impl IntoView {
    let period = RwSignal::new(Period::default());
    let group_by = RwSignal::new(GroupBy::default());

    let overview = use_query(move || api::overview_query(period.get()), QueryOptions::default());
    let by_channel = use_query(move || api::by_channel_query(period.get()), QueryOptions::default());
    let by_period = use_query(
        move || api::by_period_query(group_by.get(), period.get()),
        QueryOptions::default(),
    );
    let funnel = use_query(move || api::funnel_query(period.get()), QueryOptions::default());
    let heatmap = use_query(move || api::heatmap_query(period.get()), QueryOptions::default());
    let comparison = use_query(api::comparison_query, QueryOptions::default());

    let loading = Signal::derive(move || PageLoad::any_pending(&[overview.is_loading()]));

    let current = move |pick: fn(&SalesOverview) -> f64| {
        Signal::derive(move || overview.with_data(|o| o.map(pick)))
    };
    let change = move |pick: fn(&SalesOverview) -> Option<f64>| {
        Signal::derive(move || overview.with_data(|o| o.and_then(pick)))
    };

    view! {
        <Shell title="Vendas" subtitle="Análise detalhada de vendas" period=period loading=loading>
            <PageFrame page_id="d101_sales--dashboard">
                <div class="kpi-grid">
                    <KpiCard
                        title="Receita"
                        icon_name="revenue"
                        value=current(|o| o.current.revenue)
                        change=change(|o| o.changes.revenue)
                        format=CounterFormat::Currency
                        error=overview.error_signal()
                        on_retry=overview.retry_callback()
                    />
                    <KpiCard
                        title="Pedidos"
                        icon_name="orders"
                        value=current(|o| o.current.orders as f64)
                        change=change(|o| o.changes.orders)
                        format=CounterFormat::Number
                        error=overview.error_signal()
                        on_retry=overview.retry_callback()
                        delay_ms=STAGGER_MS
                    />
                    <KpiCard
                        title="Clientes"
                        icon_name="customers"
                        value=current(|o| o.current.customers as f64)
                        change=change(|o| o.changes.customers)
                        format=CounterFormat::Number
                        error=overview.error_signal()
                        on_retry=overview.retry_callback()
                        delay_ms=STAGGER_MS * 2
                    />
                    <KpiCard
                        title="Ticket Médio"
                        icon_name="ticket"
                        value=current(|o| o.current.aov)
                        change=change(|o| o.changes.aov)
                        format=CounterFormat::Currency
                        error=overview.error_signal()
                        on_retry=overview.retry_callback()
                        delay_ms=STAGGER_MS * 3
                    />
                </div>

                <CardAnimated title="Comparativo de Períodos" delay_ms=STAGGER_MS * 4>
                    {query_view(comparison, 96, |c| view! { <ComparisonStrip comparison=c /> })}
                </CardAnimated>

                <CardAnimated title="Receita ao Longo do Tempo" delay_ms=STAGGER_MS * 5>
                    <div class="dashboard-card__actions">
                        <GroupBySelector group_by=group_by />
                    </div>
                    {query_view(by_period, 350, move |buckets| {
                        let (labels, revenue) = period_series(group_by.get_untracked(), &buckets);
                        let data = AreaChartData {
                            labels,
                            series: vec![AreaSeries { name: "Receita".to_string(), color: PRIMARY, values: revenue }],
                            band: None,
                        };
                        view! { <AreaChart data=data /> }
                    })}
                </CardAnimated>

                <div class="chart-grid">
                    <CardAnimated title="Vendas por Canal" delay_ms=STAGGER_MS * 6>
                        <p class="dashboard-card__subtitle">"Distribuição de receita"</p>
                        {query_view(by_channel, 300, |channels| {
                            view! { <BarChart data=channel_revenue(&channels) format=CounterFormat::Currency /> }
                        })}
                    </CardAnimated>
                    <CardAnimated title="Funil de Conversão" delay_ms=STAGGER_MS * 7>
                        <p class="dashboard-card__subtitle">"Jornada do cliente"</p>
                        {query_view(funnel, 300, |stages| view! { <Funnel stages=stages /> })}
                    </CardAnimated>
                </div>

                <CardAnimated title="Pedidos por Dia e Hora" delay_ms=STAGGER_MS * 8>
                    <p class="dashboard-card__subtitle">"Concentração de pedidos na semana"</p>
                    {query_view(heatmap, 240, |cells| view! { <Heatmap cells=cells /> })}
                </CardAnimated>
            </PageFrame>
        </Shell>
    }
}

#[component]
fn ComparisonStrip(comparison: PeriodComparison) -> impl IntoView {
    view! {
        <div class="comparison-grid">
            {comparison_rows(&comparison)
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="comparison-grid__cell">
                            <p class="comparison-grid__label">{row.label}</p>
                            <p class="comparison-grid__value">{format_currency(row.revenue)}</p>
                            <p class="comparison-grid__meta">{format!("{} pedidos", format_number(row.orders as f64))}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Funnel(stages: Vec<FunnelStage>) -> impl IntoView {
    if stages.is_empty() {
        return view! { <div class="chart-empty">"Sem dados para o período"</div> }.into_any();
    }
    view! {
        <div class="funnel">
            {stages
                .into_iter()
                .enumerate()
                .map(|(i, stage)| {
                    let color = palette(i);
                    let style = format!(
                        "width: {:.1}%; background: linear-gradient(90deg, {}, {}); animation-delay: {}ms;",
                        funnel_width(stage.percentage),
                        color,
                        with_alpha(color, "88"),
                        i as u32 * 150
                    );
                    view! {
                        <div class="funnel__row">
                            <span class="funnel__stage">{stage.stage}</span>
                            <div class="funnel__track">
                                <div class="funnel__bar" style=style>
                                    {format_number(stage.count as f64)}
                                </div>
                            </div>
                            <span class="funnel__percent">{format_percent(stage.percentage, 1)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn Heatmap(cells: Vec<HeatmapCell>) -> impl IntoView {
    let grid = HeatmapGrid::from_cells(&cells);
    if grid.max == 0 {
        return view! { <div class="chart-empty">"Sem pedidos no período"</div> }.into_any();
    }
    view! {
        <div class="heatmap">
            <div class="heatmap__row heatmap__row--header">
                <span class="heatmap__day"></span>
                {(0..HOURS)
                    .map(|h| {
                        let label = if h % 3 == 0 { format!("{}h", h) } else { String::new() };
                        view! { <span class="heatmap__hour">{label}</span> }
                    })
                    .collect_view()}
            </div>
            {WEEKDAYS
                .into_iter()
                .enumerate()
                .map(|(day, name)| {
                    let row = (0..HOURS)
                        .map(|hour| {
                            let intensity = grid.intensity(day, hour);
                            let style = format!("background-color: rgba(99, 102, 241, {:.2});", 0.06 + 0.94 * intensity);
                            let title = format!("{} {}h: {} pedidos", name, hour, grid.orders[day][hour]);
                            view! { <span class="heatmap__cell" style=style title=title></span> }
                        })
                        .collect_view();
                    view! {
                        <div class="heatmap__row">
                            <span class="heatmap__day">{name}</span>
                            {row}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
