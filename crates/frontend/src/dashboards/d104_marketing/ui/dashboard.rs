use crate::dashboards::d104_marketing::api;
use crate::dashboards::d104_marketing::projections::{
    attribution_chart, funnel_spend, platform_names, platform_revenue, roas_badge_class, spend_revenue_series,
    CampaignTotals,
};
use crate::layout::Shell;
use crate::shared::api_utils::non_empty;
use crate::shared::colors::{DANGER, SUCCESS};
use crate::shared::components::card_animated::STAGGER_MS;
use crate::shared::components::charts::{AreaChart, AreaChartData, AreaSeries, BarChart, DonutChart};
use crate::shared::components::{query_view, CardAnimated, CounterFormat, KpiCard, StatCard};
use crate::shared::formatters::{format_currency, format_number, format_percent, format_roas};
use crate::shared::list_utils::or_dash;
use crate::shared::page_frame::PageFrame;
use crate::shared::query::{use_query, PageLoad, QueryOptions};
use contracts::dashboards::d104_marketing::{CampaignPerformance, PlatformPerformance};
use contracts::shared::period::Period;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MarketingDashboard() -> impl IntoView {
    let period = RwSignal::new(Period::default());
    let platform = RwSignal::new(String::new());

    let campaigns = use_query(
        move || api::campaigns_query(period.get(), non_empty(Some(platform.get()))),
        QueryOptions::default(),
    );
    let platforms = use_query(move || api::roas_by_platform_query(period.get()), QueryOptions::default());
    let spend_revenue = use_query(move || api::spend_revenue_query(period.get()), QueryOptions::default());
    let attribution = use_query(move || api::attribution_query(period.get()), QueryOptions::default());
    let funnel = use_query(move || api::funnel_query(period.get()), QueryOptions::default());

    let loading = Signal::derive(move || PageLoad::any_pending(&[campaigns.is_loading()]));

    let totals = Memo::new(move |_| campaigns.with_data(|c| c.map(|c| CampaignTotals::from_campaigns(c))));
    let total = move |pick: fn(&CampaignTotals) -> f64| Signal::derive(move || totals.get().map(|t| pick(&t)));
    let platform_options = Signal::derive(move || {
        platforms.with_data(|p| p.map(|p| platform_names(p)).unwrap_or_default())
    });

    view! {
        <Shell title="Marketing" subtitle="Performance de campanhas e ROI" period=period loading=loading>
            <PageFrame page_id="d104_marketing--dashboard">
                <div class="kpi-grid">
                    <KpiCard
                        title="Investimento"
                        icon_name="marketing"
                        value=total(|t| t.spend)
                        format=CounterFormat::Currency
                        error=campaigns.error_signal()
                        on_retry=campaigns.retry_callback()
                    />
                    <KpiCard
                        title="Receita Atribuída"
                        icon_name="revenue"
                        value=total(|t| t.revenue)
                        format=CounterFormat::Currency
                        error=campaigns.error_signal()
                        on_retry=campaigns.retry_callback()
                        delay_ms=STAGGER_MS
                    />
                    <KpiCard
                        title="ROAS Geral"
                        icon_name="trending-up"
                        value=total(|t| t.roas())
                        format=CounterFormat::Roas
                        error=campaigns.error_signal()
                        on_retry=campaigns.retry_callback()
                        delay_ms=STAGGER_MS * 2
                    />
                    <KpiCard
                        title="Conversões"
                        icon_name="orders"
                        value=total(|t| t.conversions)
                        format=CounterFormat::Number
                        error=campaigns.error_signal()
                        on_retry=campaigns.retry_callback()
                        delay_ms=STAGGER_MS * 3
                    />
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="CTR"
                        icon_name="search"
                        value=Signal::derive(move || totals.get().map(|t| format_percent(t.ctr(), 2)))
                        delay_ms=STAGGER_MS * 4
                    />
                    <StatCard
                        label="Taxa de Conversão"
                        icon_name="repeat"
                        value=Signal::derive(move || totals.get().map(|t| format_percent(t.cvr(), 2)))
                        delay_ms=STAGGER_MS * 5
                    />
                    <StatCard
                        label="Impressões"
                        icon_name="dashboard"
                        value=Signal::derive(move || totals.get().map(|t| format_number(t.impressions as f64)))
                        delay_ms=STAGGER_MS * 6
                    />
                    <StatCard
                        label="Cliques"
                        icon_name="customers"
                        value=Signal::derive(move || totals.get().map(|t| format_number(t.clicks as f64)))
                        delay_ms=STAGGER_MS * 7
                    />
                </div>

                <div class="chart-grid">
                    <CardAnimated title="Receita por Plataforma" delay_ms=STAGGER_MS * 4>
                        <p class="dashboard-card__subtitle">"Distribuição de receita atribuída"</p>
                        {query_view(platforms, 260, |p| {
                            view! { <DonutChart data=platform_revenue(&p) format=CounterFormat::Currency /> }
                        })}
                    </CardAnimated>
                    <CardAnimated title="Modelo de Atribuição" delay_ms=STAGGER_MS * 5>
                        <p class="dashboard-card__subtitle">"Receita atribuída por canal"</p>
                        {query_view(attribution, 260, |rows| {
                            view! { <DonutChart data=attribution_chart(&rows) format=CounterFormat::Currency /> }
                        })}
                    </CardAnimated>
                </div>

                <CardAnimated title="ROAS por Plataforma" delay_ms=STAGGER_MS * 6>
                    <p class="dashboard-card__subtitle">"Retorno sobre investimento publicitário"</p>
                    {query_view(platforms, 180, |p| view! { <PlatformCards platforms=p /> })}
                </CardAnimated>

                <div class="chart-grid">
                    <CardAnimated title="Investimento vs Receita" delay_ms=STAGGER_MS * 7>
                        <p class="dashboard-card__subtitle">"Evolução temporal"</p>
                        {query_view(spend_revenue, 300, |points| {
                            let (labels, spend, revenue) = spend_revenue_series(&points);
                            let data = AreaChartData {
                                labels,
                                series: vec![
                                    AreaSeries { name: "Investimento".to_string(), color: DANGER, values: spend },
                                    AreaSeries { name: "Receita".to_string(), color: SUCCESS, values: revenue },
                                ],
                                band: None,
                            };
                            view! { <AreaChart data=data /> }
                        })}
                    </CardAnimated>
                    <CardAnimated title="Investimento por Etapa do Funil" delay_ms=STAGGER_MS * 8>
                        <p class="dashboard-card__subtitle">"TOFU, MOFU e BOFU"</p>
                        {query_view(funnel, 300, |stages| {
                            view! { <BarChart data=funnel_spend(&stages) format=CounterFormat::Currency /> }
                        })}
                    </CardAnimated>
                </div>

                <CardAnimated title="Campanhas" delay_ms=STAGGER_MS * 9>
                    <div class="dashboard-card__actions">
                        <Label>"Plataforma"</Label>
                        <Select value=platform>
                            <option value="">"Todas"</option>
                            <For
                                each=move || platform_options.get()
                                key=|p| p.clone()
                                children=move |p| view! { <option value=p.clone()>{p.clone()}</option> }
                            />
                        </Select>
                    </div>
                    {query_view(campaigns, 360, |c| view! { <CampaignTable campaigns=c /> })}
                </CardAnimated>
            </PageFrame>
        </Shell>
    }
}

#[component]
fn PlatformCards(platforms: Vec<PlatformPerformance>) -> impl IntoView {
    if platforms.is_empty() {
        return view! { <div class="chart-empty">"Sem investimento no período"</div> }.into_any();
    }
    view! {
        <div class="platform-grid">
            {platforms
                .into_iter()
                .map(|p| {
                    view! {
                        <div class="platform-card">
                            <div class="platform-card__header">
                                <span class="platform-card__name">{p.platform}</span>
                                <span class=roas_badge_class(p.roas)>{format_roas(p.roas)}</span>
                            </div>
                            <dl class="platform-card__figures">
                                <dt>"Investimento"</dt>
                                <dd>{format_currency(p.spend)}</dd>
                                <dt>"Receita"</dt>
                                <dd class="text-success">{format_currency(p.revenue)}</dd>
                                <dt>"Conversões"</dt>
                                <dd>{format_number(p.conversions)}</dd>
                                <dt>"CPA"</dt>
                                <dd>{p.cpa.map(|v| format_currency(v)).unwrap_or_else(|| "-".to_string())}</dd>
                            </dl>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn CampaignTable(campaigns: Vec<CampaignPerformance>) -> impl IntoView {
    if campaigns.is_empty() {
        return view! { <div class="chart-empty">"Nenhuma campanha no período"</div> }.into_any();
    }
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Campanha"</TableHeaderCell>
                        <TableHeaderCell>"Plataforma"</TableHeaderCell>
                        <TableHeaderCell>"Funil"</TableHeaderCell>
                        <TableHeaderCell>"Investimento"</TableHeaderCell>
                        <TableHeaderCell>"Receita"</TableHeaderCell>
                        <TableHeaderCell>"ROAS"</TableHeaderCell>
                        <TableHeaderCell>"CTR"</TableHeaderCell>
                        <TableHeaderCell>"CPA"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {campaigns
                        .into_iter()
                        .map(|c| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {c.campaign_name.unwrap_or_else(|| format!("Campanha {}", c.campaign_id))}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>{c.platform}</TableCell>
                                    <TableCell>{or_dash(c.funnel_stage)}</TableCell>
                                    <TableCell>{format_currency(c.spend)}</TableCell>
                                    <TableCell>{format_currency(c.revenue)}</TableCell>
                                    <TableCell>
                                        <span class=roas_badge_class(c.roas)>{format_roas(c.roas)}</span>
                                    </TableCell>
                                    <TableCell>{c.ctr.map(|v| format_percent(v, 2)).unwrap_or_else(|| "-".to_string())}</TableCell>
                                    <TableCell>{c.cpa.map(|v| format_currency(v)).unwrap_or_else(|| "-".to_string())}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
    .into_any()
}
