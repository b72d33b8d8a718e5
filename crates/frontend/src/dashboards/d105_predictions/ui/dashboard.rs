use crate::dashboards::d105_predictions::api;
use crate::dashboards::d105_predictions::projections::{
    avg_daily_revenue, churn_chart, customers_at_risk, forecast_chart, priority_badge_style, priority_color,
    signed_percent, sorted_recommendations, top_high_risk, DEFAULT_FORECAST_DAYS, FORECAST_DAY_OPTIONS, PRICE_RANGE,
    SPEND_RANGE,
};
use crate::layout::Shell;
use crate::shared::colors::with_alpha;
use crate::shared::components::card_animated::STAGGER_MS;
use crate::shared::components::charts::{AreaChart, BarChart, BarOrientation};
use crate::shared::components::{query_view, CardAnimated, CounterFormat, KpiCard, SpotlightCard};
use crate::shared::formatters::{change_direction, format_change, format_currency, format_number};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::query::{use_query, PageLoad, QueryOptions};
use contracts::dashboards::d105_predictions::{AtRiskCustomer, Recommendation, SimulationRequest, SimulationResult};
use contracts::shared::period::Period;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn PredictionsDashboard() -> impl IntoView {
    // Predictions are not period-scoped; the selector only keeps the header uniform.
    let period = RwSignal::new(Period::default());
    let days_input = RwSignal::new(DEFAULT_FORECAST_DAYS.to_string());
    let days = Memo::new(move |_| days_input.get().parse().unwrap_or(DEFAULT_FORECAST_DAYS));

    let forecast = use_query(move || api::forecast_query(days.get()), QueryOptions::default());
    let churn = use_query(api::churn_query, QueryOptions::default());
    let recommendations = use_query(api::recommendations_query, QueryOptions::default());

    let loading = Signal::derive(move || PageLoad::any_pending(&[forecast.is_loading()]));

    let total_predicted =
        Signal::derive(move || forecast.with_data(|f| f.map(|f| f.summary.total_predicted_revenue)));
    let yoy_change = Signal::derive(move || forecast.with_data(|f| f.and_then(|f| f.summary.yoy_change)));
    let avg_daily = Signal::derive(move || forecast.with_data(|f| f.map(|f| avg_daily_revenue(f))));
    let at_risk = Signal::derive(move || churn.with_data(|c| c.map(|c| customers_at_risk(&c.summary) as f64)));
    let revenue_at_risk = Signal::derive(move || churn.with_data(|c| c.map(|c| c.summary.total_revenue_at_risk)));

    view! {
        <Shell title="Previsões" subtitle="Análise preditiva e simulação de cenários" period=period loading=loading>
            <PageFrame page_id="d105_predictions--dashboard">
                <div class="kpi-grid">
                    <KpiCard
                        title="Receita Prevista"
                        icon_name="predictions"
                        value=total_predicted
                        format=CounterFormat::Currency
                        error=forecast.error_signal()
                        on_retry=forecast.retry_callback()
                        change=yoy_change
                        change_label="vs ano anterior"
                    />
                    <KpiCard
                        title="Média Diária Prevista"
                        icon_name="trending-up"
                        value=avg_daily
                        format=CounterFormat::Currency
                        error=forecast.error_signal()
                        on_retry=forecast.retry_callback()
                        delay_ms=STAGGER_MS
                    />
                    <KpiCard
                        title="Clientes em Risco"
                        icon_name="alert-triangle"
                        value=at_risk
                        format=CounterFormat::Number
                        error=churn.error_signal()
                        on_retry=churn.retry_callback()
                        delay_ms=STAGGER_MS * 2
                    />
                    <KpiCard
                        title="Receita em Risco"
                        icon_name="trending-down"
                        value=revenue_at_risk
                        format=CounterFormat::Currency
                        error=churn.error_signal()
                        on_retry=churn.retry_callback()
                        delay_ms=STAGGER_MS * 3
                    />
                </div>

                <CardAnimated title="Previsão de Vendas" delay_ms=STAGGER_MS * 4>
                    <div class="dashboard-card__actions">
                        <Label>"Horizonte"</Label>
                        <Select value=days_input>
                            {FORECAST_DAY_OPTIONS
                                .iter()
                                .map(|d| view! { <option value=d.to_string()>{format!("{} dias", d)}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                    {query_view(forecast, 350, |f| {
                        let training_days = f.model_info.training_days;
                        let method = f.model_info.method.clone();
                        let data = forecast_chart(&f);
                        view! {
                            <p class="dashboard-card__subtitle">
                                {format!("Base de dados: {} dias de histórico", training_days)}
                                {(!method.is_empty()).then(|| format!(" | Modelo: {}", method))}
                            </p>
                            <AreaChart data=data />
                        }
                    })}
                </CardAnimated>

                <div class="chart-grid">
                    <CardAnimated title="Risco de Churn" delay_ms=STAGGER_MS * 5>
                        <p class="dashboard-card__subtitle">"Clientes com probabilidade de abandono"</p>
                        {query_view(churn, 260, |c| {
                            view! {
                                <BarChart
                                    data=churn_chart(&c.summary)
                                    format=CounterFormat::Number
                                    orientation=BarOrientation::Horizontal
                                    height_px=120
                                />
                                <AtRiskList customers=top_high_risk(&c) />
                            }
                        })}
                    </CardAnimated>
                    <CardAnimated title="Recomendações" delay_ms=STAGGER_MS * 6>
                        <p class="dashboard-card__subtitle">"Sugestões baseadas em dados"</p>
                        {query_view(recommendations, 260, |r| {
                            view! { <RecommendationList recommendations=sorted_recommendations(&r.recommendations) /> }
                        })}
                    </CardAnimated>
                </div>

                <ScenarioSimulator delay_ms=STAGGER_MS * 7 />
            </PageFrame>
        </Shell>
    }
}

#[component]
fn AtRiskList(customers: Vec<AtRiskCustomer>) -> impl IntoView {
    if customers.is_empty() {
        return view! { <div class="chart-empty">"Nenhum cliente em alto risco"</div> }.into_any();
    }
    view! {
        <ul class="risk-list">
            {customers
                .into_iter()
                .map(|c| {
                    let name = if c.external_id.is_empty() {
                        format!("Cliente #{}", c.customer_id)
                    } else {
                        format!("Cliente #{}", c.external_id)
                    };
                    view! {
                        <li class="risk-list__item">
                            <span class="risk-list__icon">{icon("alert-circle")}</span>
                            <div class="risk-list__body">
                                <span class="risk-list__name">{name}</span>
                                <span class="risk-list__meta">
                                    {format!("{} dias sem comprar", c.days_since_last_order)}
                                </span>
                            </div>
                            <div class="risk-list__figures">
                                <span class="badge badge--danger">{format!("Score: {}", format_number(c.risk_score))}</span>
                                <span class="risk-list__meta">{format!("LTV: {}", format_currency(c.total_revenue))}</span>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn RecommendationList(recommendations: Vec<Recommendation>) -> impl IntoView {
    if recommendations.is_empty() {
        return view! { <div class="chart-empty">"Nenhuma recomendação no momento"</div> }.into_any();
    }
    view! {
        <div class="recommendation-list">
            {recommendations
                .into_iter()
                .map(|rec| {
                    let color = priority_color(rec.priority);
                    let icon_style = format!("background: {}; color: {};", with_alpha(color, "20"), color);
                    view! {
                        <SpotlightCard class="recommendation" color=color>
                            <div class="recommendation__icon" style=icon_style>{icon("trending-up")}</div>
                            <div class="recommendation__body">
                                <div class="recommendation__header">
                                    <h4 class="recommendation__title">{rec.title}</h4>
                                    <span class="badge" style=priority_badge_style(rec.priority)>
                                        {rec.priority.label()}
                                    </span>
                                </div>
                                <p class="recommendation__description">{rec.description}</p>
                                <div class="recommendation__footer">
                                    <span class="recommendation__impact">{format!("Impacto: {}", rec.potential_impact)}</span>
                                    <span class="recommendation__category">{rec.category}</span>
                                </div>
                                <p class="recommendation__action">{rec.action}</p>
                            </div>
                        </SpotlightCard>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// What-if form. Each run posts to the server; results are kept only in this view.
#[component]
fn ScenarioSimulator(#[prop(optional)] delay_ms: u32) -> impl IntoView {
    let spend = RwSignal::new(0_i32);
    let price = RwSignal::new(0_i32);
    let pending = RwSignal::new(false);
    let result = RwSignal::new(None::<SimulationResult>);
    let error = RwSignal::new(None::<String>);

    let run = move |_| {
        if pending.get_untracked() {
            return;
        }
        let request = SimulationRequest {
            spend_increase: f64::from(spend.get_untracked()),
            price_change: f64::from(price.get_untracked()),
        };
        pending.set(true);
        error.set(None);
        spawn_local(async move {
            match api::simulate(request).await {
                Ok(outcome) => {
                    result.try_set(Some(outcome));
                }
                Err(err) => {
                    log::warn!("scenario simulation failed: {}", err);
                    error.try_set(Some(err.to_string()));
                }
            }
            pending.try_set(false);
        });
    };

    view! {
        <CardAnimated title="Simulador de Cenários" delay_ms=delay_ms>
            <p class="dashboard-card__subtitle">"Projete o impacto de mudanças estratégicas"</p>
            <div class="simulator">
                <div class="simulator__inputs">
                    <PercentSlider label="Variação no Investimento em Ads (%)" value=spend range=SPEND_RANGE />
                    <PercentSlider label="Variação de Preço (%)" value=price range=PRICE_RANGE />
                    <Button appearance=ButtonAppearance::Primary on_click=run disabled=pending>
                        {move || if pending.get() { "Simulando..." } else { "Simular Cenário" }}
                    </Button>
                    {move || error.get().map(|e| view! { <div class="simulator__error">{e}</div> })}
                </div>
                <div class="simulator__result">
                    {move || match result.get() {
                        Some(r) => view! { <SimulationSummary result=r /> }.into_any(),
                        None => {
                            view! {
                                <div class="chart-empty">"Ajuste os parâmetros e clique em Simular Cenário"</div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </CardAnimated>
    }
}

#[component]
fn PercentSlider(label: &'static str, value: RwSignal<i32>, range: (i32, i32)) -> impl IntoView {
    let (min, max) = range;
    let value_class = move || if value.get() >= 0 { "text-success" } else { "text-danger" };

    view! {
        <div class="simulator__field">
            <label class="simulator__label">{label}</label>
            <input
                type="range"
                min=min.to_string()
                max=max.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<i32>() {
                        value.set(v.clamp(min, max));
                    }
                }
            />
            <div class="simulator__scale">
                <span>{format!("{}%", min)}</span>
                <span class=value_class>{move || signed_percent(f64::from(value.get()))}</span>
                <span>{format!("+{}%", max)}</span>
            </div>
        </div>
    }
}

#[component]
fn SimulationSummary(result: SimulationResult) -> impl IntoView {
    let SimulationResult { baseline, simulated, notes } = result;
    let revenue_change = simulated.revenue_change_pct;
    let orders_change = simulated.orders_change_pct;

    view! {
        <table class="simulator__table">
            <thead>
                <tr>
                    <th></th>
                    <th>"Atual"</th>
                    <th>"Simulado"</th>
                    <th>"Variação"</th>
                </tr>
            </thead>
            <tbody>
                <tr>
                    <td>"Receita"</td>
                    <td>{format_currency(baseline.revenue)}</td>
                    <td>{format_currency(simulated.revenue)}</td>
                    <td class=change_direction(revenue_change).css_class()>{format_change(revenue_change)}</td>
                </tr>
                <tr>
                    <td>"Pedidos"</td>
                    <td>{format_number(baseline.orders as f64)}</td>
                    <td>{format_number(simulated.orders as f64)}</td>
                    <td class=change_direction(orders_change).css_class()>{format_change(orders_change)}</td>
                </tr>
                <tr>
                    <td>"Ticket Médio"</td>
                    <td>{format_currency(baseline.aov)}</td>
                    <td>{format_currency(simulated.aov)}</td>
                    <td></td>
                </tr>
            </tbody>
        </table>
        {(!notes.is_empty())
            .then(|| {
                view! {
                    <ul class="simulator__notes">
                        {notes.into_iter().map(|n| view! { <li>{n}</li> }).collect_view()}
                    </ul>
                }
            })}
    }
}
