use super::product_detail::ProductDetail;
use super::product_list::ProductList;
use crate::dashboards::d103_products::api;
use crate::dashboards::d103_products::projections::{
    abc_badge_style, abc_chart, category_chart, days_of_stock_label, stock_counters, stock_status_class, STOCK_ROWS,
};
use crate::layout::Shell;
use crate::shared::components::card_animated::STAGGER_MS;
use crate::shared::components::charts::{BarChart, DonutChart};
use crate::shared::components::{query_view, CardAnimated, CounterFormat};
use crate::shared::formatters::{change_direction, format_change, format_currency, format_number, format_percent};
use crate::shared::list_utils::or_dash;
use crate::shared::page_frame::PageFrame;
use crate::shared::query::{use_query, PageLoad, QueryOptions};
use contracts::dashboards::d103_products::{AbcTier, ProductTrend, StockAnalysis, TopPerformer};
use contracts::shared::period::Period;
use leptos::prelude::*;

#[component]
pub fn ProductsDashboard() -> impl IntoView {
    let period = RwSignal::new(Period::default());
    let selected = RwSignal::new(None::<i64>);

    let abc = use_query(api::abc_query, QueryOptions::default());
    let top = use_query(move || api::top_performers_query(period.get()), QueryOptions::default());
    let by_category = use_query(move || api::by_category_query(period.get()), QueryOptions::default());
    let trends = use_query(move || api::trends_query(period.get()), QueryOptions::default());
    let stock = use_query(api::stock_query, QueryOptions::default());

    let loading = Signal::derive(move || PageLoad::any_pending(&[abc.is_loading()]));
    let categories = Signal::derive(move || by_category.data().unwrap_or_default());

    view! {
        <Shell title="Produtos" subtitle="Performance e análise de produtos" period=period loading=loading>
            <PageFrame page_id="d103_products--dashboard">
                {query_view(abc, 140, |tiers| view! { <AbcCards tiers=tiers /> })}

                <div class="chart-grid">
                    <CardAnimated title="Curva ABC" delay_ms=STAGGER_MS * 3>
                        <p class="dashboard-card__subtitle">"Distribuição de receita por classificação"</p>
                        {query_view(abc, 260, |tiers| {
                            view! { <DonutChart data=abc_chart(&tiers) format=CounterFormat::Currency /> }
                        })}
                    </CardAnimated>
                    <CardAnimated title="Receita por Categoria" delay_ms=STAGGER_MS * 4>
                        <p class="dashboard-card__subtitle">"Top categorias por faturamento"</p>
                        {query_view(by_category, 260, |categories| {
                            view! { <BarChart data=category_chart(&categories) format=CounterFormat::Currency /> }
                        })}
                    </CardAnimated>
                </div>

                <CardAnimated title="Top Produtos" delay_ms=STAGGER_MS * 5>
                    <p class="dashboard-card__subtitle">"Produtos com melhor performance no período"</p>
                    {query_view(top, 320, |products| view! { <TopPerformersTable products=products /> })}
                </CardAnimated>

                <div class="chart-grid">
                    <CardAnimated title="Produtos em Alta" delay_ms=STAGGER_MS * 6>
                        <p class="dashboard-card__subtitle">"Maior crescimento no período"</p>
                        {query_view(trends, 240, |t| view! { <TrendList products=t.trending /> })}
                    </CardAnimated>
                    <CardAnimated title="Produtos em Queda" delay_ms=STAGGER_MS * 7>
                        <p class="dashboard-card__subtitle">"Maior declínio no período"</p>
                        {query_view(trends, 240, |t| view! { <TrendList products=t.declining /> })}
                    </CardAnimated>
                </div>

                <CardAnimated title="Análise de Estoque" delay_ms=STAGGER_MS * 8>
                    <p class="dashboard-card__subtitle">"Status de estoque vs velocidade de venda"</p>
                    {query_view(stock, 320, |analysis| view! { <StockPanel analysis=analysis /> })}
                </CardAnimated>

                <CardAnimated title="Catálogo" delay_ms=STAGGER_MS * 9>
                    <div class="list-with-detail">
                        <ProductList selected=selected categories=categories />
                        {move || selected.get().map(|id| {
                            view! {
                                <ProductDetail
                                    product_id=id
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
fn AbcCards(tiers: Vec<AbcTier>) -> impl IntoView {
    view! {
        <div class="abc-grid">
            {tiers
                .into_iter()
                .enumerate()
                .map(|(i, tier)| {
                    let chip = abc_badge_style(&tier.classification);
                    let badge = match tier.classification.as_str() {
                        "A" => "badge badge--success",
                        "B" => "badge badge--warning",
                        _ => "badge badge--danger",
                    };
                    view! {
                        <CardAnimated delay_ms={STAGGER_MS * i as u32}>
                            <div class="abc-card__header">
                                <span class="abc-card__chip" style=chip>{tier.classification.clone()}</span>
                                <span class=badge>{format!("{:.0}% da receita", tier.revenue_percentage)}</span>
                            </div>
                            <p class="abc-card__value">{format_currency(tier.revenue)}</p>
                            <p class="abc-card__meta">
                                {format!(
                                    "{} produtos ({:.0}% acumulado)",
                                    format_number(tier.product_count as f64),
                                    tier.cumulative_percentage
                                )}
                            </p>
                        </CardAnimated>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TopPerformersTable(products: Vec<TopPerformer>) -> impl IntoView {
    if products.is_empty() {
        return view! { <div class="chart-empty">"Sem vendas no período"</div> }.into_any();
    }
    view! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Produto"</th>
                        <th>"Categoria"</th>
                        <th>"ABC"</th>
                        <th class="num">"Unidades"</th>
                        <th class="num">"Receita"</th>
                        <th class="num">"Margem"</th>
                    </tr>
                </thead>
                <tbody>
                    {products
                        .into_iter()
                        .map(|p| {
                            let abc = p.abc_classification.map(|c| {
                                let style = abc_badge_style(&c);
                                view! { <span class="abc-chip" style=style>{c}</span> }
                            });
                            view! {
                                <tr>
                                    <td><span class="rank-chip">{p.rank}</span></td>
                                    <td class="data-table__strong">{p.product_name}</td>
                                    <td>{or_dash(p.category)}</td>
                                    <td>{abc}</td>
                                    <td class="num">{format_number(p.units_sold as f64)}</td>
                                    <td class="num">{format_currency(p.revenue)}</td>
                                    <td class="num">{format_percent(p.margin_percent, 1)}</td>
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
fn TrendList(products: Vec<ProductTrend>) -> impl IntoView {
    if products.is_empty() {
        return view! { <div class="chart-empty">"Nenhum produto no período"</div> }.into_any();
    }
    view! {
        <ol class="ranked-list">
            {products
                .into_iter()
                .enumerate()
                .map(|(i, p)| {
                    let direction = change_direction(p.change_percent);
                    view! {
                        <li class="ranked-list__item">
                            <span class="ranked-list__rank">{i + 1}</span>
                            <div class="ranked-list__main">
                                <p class="ranked-list__name">{p.product_name}</p>
                                <p class="ranked-list__meta">{or_dash(p.category)}</p>
                            </div>
                            <div class="ranked-list__figures">
                                <p class="ranked-list__value">{format_currency(p.second_half_revenue)}</p>
                                <p class=direction.css_class()>
                                    {format_change(p.change_percent)}
                                </p>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_any()
}

#[component]
fn StockPanel(analysis: StockAnalysis) -> impl IntoView {
    let counters = stock_counters(&analysis.summary);
    view! {
        <div class="stock-summary">
            {counters
                .into_iter()
                .map(|(status, count)| {
                    view! {
                        <div class="stock-summary__item">
                            <span class=stock_status_class(status)>{status.label()}</span>
                            <span class="stock-summary__count">{format_number(count as f64)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Produto"</th>
                        <th class="num">"Estoque"</th>
                        <th class="num">"Vendas/dia"</th>
                        <th class="num">"Dias de estoque"</th>
                        <th class="num">"Valor"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {analysis
                        .products
                        .into_iter()
                        .take(STOCK_ROWS)
                        .map(|item| {
                            view! {
                                <tr>
                                    <td class="data-table__strong">{item.product_name}</td>
                                    <td class="num">{format_number(item.stock_quantity as f64)}</td>
                                    <td class="num">{format!("{:.1}", item.daily_velocity)}</td>
                                    <td class="num">{days_of_stock_label(item.days_of_stock)}</td>
                                    <td class="num">{format_currency(item.stock_value)}</td>
                                    <td><span class=stock_status_class(item.status)>{item.status.label()}</span></td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
