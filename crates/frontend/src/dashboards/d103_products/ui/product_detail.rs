use crate::dashboards::d103_products::api;
use crate::dashboards::d103_products::projections::{abc_badge_style, abc_label};
use crate::shared::components::query_view;
use crate::shared::formatters::{format_currency, format_number, format_percent};
use crate::shared::icons::icon;
use crate::shared::list_utils::or_dash;
use crate::shared::query::{use_query, QueryOptions};
use contracts::dashboards::d103_products::Product;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetail(product_id: i64, on_close: Callback<()>) -> impl IntoView {
    let product = use_query(move || api::product_query(product_id), QueryOptions::default());

    view! {
        <aside class="detail-panel">
            <div class="detail-panel__header">
                <h3 class="detail-panel__title">{format!("Produto #{}", product_id)}</h3>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>
            {query_view(product, 220, |p| view! { <ProductProfile product=p /> })}
        </aside>
    }
}

fn money(value: Option<f64>) -> String {
    value.map(|v| format_currency(v)).unwrap_or_else(|| "-".to_string())
}

#[component]
fn ProductProfile(product: Product) -> impl IntoView {
    let abc = product.abc_classification.map(|c| {
        let style = abc_badge_style(&c);
        view! { <span class="abc-chip" style=style>{abc_label(&c)}</span> }
    });
    let category = match (product.category_level_1, product.category_level_2) {
        (Some(l1), Some(l2)) => format!("{} / {}", l1, l2),
        (l1, l2) => or_dash(l1.or(l2)),
    };

    view! {
        <p class="detail-panel__name">{product.product_name}</p>
        <div class="detail-panel__badges">
            {abc}
            <span class=if product.is_active { "badge badge--success" } else { "badge badge--muted" }>
                {if product.is_active { "Ativo" } else { "Inativo" }}
            </span>
        </div>
        <dl class="detail-list">
            <dt>"ID externo"</dt>
            <dd>{product.external_product_id}</dd>
            <dt>"SKU"</dt>
            <dd>{or_dash(product.sku)}</dd>
            <dt>"Categoria"</dt>
            <dd>{category}</dd>
            <dt>"Marca"</dt>
            <dd>{or_dash(product.brand)}</dd>
            <dt>"Preço atual"</dt>
            <dd>{money(product.current_price)}</dd>
            <dt>"Custo"</dt>
            <dd>{money(product.cost_price)}</dd>
            <dt>"Margem"</dt>
            <dd>{product.margin_percent.map(|m| format_percent(m, 1)).unwrap_or_else(|| "-".to_string())}</dd>
            <dt>"Estoque"</dt>
            <dd>{product.stock_quantity.map(|s| format_number(s as f64)).unwrap_or_else(|| "-".to_string())}</dd>
            <dt>"Unidades vendidas"</dt>
            <dd>{format_number(product.total_units_sold as f64)}</dd>
            <dt>"Receita total"</dt>
            <dd>{format_currency(product.total_revenue)}</dd>
        </dl>
    }
}
