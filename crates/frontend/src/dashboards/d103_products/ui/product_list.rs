use crate::dashboards::d103_products::api;
use crate::dashboards::d103_products::projections::{abc_badge_style, abc_label, ABC_CLASSES};
use crate::shared::api_utils::non_empty;
use crate::shared::components::filter_panel::{active_filter_count, debounced_search, FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::query_view;
use crate::shared::formatters::{format_currency, format_number, format_percent};
use crate::shared::list_utils::{highlight_matches, or_dash, row_class};
use crate::shared::query::{use_query, QueryOptions};
use contracts::dashboards::d103_products::{CategorySales, Product, ProductFilter};
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Paginated product table. `categories` feeds the category select.
#[component]
pub fn ProductList(
    selected: RwSignal<Option<i64>>,
    #[prop(into)]
    categories: Signal<Vec<CategorySales>>,
) -> impl IntoView {
    let page = RwSignal::new(PageRequest::default());
    let is_expanded = RwSignal::new(false);
    let category = RwSignal::new(String::new());
    let abc = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());
    let search = debounced_search(search_input);

    let filter = Memo::new(move |_| ProductFilter {
        category: non_empty(Some(category.get())),
        abc: non_empty(Some(abc.get())),
        search: non_empty(Some(search.get())),
    });

    Effect::new(move |prev: Option<ProductFilter>| {
        let current = filter.get();
        if prev.is_some_and(|p| p != current) {
            page.update(|p| *p = PageRequest::new(1, p.limit));
        }
        current
    });

    let list = use_query(move || api::list_query(page.get(), filter.get()), QueryOptions::default());

    let total_pages = Signal::derive(move || list.with_data(|l| l.map(|l| l.pages).unwrap_or(1)));
    let total_count = Signal::derive(move || list.with_data(|l| l.map(|l| l.total).unwrap_or(0)));
    let active_count = Signal::derive(move || {
        filter.with(|f| active_filter_count([&f.category, &f.abc, &f.search]))
    });
    let category_names = Signal::derive(move || {
        categories.with(|c| c.iter().filter_map(|c| c.category.clone()).collect::<Vec<_>>())
    });

    let pager: ChildrenFn = Arc::new(move || {
        view! {
            <PaginationControls
                page=Signal::derive(move || page.get().page)
                total_pages=total_pages
                total_count=total_count
                page_size=Signal::derive(move || page.get().limit)
                on_page_change=Callback::new(move |p: u32| page.update(|r| *r = PageRequest::new(p, r.limit)))
                on_page_size_change=Callback::new(move |size: u32| page.set(PageRequest::new(1, size)))
            />
        }
        .into_any()
    });

    let fields: ChildrenFn = Arc::new(move || {
        view! {
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div class="filter-field">
                    <Label>"Categoria"</Label>
                    <Select value=category>
                        <option value="">"Todas"</option>
                        <For
                            each=move || category_names.get()
                            key=|c| c.clone()
                            children=move |c| view! { <option value=c.clone()>{c.clone()}</option> }
                        />
                    </Select>
                </div>
                <div class="filter-field">
                    <Label>"Curva ABC"</Label>
                    <Select value=abc>
                        <option value="">"Todas"</option>
                        {ABC_CLASSES
                            .into_iter()
                            .map(|c| view! { <option value=c>{abc_label(c)}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="filter-field filter-field--wide">
                    <Label>"Busca"</Label>
                    <Input value=search_input placeholder="Nome ou SKU" />
                </div>
            </Flex>
        }
        .into_any()
    });

    let tags: ChildrenFn = Arc::new(move || {
        let f = filter.get();
        view! {
            {f.category.map(|c| view! {
                <FilterTag label=format!("Categoria: {}", c) on_remove=Callback::new(move |_| category.set(String::new())) />
            })}
            {f.abc.map(|a| view! {
                <FilterTag label=abc_label(&a) on_remove=Callback::new(move |_| abc.set(String::new())) />
            })}
            {f.search.map(|q| view! {
                <FilterTag label=format!("Busca: {}", q) on_remove=Callback::new(move |_| search_input.set(String::new())) />
            })}
        }
        .into_any()
    });

    view! {
        <div class="product-list">
            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=active_count
                pagination_controls=pager
                filter_content=fields
                filter_tags=tags
            />
            {query_view(list, 420, move |data| {
                view! { <ProductTable products=data.items selected=selected search=search.get_untracked() /> }
            })}
        </div>
    }
}

#[component]
fn ProductTable(products: Vec<Product>, selected: RwSignal<Option<i64>>, search: String) -> impl IntoView {
    if products.is_empty() {
        return view! { <div class="chart-empty">"Nenhum produto encontrado"</div> }.into_any();
    }
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Produto"</TableHeaderCell>
                        <TableHeaderCell>"SKU"</TableHeaderCell>
                        <TableHeaderCell>"Categoria"</TableHeaderCell>
                        <TableHeaderCell>"ABC"</TableHeaderCell>
                        <TableHeaderCell>"Preço"</TableHeaderCell>
                        <TableHeaderCell>"Margem"</TableHeaderCell>
                        <TableHeaderCell>"Estoque"</TableHeaderCell>
                        <TableHeaderCell>"Vendidos"</TableHeaderCell>
                        <TableHeaderCell>"Receita"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {products
                        .into_iter()
                        .map(|p| {
                            let id = p.product_id;
                            let name = highlight_matches(&p.product_name, &search);
                            let sku = highlight_matches(&or_dash(p.sku), &search);
                            let abc = p.abc_classification.map(|c| {
                                let style = abc_badge_style(&c);
                                view! { <span class="abc-chip" style=style>{c}</span> }
                            });
                            view! {
                                <TableRow
                                    attr:class=move || row_class(selected.get() == Some(id))
                                    on:click=move |_| selected.set(Some(id))
                                >
                                    <TableCell>
                                        <TableCellLayout truncate=true>{name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{sku}</TableCell>
                                    <TableCell>{or_dash(p.category_level_1)}</TableCell>
                                    <TableCell>{abc}</TableCell>
                                    <TableCell>{p.current_price.map(|v| format_currency(v)).unwrap_or_else(|| "-".to_string())}</TableCell>
                                    <TableCell>{p.margin_percent.map(|m| format_percent(m, 1)).unwrap_or_else(|| "-".to_string())}</TableCell>
                                    <TableCell>{p.stock_quantity.map(|s| format_number(s as f64)).unwrap_or_else(|| "-".to_string())}</TableCell>
                                    <TableCell>{format_number(p.total_units_sold as f64)}</TableCell>
                                    <TableCell>{format_currency(p.total_revenue)}</TableCell>
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
