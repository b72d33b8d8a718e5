use crate::dashboards::d102_customers::api;
use crate::dashboards::d102_customers::projections::{customer_badges, customer_location};
use crate::shared::colors::{CHANNEL_COLORS, RFM_SEGMENT_COLORS};
use crate::shared::api_utils::non_empty;
use crate::shared::components::filter_panel::{active_filter_count, debounced_search, FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::query_view;
use crate::shared::formatters::{format_currency, format_number};
use crate::shared::list_utils::{highlight_matches, or_dash, row_class};
use crate::shared::query::{use_query, QueryOptions};
use contracts::dashboards::d102_customers::{Customer, CustomerFilter};
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Paginated customer table. Clicking a row selects the customer.
#[component]
pub fn CustomerList(selected: RwSignal<Option<i64>>) -> impl IntoView {
    let page = RwSignal::new(PageRequest::default());
    let is_expanded = RwSignal::new(false);
    let segment = RwSignal::new(String::new());
    let channel = RwSignal::new(String::new());
    let search_input = RwSignal::new(String::new());
    let search = debounced_search(search_input);

    let filter = Memo::new(move |_| CustomerFilter {
        segment: non_empty(Some(segment.get())),
        channel: non_empty(Some(channel.get())),
        search: non_empty(Some(search.get())),
    });

    // Any filter change starts over from the first page.
    Effect::new(move |prev: Option<CustomerFilter>| {
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
        filter.with(|f| active_filter_count([&f.segment, &f.channel, &f.search]))
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
                    <Label>"Segmento"</Label>
                    <Select value=segment>
                        <option value="">"Todos"</option>
                        {RFM_SEGMENT_COLORS
                            .iter()
                            .map(|(name, _)| view! { <option value=*name>{*name}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="filter-field">
                    <Label>"Canal"</Label>
                    <Select value=channel>
                        <option value="">"Todos"</option>
                        {CHANNEL_COLORS
                            .iter()
                            .map(|(name, _)| view! { <option value=*name>{*name}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="filter-field filter-field--wide">
                    <Label>"Busca"</Label>
                    <Input value=search_input placeholder="ID, cidade ou estado" />
                </div>
            </Flex>
        }
        .into_any()
    });

    let tags: ChildrenFn = Arc::new(move || {
        let f = filter.get();
        view! {
            {f.segment.map(|s| view! {
                <FilterTag label=format!("Segmento: {}", s) on_remove=Callback::new(move |_| segment.set(String::new())) />
            })}
            {f.channel.map(|c| view! {
                <FilterTag label=format!("Canal: {}", c) on_remove=Callback::new(move |_| channel.set(String::new())) />
            })}
            {f.search.map(|q| view! {
                <FilterTag label=format!("Busca: {}", q) on_remove=Callback::new(move |_| search_input.set(String::new())) />
            })}
        }
        .into_any()
    });

    view! {
        <div class="customer-list">
            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=active_count
                pagination_controls=pager
                filter_content=fields
                filter_tags=tags
            />
            {query_view(list, 420, move |data| {
                view! { <CustomerTable customers=data.items selected=selected search=search.get_untracked() /> }
            })}
        </div>
    }
}

#[component]
fn CustomerTable(customers: Vec<Customer>, selected: RwSignal<Option<i64>>, search: String) -> impl IntoView {
    if customers.is_empty() {
        return view! { <div class="chart-empty">"Nenhum cliente encontrado"</div> }.into_any();
    }
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Cliente"</TableHeaderCell>
                        <TableHeaderCell>"Local"</TableHeaderCell>
                        <TableHeaderCell>"Segmento"</TableHeaderCell>
                        <TableHeaderCell>"Canal"</TableHeaderCell>
                        <TableHeaderCell>"Pedidos"</TableHeaderCell>
                        <TableHeaderCell>"Receita"</TableHeaderCell>
                        <TableHeaderCell>"Ticket Médio"</TableHeaderCell>
                        <TableHeaderCell>"Dias sem comprar"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {customers
                        .into_iter()
                        .map(|c| {
                            let id = c.customer_id;
                            let external_id = highlight_matches(&c.external_customer_id, &search);
                            let location = highlight_matches(&customer_location(&c), &search);
                            let badges = customer_badges(&c);
                            view! {
                                <TableRow
                                    attr:class=move || row_class(selected.get() == Some(id))
                                    on:click=move |_| selected.set(Some(id))
                                >
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span class="customer-id">{external_id}</span>
                                            {badges
                                                .into_iter()
                                                .map(|b| view! { <span class="badge badge--muted">{b}</span> })
                                                .collect_view()}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>{location}</TableCell>
                                    <TableCell>{or_dash(c.rfm_segment)}</TableCell>
                                    <TableCell>{or_dash(c.first_order_channel)}</TableCell>
                                    <TableCell>{format_number(c.total_orders as f64)}</TableCell>
                                    <TableCell>{format_currency(c.total_revenue)}</TableCell>
                                    <TableCell>{format_currency(c.average_order_value)}</TableCell>
                                    <TableCell>
                                        {c.days_since_last_order.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}
                                    </TableCell>
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

