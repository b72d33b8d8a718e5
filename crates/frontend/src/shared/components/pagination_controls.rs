use crate::shared::formatters::format_number;
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

/// `"Página 2 de 5 (87 registros)"`. An empty list still reports one page.
pub fn page_summary(page: u32, pages: u32, total: u64) -> String {
    format!(
        "Página {} de {} ({} registros)",
        page.max(1),
        pages.max(1),
        format_number(total as f64)
    )
}

/// Pager for the 1-based lists of the API.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    page_size: Signal<u32>,

    on_page_change: Callback<u32>,

    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let at_first = move || page.get() <= 1;
    let at_last = move || page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="Primeira página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get();
                    if current > 1 {
                        on_page_change.run(current - 1);
                    }
                }
                disabled=at_first
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page_summary(page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get();
                    if current < total_pages.get() {
                        on_page_change.run(current + 1);
                    }
                }
                disabled=at_last
                title="Próxima página"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let last = total_pages.get();
                    if last > 0 {
                        on_page_change.run(last);
                    }
                }
                disabled=at_last
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(20);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {format!("{} por página", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_summary() {
        assert_eq!(page_summary(2, 5, 87), "Página 2 de 5 (87 registros)");
        assert_eq!(page_summary(1, 0, 0), "Página 1 de 1 (0 registros)");
        assert_eq!(page_summary(1, 60, 1200), "Página 1 de 60 (1.200 registros)");
    }
}
