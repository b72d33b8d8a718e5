use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Collapsible filter panel with the pager in its header.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls (children/slot)
    #[prop(into)]
    pagination_controls: ChildrenFn,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ChildrenFn,

    /// Active filter chips
    #[prop(optional, into)]
    filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls()}
                </div>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
            >
                <div class="filter-panel-content">
                    {filter_content()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-panel__tags">{tags()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Removable chip for one active filter.
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

/// Count of filters with a non-blank value.
pub fn active_filter_count<'a>(values: impl IntoIterator<Item = &'a Option<String>>) -> usize {
    values
        .into_iter()
        .filter(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
        .count()
}

/// Follows `input` once it has been still for [`SEARCH_DEBOUNCE_MS`].
/// Each keystroke replaces the pending timeout, which cancels it.
pub fn debounced_search(input: RwSignal<String>) -> ReadSignal<String> {
    let (applied, set_applied) = signal(input.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let value = input.get();
        if value == applied.get_untracked() {
            pending.set_value(None);
            return;
        }
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            set_applied.try_set(value);
        });
        pending.set_value(Some(timeout));
    });

    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_filter_count_ignores_blank() {
        let filters = [Some("Champions".to_string()), Some("  ".to_string()), None];
        assert_eq!(active_filter_count(&filters), 1);
    }
}
