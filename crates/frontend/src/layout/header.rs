use crate::dashboards::d100_overview::api::alerts_query;
use crate::layout::global_context::use_global_context;
use crate::shared::components::alert_card::{badge_class, highest_severity, AlertsList};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::period_selector::PeriodSelector;
use crate::shared::icons::icon;
use crate::shared::query::{use_query, QueryOptions};
use contracts::shared::period::Period;
use leptos::prelude::*;
use thaw::*;

/// Top bar of every page: title, period, alerts bell and refresh.
#[component]
pub fn Header(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    period: RwSignal<Period>,
    /// Required page data still loading.
    #[prop(optional, into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let ctx = use_global_context();
    let alerts = use_query(alerts_query, QueryOptions::alerts());
    let show_alerts = RwSignal::new(false);

    let active_alerts = Signal::derive(move || {
        let dismissed = ctx.dismissed_alerts.get();
        alerts
            .data()
            .unwrap_or_default()
            .into_iter()
            .filter(|a| !dismissed.contains(&a.id))
            .collect::<Vec<_>>()
    });
    let alert_count = move || active_alerts.with(Vec::len);
    let on_dismiss = Callback::new(move |id: String| ctx.dismiss_alert(id));

    view! {
        <header class="header">
            <div class="header__left">
                <button class="header__menu" title="Menu" on:click=move |_| ctx.toggle_sidebar()>
                    {icon("menu")}
                </button>
                <PageHeader title=title subtitle=subtitle>
                    <Show when=move || loading.get()>
                        <Spinner size=SpinnerSize::Small />
                    </Show>
                </PageHeader>
            </div>

            <div class="header__right">
                <PeriodSelector period=period />

                <span class="status-indicator status-indicator--online">
                    <span class="status-indicator__dot"></span>
                    "Live"
                </span>

                <button
                    class="header__icon-button"
                    class:header__icon-button--spinning=move || alerts.is_fetching()
                    title="Atualizar alertas"
                    disabled=move || alerts.is_fetching()
                    on:click=move |_| alerts.refetch()
                >
                    {icon("refresh")}
                </button>

                <div class="header__alerts">
                    <button
                        class="header__icon-button"
                        title="Alertas"
                        on:click=move |_| show_alerts.update(|open| *open = !*open)
                    >
                        {icon("bell")}
                        <Show when=move || { alert_count() > 0 }>
                            <span class=move || active_alerts.with(|a| badge_class(highest_severity(a)))>
                                {alert_count}
                            </span>
                        </Show>
                    </button>

                    <Show when=move || show_alerts.get()>
                        <div class="header__backdrop" on:click=move |_| show_alerts.set(false)></div>
                        <div class="alerts-dropdown">
                            <div class="alerts-dropdown__header">
                                <h3>"Alertas"</h3>
                                <button class="alerts-dropdown__close" on:click=move |_| show_alerts.set(false)>
                                    {icon("x")}
                                </button>
                            </div>
                            <div class="alerts-dropdown__body">
                                <Show
                                    when=move || { alert_count() > 0 }
                                    fallback=|| view! {
                                        <p class="alerts-dropdown__empty">"Nenhum alerta no momento"</p>
                                    }
                                >
                                    <AlertsList alerts=active_alerts on_dismiss=on_dismiss />
                                </Show>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="header__avatar">"CA"</div>
            </div>
        </header>
    }
}
