use contracts::shared::period::{GroupBy, Period};
use leptos::prelude::*;
use thaw::*;

/// Button group switching the page period.
#[component]
pub fn PeriodSelector(period: RwSignal<Period>) -> impl IntoView {
    view! {
        <div class="period-selector">
            <ButtonGroup>
                {Period::ALL
                    .into_iter()
                    .map(|p| {
                        view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=Signal::derive(move || {
                                    if period.get() == p {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                })
                                on_click=move |_| period.set(p)
                            >
                                {p.short_label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </ButtonGroup>
        </div>
    }
}

/// Day / week / month bucket switch of the sales time series.
#[component]
pub fn GroupBySelector(group_by: RwSignal<GroupBy>) -> impl IntoView {
    view! {
        <ButtonGroup>
            {GroupBy::ALL
                .into_iter()
                .map(|g| {
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=Signal::derive(move || {
                                if group_by.get() == g {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            on_click=move |_| group_by.set(g)
                        >
                            {g.label()}
                        </Button>
                    }
                })
                .collect_view()}
        </ButtonGroup>
    }
}
