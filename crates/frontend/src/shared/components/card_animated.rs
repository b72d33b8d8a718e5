//! CardAnimated: thaw `Card` with the `card-appear` entrance animation.
//!
//! Pass increasing `delay_ms` values to a row of cards for a stagger effect:
//! ```ignore
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=80>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Stagger step between consecutive cards of a grid.
pub const STAGGER_MS: u32 = 80;

pub fn appear_style(delay_ms: u32, extra: &str) -> String {
    if extra.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!("animation: card-appear 0.28s ease-out {}ms both; {}", delay_ms, extra)
    }
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    /// Optional card title rendered as a header row.
    #[prop(optional, into)]
    title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let full_style = appear_style(delay_ms, &style);

    view! {
        <Card attr:style=full_style attr:class="dashboard-card">
            {move || title.get().map(|t| view! { <h3 class="dashboard-card__title">{t}</h3> })}
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_style() {
        assert_eq!(appear_style(160, ""), "animation: card-appear 0.28s ease-out 160ms both;");
        assert!(appear_style(0, "min-height: 320px;").ends_with("both; min-height: 320px;"));
    }
}
