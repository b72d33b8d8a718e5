use leptos::prelude::*;

/// Shimmering placeholder shown while a widget's data is loading.
#[component]
pub fn Skeleton(
    #[prop(optional, into)]
    height: Option<String>,
    #[prop(optional, into)]
    width: Option<String>,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let style = format!(
        "height: {}; width: {};",
        height.unwrap_or_else(|| "1rem".to_string()),
        width.unwrap_or_else(|| "100%".to_string())
    );
    view! { <div class=format!("skeleton {}", class) style=style></div> }
}

/// Card-sized placeholder for charts and tables.
#[component]
pub fn SkeletonCard(#[prop(optional)] height_px: Option<u32>) -> impl IntoView {
    let height = format!("{}px", height_px.unwrap_or(300));
    view! {
        <div class="skeleton-card">
            <Skeleton height="1.25rem" width="40%" />
            <Skeleton height=height class="skeleton--block" />
        </div>
    }
}
