//! PageFrame: root wrapper of every routed page.
//!
//! Sets `id` (`"d101_sales--dashboard"`) and `data-page` on the root element
//! so pages can be told apart in the DOM and in stylesheets.

use leptos::prelude::*;

pub fn page_class(extra: &str) -> String {
    if extra.is_empty() {
        "page page--dashboard".to_string()
    } else {
        format!("page page--dashboard {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// `{dashboard}--dashboard`, e.g. `"d100_overview--dashboard"`.
    page_id: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let slug = page_id.split("--").next().unwrap_or(page_id);

    view! {
        <div id=page_id class=page_class(class) data-page=slug>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(""), "page page--dashboard");
        assert_eq!(page_class("page--wide"), "page page--dashboard page--wide");
    }
}
