use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::query::{provide_query_client, QueryClient};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One cache for the whole session; pages only observe it.
    provide_query_client(QueryClient::new());
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
