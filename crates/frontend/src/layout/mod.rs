pub mod global_context;
pub mod header;
pub mod sidebar;

use contracts::shared::period::Period;
use header::Header;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Frame of every page.
///
/// ```text
/// +---------+--------------------------------+
/// |         |  Header (title, period, bell)  |
/// | Sidebar +--------------------------------+
/// |         |  page content                  |
/// +---------+--------------------------------+
/// ```
#[component]
pub fn Shell(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    period: RwSignal<Period>,
    #[prop(optional, into)]
    loading: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let ctx = global_context::use_global_context();

    view! {
        <div class="app-layout">
            <Sidebar />
            <main
                class="app-main"
                class:app-main--wide=move || ctx.sidebar_collapsed.get()
            >
                <Header title=title subtitle=subtitle period=period loading=loading />
                <div class="app-content">{children()}</div>
            </main>
        </div>
    }
}
