use leptos::prelude::*;
use std::collections::HashSet;

/// App-wide UI state that outlives a single page.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sidebar_collapsed: RwSignal<bool>,
    /// Alerts the user closed. Client-only: a reload brings them back.
    pub dismissed_alerts: RwSignal<HashSet<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_collapsed: RwSignal::new(false),
            dismissed_alerts: RwSignal::new(HashSet::new()),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
    }

    pub fn dismiss_alert(&self, id: String) {
        self.dismissed_alerts.update(|ids| {
            ids.insert(id);
        });
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.dismissed_alerts.with(|ids| ids.contains(id))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    expect_context::<AppGlobalContext>()
}
