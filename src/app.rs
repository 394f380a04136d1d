//! EnglishOne Frontend App
//!
//! Header with a view switcher over the dashboard and the forum list.

use leptos::prelude::*;

use crate::config::ServiceConfig;
use crate::context::AppContext;
use crate::pages::{DashboardView, ForumsView};

/// Which view is mounted
#[derive(Clone, Copy, PartialEq)]
enum AppView {
    Dashboard,
    Forums,
}

#[component]
pub fn App(config: ServiceConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    let (current_view, set_current_view) = signal(AppView::Dashboard);
    let nav_class = move |view: AppView| {
        if current_view.get() == view { "nav-link active" } else { "nav-link" }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-title">"EnglishOne"</span>
                <nav class="app-nav">
                    <button
                        class=move || nav_class(AppView::Dashboard)
                        on:click=move |_| set_current_view.set(AppView::Dashboard)
                    >
                        "Dashboard"
                    </button>
                    <button
                        class=move || nav_class(AppView::Forums)
                        on:click=move |_| set_current_view.set(AppView::Forums)
                    >
                        "Forums"
                    </button>
                </nav>
            </header>

            // Switching unmounts the old view; its pending fetch is then ignored
            <main class="main-content">
                {move || match current_view.get() {
                    AppView::Dashboard => view! { <DashboardView /> }.into_any(),
                    AppView::Forums => view! { <ForumsView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
