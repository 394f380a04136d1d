//! Dashboard Tab Bar Component
//!
//! Tab strip switching between the dashboard sections.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Activity,
    Groups,
    Achievements,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Activity,
        DashboardTab::Groups,
        DashboardTab::Achievements,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Activity => "Recent Activity",
            DashboardTab::Groups => "My Groups",
            DashboardTab::Achievements => "Achievements",
        }
    }
}

#[component]
pub fn TabBar(
    active_tab: ReadSignal<DashboardTab>,
    set_active_tab: WriteSignal<DashboardTab>,
) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || active_tab.get() == tab;
                    let tab_class = move || {
                        if is_active() { "tab-trigger active" } else { "tab-trigger" }
                    };
                    view! {
                        <button
                            class=tab_class
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| set_active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
