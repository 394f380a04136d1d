//! Group Card Component

use leptos::prelude::*;

use crate::models::GroupSummary;

#[component]
pub fn GroupCard(group: GroupSummary) -> impl IntoView {
    view! {
        <div class="card group-card">
            <div class="card-header">
                <h3 class="card-title">{group.name}</h3>
                <span class="badge badge-secondary">{group.theme}</span>
            </div>
            <div class="card-content group-card-footer">
                <span class="group-members">
                    <span class="icon icon-users"></span>
                    {format!("{} members", group.members)}
                </span>
                <button class="btn-outline btn-sm">"Enter"</button>
            </div>
        </div>
    }
}
