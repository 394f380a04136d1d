//! Forum Preview Components
//!
//! A single forum row plus the line shown while the list is pending or
//! after it failed.

use leptos::prelude::*;

use crate::loader::FetchStatus;
use crate::models::ForumRecord;

#[component]
pub fn ForumPreview(forum: ForumRecord) -> impl IntoView {
    view! {
        <div class="forum-preview">
            <div>
                <h4>{forum.name.clone()}</h4>
                <p class="muted">{forum.description_or_empty().to_string()}</p>
            </div>
            <button class="btn-outline btn-sm">"Visit"</button>
        </div>
    }
}

/// Pending/failed notice. Renders nothing once loaded.
#[component]
pub fn ForumStatusLine(#[prop(into)] status: Signal<FetchStatus>) -> impl IntoView {
    move || match status.get() {
        FetchStatus::Loading => view! { <p class="muted forum-status">"Loading forums…"</p> }.into_any(),
        FetchStatus::Failed(_) => view! {
            <p class="muted forum-status">"Forum activity is unavailable right now."</p>
        }
        .into_any(),
        FetchStatus::Loaded => ().into_any(),
    }
}
