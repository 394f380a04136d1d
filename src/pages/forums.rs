//! Forums View
//!
//! Every forum, oldest first.

use leptos::prelude::*;

use crate::components::ForumStatusLine;
use crate::hooks::use_forums;
use crate::loader::FetchStatus;

#[component]
pub fn ForumsView() -> impl IntoView {
    let forums = use_forums();
    let is_empty = move || forums.status.get() == FetchStatus::Loaded && forums.records.with(|r| r.is_empty());

    view! {
        <div class="forums">
            <h2>"Forums"</h2>
            <ForumStatusLine status=forums.status />
            <Show when=is_empty>
                <p class="muted">"No forums yet."</p>
            </Show>
            <ul class="forum-list" aria-busy=move || forums.loading.get().to_string()>
                <For
                    each=move || forums.records.get()
                    key=|forum| forum.id.clone()
                    children=move |forum| {
                        view! {
                            <li class="forum-list-item">
                                <h4>{forum.name.clone()}</h4>
                                <p class="muted">{forum.description_or_empty().to_string()}</p>
                                <span class="forum-created">{format!("Created {}", forum.created_at)}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
