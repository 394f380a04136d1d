//! Forum Hooks
//!
//! Reactive wrappers around the loader. Call from a component body: the
//! fetch is issued once per mount and its guard is cleared on cleanup.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::client::{all_forums_query, recent_forums_query, ForumQuery};
use crate::context::use_app_context;
use crate::loader::{load_forums, Activation, FetchStatus, ForumList, ForumListStoreFields};
use crate::models::ForumRecord;

/// Read side of a forum list
#[derive(Clone, Copy)]
pub struct ForumsHandle {
    pub records: Signal<Vec<ForumRecord>>,
    pub loading: Signal<bool>,
    pub status: Signal<FetchStatus>,
}

impl ForumsHandle {
    fn from_store(store: Store<ForumList>) -> Self {
        Self {
            records: Signal::derive(move || store.records().get()),
            loading: Signal::derive(move || store.status().get().is_loading()),
            status: Signal::derive(move || store.status().get()),
        }
    }
}

/// Every forum, oldest first
pub fn use_forums() -> ForumsHandle {
    use_forum_query(all_forums_query())
}

/// The first few forums the service hands back, unordered
pub fn use_recent_forums() -> ForumsHandle {
    use_forum_query(recent_forums_query())
}

fn use_forum_query(query: ForumQuery) -> ForumsHandle {
    let client = use_app_context().client;
    let store = Store::new(ForumList::default());

    let activation = Activation::new();
    on_cleanup({
        let activation = activation.clone();
        move || activation.deactivate()
    });

    spawn_local(async move {
        load_forums(&client, &query, &activation, move |result| {
            store.update(|list| list.settle(result));
        })
        .await;
    });

    ForumsHandle::from_store(store)
}
