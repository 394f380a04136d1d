//! Forum List Loader
//!
//! One fetch per activation: records start empty and `Loading`, and the
//! first response settles them to `Loaded` or `Failed`. A response that
//! arrives after the owning view was torn down is dropped.

use reactive_stores::Store;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::{ForumQuery, ForumSource};
use crate::error::FetchError;
use crate::models::ForumRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Loading,
    Loaded,
    Failed(FetchError),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        *self == FetchStatus::Loading
    }
}

/// Forum list state owned by one view instance
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct ForumList {
    /// Service order, replaced wholesale on success
    pub records: Vec<ForumRecord>,
    pub status: FetchStatus,
}

impl ForumList {
    /// Apply the outcome of the fetch. Failure keeps the last known records.
    pub fn settle(&mut self, result: Result<Vec<ForumRecord>, FetchError>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.status = FetchStatus::Loaded;
            }
            Err(err) => {
                self.status = FetchStatus::Failed(err);
            }
        }
    }
}

/// Lifetime flag of a mounted view. Cleared on cleanup.
#[derive(Debug, Clone)]
pub struct Activation {
    active: Arc<AtomicBool>,
}

impl Activation {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue `query` once and hand the outcome to `apply` if the view is
/// still active. Returns whether the outcome was applied.
pub async fn load_forums<S, F>(
    source: &S,
    query: &ForumQuery,
    activation: &Activation,
    apply: F,
) -> bool
where
    S: ForumSource,
    F: FnOnce(Result<Vec<ForumRecord>, FetchError>),
{
    log::debug!("Fetching {}", query);
    let result = source.fetch_forums(query).await;

    if let Err(err) = &result {
        log::error!("Error fetching forums ({}): {}", query, err);
    }

    if !activation.is_active() {
        log::debug!("Discarding response for {}: view no longer active", query);
        return false;
    }

    apply(result);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::all_forums_query;
    use crate::models::ForumId;
    use futures::executor::block_on;
    use serde_json::Map;
    use std::cell::{Cell, RefCell};

    struct StubSource {
        response: Result<Vec<ForumRecord>, FetchError>,
        calls: Cell<u32>,
        queries: RefCell<Vec<String>>,
        /// Runs while the request is "in flight"
        during: Option<Box<dyn Fn()>>,
    }

    impl StubSource {
        fn new(response: Result<Vec<ForumRecord>, FetchError>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
                queries: RefCell::new(Vec::new()),
                during: None,
            }
        }
    }

    impl ForumSource for StubSource {
        async fn fetch_forums(&self, query: &ForumQuery) -> Result<Vec<ForumRecord>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.queries.borrow_mut().push(query.to_string());
            if let Some(during) = &self.during {
                during();
            }
            self.response.clone()
        }
    }

    fn make_forum(id: i64, name: &str, created_at: &str) -> ForumRecord {
        ForumRecord {
            id: ForumId::Int(id),
            name: name.to_string(),
            description: Some("...".to_string()),
            created_at: created_at.to_string(),
            extra: Map::new(),
        }
    }

    /// Per-thread log capture, so parallel tests don't see each other's records
    mod capture {
        use log::{Level, LevelFilter, Log, Metadata, Record};
        use std::cell::RefCell;
        use std::sync::Once;

        thread_local! {
            static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
        }

        struct CaptureLogger;

        impl Log for CaptureLogger {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
            }

            fn flush(&self) {}
        }

        static LOGGER: CaptureLogger = CaptureLogger;
        static INIT: Once = Once::new();

        pub fn errors_during(f: impl FnOnce()) -> Vec<String> {
            INIT.call_once(|| {
                let _ = log::set_logger(&LOGGER);
                log::set_max_level(LevelFilter::Trace);
            });
            RECORDS.with(|r| r.borrow_mut().clear());
            f();
            RECORDS.with(|r| {
                r.borrow_mut()
                    .drain(..)
                    .filter(|(level, _)| *level == Level::Error)
                    .map(|(_, msg)| msg)
                    .collect()
            })
        }
    }

    fn run(source: &StubSource, activation: &Activation, list: &mut ForumList) -> bool {
        block_on(load_forums(source, &all_forums_query(), activation, |r| list.settle(r)))
    }

    #[test]
    fn test_initial_state_is_loading_and_empty() {
        let list = ForumList::default();
        assert!(list.status.is_loading());
        assert!(list.records.is_empty());
    }

    #[test]
    fn test_success_keeps_service_order() {
        let forums = vec![
            make_forum(1, "Grammar", "t1"),
            make_forum(2, "Speaking", "t2"),
        ];
        let source = StubSource::new(Ok(forums.clone()));
        let mut list = ForumList::default();

        assert!(run(&source, &Activation::new(), &mut list));

        assert_eq!(list.records, forums);
        assert_eq!(list.records[0].name, "Grammar");
        assert_eq!(list.records[1].name, "Speaking");
        assert!(!list.status.is_loading());
        assert_eq!(list.status, FetchStatus::Loaded);
    }

    #[test]
    fn test_order_is_not_resorted() {
        // Newer first on purpose: the loader must not sort by created_at itself
        let forums = vec![
            make_forum(3, "Vocabulary", "2024-03-01"),
            make_forum(1, "Grammar", "2024-01-01"),
            make_forum(2, "Speaking", "2024-02-01"),
        ];
        let source = StubSource::new(Ok(forums.clone()));
        let mut list = ForumList::default();
        run(&source, &Activation::new(), &mut list);

        let ids: Vec<ForumId> = list.records.iter().map(|f| f.id.clone()).collect();
        assert_eq!(ids, vec![ForumId::Int(3), ForumId::Int(1), ForumId::Int(2)]);
    }

    #[test]
    fn test_failure_leaves_list_empty_and_stops_loading() {
        let err = FetchError::Transport("connection refused".to_string());
        let source = StubSource::new(Err(err.clone()));
        let mut list = ForumList::default();

        assert!(run(&source, &Activation::new(), &mut list));

        assert!(list.records.is_empty());
        assert!(!list.status.is_loading());
        assert_eq!(list.status, FetchStatus::Failed(err));
    }

    #[test]
    fn test_failure_keeps_last_known_records() {
        let mut list = ForumList::default();
        list.settle(Ok(vec![make_forum(1, "Grammar", "t1")]));
        list.settle(Err(FetchError::Timeout(30_000)));

        assert_eq!(list.records.len(), 1);
        assert_eq!(list.status, FetchStatus::Failed(FetchError::Timeout(30_000)));
    }

    #[test]
    fn test_success_replaces_records_wholesale() {
        let mut list = ForumList::default();
        list.settle(Ok(vec![make_forum(1, "Grammar", "t1"), make_forum(2, "Speaking", "t2")]));
        list.settle(Ok(vec![make_forum(3, "Vocabulary", "t3")]));

        assert_eq!(list.records, vec![make_forum(3, "Vocabulary", "t3")]);
    }

    #[test]
    fn test_one_request_per_activation() {
        let source = StubSource::new(Ok(vec![make_forum(1, "Grammar", "t1")]));

        let mut first = ForumList::default();
        run(&source, &Activation::new(), &mut first);
        assert_eq!(source.calls.get(), 1);

        // Remount: fresh guard, fresh state, exactly one more request
        let mut second = ForumList::default();
        run(&source, &Activation::new(), &mut second);
        assert_eq!(source.calls.get(), 2);
        assert_eq!(
            *source.queries.borrow(),
            vec![
                "forums?select=*&order=created_at.asc".to_string(),
                "forums?select=*&order=created_at.asc".to_string(),
            ]
        );
    }

    #[test]
    fn test_response_after_deactivation_is_discarded() {
        let activation = Activation::new();
        let mut source = StubSource::new(Ok(vec![make_forum(1, "Grammar", "t1")]));
        let guard = activation.clone();
        source.during = Some(Box::new(move || guard.deactivate()));

        let mut list = ForumList::default();
        let applied = run(&source, &activation, &mut list);

        assert!(!applied);
        assert_eq!(source.calls.get(), 1);
        assert!(list.status.is_loading());
        assert!(list.records.is_empty());
    }

    #[test]
    fn test_failure_after_deactivation_is_discarded() {
        let activation = Activation::new();
        activation.deactivate();
        let source = StubSource::new(Err(FetchError::Decode("expected a sequence".to_string())));

        let mut list = ForumList::default();
        assert!(!run(&source, &activation, &mut list));
        assert_eq!(list, ForumList::default());
    }

    #[test]
    fn test_failure_logs_one_error() {
        let source = StubSource::new(Err(FetchError::Transport("connection refused".to_string())));
        let mut list = ForumList::default();

        let errors = capture::errors_during(|| {
            run(&source, &Activation::new(), &mut list);
        });

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Error fetching forums"));
        assert!(errors[0].contains("connection refused"));
    }

    #[test]
    fn test_success_logs_no_error() {
        let source = StubSource::new(Ok(vec![make_forum(1, "Grammar", "t1")]));
        let mut list = ForumList::default();

        let errors = capture::errors_during(|| {
            run(&source, &Activation::new(), &mut list);
        });

        assert!(errors.is_empty());
    }

    #[test]
    fn test_failure_is_logged_even_when_discarded() {
        let activation = Activation::new();
        activation.deactivate();
        let source = StubSource::new(Err(FetchError::Timeout(30_000)));
        let mut list = ForumList::default();

        let errors = capture::errors_during(|| {
            run(&source, &activation, &mut list);
        });

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Error fetching forums"));
        assert_eq!(list, ForumList::default());
    }
}
