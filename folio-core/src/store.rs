//! Resource state container and reconciliation policies.
//!
//! Every domain resource (projects, awards, experiences, ...) mirrors its
//! server-side collection through a [`ResourceState`]. Gateway calls report
//! their lifecycle into the state: `begin` on dispatch, one of the `fulfill_*`
//! reconcilers on success, `fail` on rejection. Reconciliation is always keyed
//! by server-assigned identity, never by position.

use serde::Serialize;

/// An entity with a server-assigned identity.
///
/// The identity is absent on drafts that have not been persisted yet;
/// reconciliation ignores entities without one.
pub trait Entity {
    fn id(&self) -> Option<&str>;
}

/// Request lifecycle of the most recent operation on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Cached server state for one resource type.
///
/// Holds both a list projection (`results`) and a single-entity projection
/// (`result`); the two are independent, so fetching one entity never disturbs
/// the cached list. `error` and `message` report the outcome of the latest
/// operation and are cleared before the next one starts, so a stale success
/// banner can never outlive a newer failure.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    results: Vec<T>,
    result: Option<T>,
    status: Status,
    error: Option<String>,
    message: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            result: None,
            status: Status::Idle,
            error: None,
            message: None,
        }
    }
}

impl<T: Entity + Clone> ResourceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list projection.
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// The cached single-entity projection.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Marks an operation as dispatched.
    ///
    /// Clears the previous operation's error and message so the outcome
    /// reported next is always the current one.
    pub fn begin(&mut self) {
        self.status = Status::Loading;
        self.error = None;
        self.message = None;
    }

    /// List fetch fulfilled: the cached list is fully replaced.
    pub fn fulfill_list(&mut self, items: Vec<T>, message: Option<String>) {
        self.status = Status::Succeeded;
        self.results = items;
        self.message = message;
    }

    /// Single fetch fulfilled: sets `result` without touching the list.
    pub fn fulfill_one(&mut self, item: Option<T>, message: Option<String>) {
        self.status = Status::Succeeded;
        self.result = item;
        self.message = message;
    }

    /// Create fulfilled: appends the returned entity to the list.
    ///
    /// The append only happens when the entity carries an identity that is
    /// not already present; a racing list refetch that landed first must not
    /// produce a duplicate.
    pub fn fulfill_created(&mut self, item: Option<T>, message: Option<String>) {
        self.status = Status::Succeeded;
        self.message = message;
        if let Some(item) = item {
            if let Some(id) = item.id() {
                if !self.results.iter().any(|e| e.id() == Some(id)) {
                    self.results.push(item.clone());
                }
            }
            self.result = Some(item);
        }
    }

    /// Update fulfilled: replaces the list entry with the same identity.
    ///
    /// A missing match is a silent inconsistency, not an error: the list is
    /// left as-is and only the single projection is refreshed.
    pub fn fulfill_updated(&mut self, item: Option<T>, message: Option<String>) {
        self.status = Status::Succeeded;
        self.message = message;
        if let Some(item) = item {
            if let Some(id) = item.id() {
                if let Some(entry) = self.results.iter_mut().find(|e| e.id() == Some(id)) {
                    *entry = item.clone();
                }
            }
            self.result = Some(item);
        }
    }

    /// Delete fulfilled: removes the entry matching the identity the caller
    /// passed to the operation. The server response is not assumed to echo
    /// the identity back.
    pub fn fulfill_deleted(&mut self, id: &str, message: Option<String>) {
        self.status = Status::Succeeded;
        self.message = message;
        self.results.retain(|e| e.id() != Some(id));
        if self.result.as_ref().and_then(|e| e.id()) == Some(id) {
            self.result = None;
        }
    }

    /// Operation rejected: records the error and leaves cached data alone.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.status = Status::Failed;
        self.error = Some(error.into());
    }

    /// Clears transient state (status, error, message, single projection).
    /// The cached list survives so views keep rendering known-good data.
    pub fn reset(&mut self) {
        self.status = Status::Idle;
        self.error = None;
        self.message = None;
        self.result = None;
    }

    /// Clears only the outcome banners.
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Option<String>,
        title: String,
    }

    impl Item {
        fn new(id: &str, title: &str) -> Self {
            Self {
                id: Some(id.to_string()),
                title: title.to_string(),
            }
        }
    }

    impl Entity for Item {
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    fn seeded() -> ResourceState<Item> {
        let mut state = ResourceState::new();
        state.begin();
        state.fulfill_list(
            vec![Item::new("a1", "first"), Item::new("b2", "second")],
            None,
        );
        state
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let mut state: ResourceState<Item> = ResourceState::new();
        state.begin();
        state.fulfill_list(vec![], Some("Fetched".to_string()));
        assert_eq!(state.message(), Some("Fetched"));

        state.begin();
        assert_eq!(state.status(), Status::Loading);
        assert!(state.message().is_none());
        assert!(state.error().is_none());

        state.fail("boom");
        state.begin();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_list_fetch_replaces() {
        let mut state = seeded();
        state.begin();
        state.fulfill_list(vec![Item::new("c3", "third")], None);
        assert_eq!(state.results().len(), 1);
        assert_eq!(state.results()[0].id, Some("c3".to_string()));
    }

    #[test]
    fn test_create_appends_with_identity() {
        let mut state = seeded();
        state.begin();
        state.fulfill_created(Some(Item::new("c3", "third")), Some("Created".to_string()));
        assert_eq!(state.results().len(), 3);
        assert_eq!(state.message(), Some("Created"));
        assert_eq!(state.result().unwrap().id, Some("c3".to_string()));
    }

    #[test]
    fn test_create_duplicate_guard() {
        let mut state = seeded();
        state.begin();
        state.fulfill_created(Some(Item::new("a1", "first again")), None);
        assert_eq!(state.results().len(), 2);
    }

    #[test]
    fn test_create_without_identity_is_not_appended() {
        let mut state = seeded();
        state.begin();
        state.fulfill_created(
            Some(Item {
                id: None,
                title: "draft".to_string(),
            }),
            None,
        );
        assert_eq!(state.results().len(), 2);
        assert_eq!(state.status(), Status::Succeeded);
    }

    #[test]
    fn test_update_replaces_exactly_one() {
        let mut state = seeded();
        state.begin();
        state.fulfill_updated(Some(Item::new("a1", "renamed")), None);

        let matches: Vec<_> = state
            .results()
            .iter()
            .filter(|e| e.id.as_deref() == Some("a1"))
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "renamed");
        assert_eq!(state.results().len(), 2);
    }

    #[test]
    fn test_update_without_match_is_silent() {
        let mut state = seeded();
        state.begin();
        state.fulfill_updated(Some(Item::new("zz", "ghost")), None);
        assert_eq!(state.results().len(), 2);
        assert_eq!(state.status(), Status::Succeeded);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut state = seeded();
        let before = state.results().len();
        state.begin();
        state.fulfill_deleted("a1", None);
        assert_eq!(state.results().len(), before - 1);
        assert!(!state.results().iter().any(|e| e.id.as_deref() == Some("a1")));
    }

    #[test]
    fn test_delete_clears_matching_single_projection() {
        let mut state = seeded();
        state.begin();
        state.fulfill_one(Some(Item::new("a1", "first")), None);
        state.begin();
        state.fulfill_deleted("a1", None);
        assert!(state.result().is_none());
    }

    #[test]
    fn test_failure_preserves_prior_data() {
        let mut state = seeded();
        let before = state.results().to_vec();
        state.begin();
        state.fail("Server returned 500: internal error");

        assert_eq!(state.status(), Status::Failed);
        assert_eq!(state.error(), Some("Server returned 500: internal error"));
        assert_eq!(state.results(), &before[..]);
    }

    #[test]
    fn test_single_fetch_leaves_list_alone() {
        let mut state = seeded();
        state.begin();
        state.fulfill_one(Some(Item::new("zz", "standalone")), None);
        assert_eq!(state.results().len(), 2);
        assert_eq!(state.result().unwrap().id, Some("zz".to_string()));
    }

    #[test]
    fn test_reset_keeps_list() {
        let mut state = seeded();
        state.begin();
        state.fulfill_one(Some(Item::new("a1", "first")), Some("Fetched".to_string()));
        state.reset();

        assert_eq!(state.status(), Status::Idle);
        assert!(state.result().is_none());
        assert!(state.message().is_none());
        assert_eq!(state.results().len(), 2);
    }

    #[test]
    fn test_clear_messages() {
        let mut state = seeded();
        state.begin();
        state.fail("boom");
        state.clear_messages();
        assert!(state.error().is_none());
        assert_eq!(state.status(), Status::Failed);
    }
}
