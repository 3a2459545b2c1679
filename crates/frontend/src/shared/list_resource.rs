//! Reactive holder of one page's canonical list.
//!
//! Wraps the loading flag, the inline error, the consecutive auth-failure
//! count and the fetch generation so every list page loads the same way:
//! `begin()` before the request, `finish()` with the resolver outcome.
//!
//! Responses land after an await, possibly once the page is gone; reads of
//! the stored generation are fallible so a late response is dropped instead
//! of touching a disposed owner.

use contracts::domain::common::{remove_by_id, upsert_canonical, AggregateRoot};
use leptos::prelude::*;

use super::auth_failures::AuthFailureTracker;
use super::endpoint_resolver::Resolved;
use super::fetch_generation::FetchGeneration;

pub struct ListResource<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Failure of the last write; survives refetches until dismissed
    pub action_error: RwSignal<Option<String>>,
    /// Endpoint that produced the current items
    pub source: RwSignal<Option<String>>,
    pub auth: RwSignal<AuthFailureTracker>,
    pub is_loaded: RwSignal<bool>,
    generation: StoredValue<FetchGeneration>,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

impl<T: Clone + Send + Sync + 'static> ListResource<T> {
    pub fn new(relogin_after_failures: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            action_error: RwSignal::new(None),
            source: RwSignal::new(None),
            auth: RwSignal::new(AuthFailureTracker::new(relogin_after_failures)),
            is_loaded: RwSignal::new(false),
            generation: StoredValue::new(FetchGeneration::new()),
        }
    }

    /// Mark a fetch as started and return its ticket
    pub fn begin(&self) -> u64 {
        self.loading.set(true);
        self.error.set(None);
        self.generation.try_with_value(|g| g.begin()).unwrap_or_default()
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation
            .try_with_value(|g| g.is_current(ticket))
            .unwrap_or(false)
    }

    /// Apply a resolver outcome. Returns `false` and changes nothing when a
    /// newer fetch has started since `ticket` was taken.
    pub fn finish(&self, ticket: u64, resolved: Resolved<T>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping stale response (ticket {})", ticket);
            return false;
        }
        self.auth
            .update(|t| t.record(resolved.auth_failed && !resolved.is_success()));
        self.items.set(resolved.items);
        self.source.set(resolved.source);
        self.error.set(resolved.error);
        self.loading.set(false);
        self.is_loaded.set(true);
        true
    }

    /// Record a failed write. Items stay as they were.
    pub fn fail_action(&self, message: impl Into<String>) {
        self.action_error.set(Some(message.into()));
    }

    pub fn needs_relogin(&self) -> Signal<bool> {
        let auth = self.auth;
        Signal::derive(move || auth.with(|t| t.should_prompt_relogin()))
    }

    pub fn error_signal(&self) -> Signal<Option<String>> {
        let error = self.error;
        Signal::derive(move || error.get())
    }
}

impl<T: AggregateRoot + Clone + Send + Sync + 'static> ListResource<T> {
    /// Replace the element with the server's returned copy, or append it
    pub fn upsert(&self, returned: T) {
        log::debug!("{} {} applied from server response", T::element_name(), returned.id());
        self.items.update(|items| upsert_canonical(items, returned));
    }

    /// Drop an element after the server confirmed the delete
    pub fn remove(&self, id: &str) {
        log::debug!("{} {} removed", T::element_name(), id);
        self.items.update(|items| {
            remove_by_id(items, id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_client::Client;

    fn client(id: &str, name: &str) -> Client {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn resolved(items: Vec<Client>) -> Resolved<Client> {
        Resolved {
            items,
            source: Some("/api/clients".into()),
            error: None,
            auth_failed: false,
        }
    }

    #[test]
    fn test_finish_applies_current_response() {
        let owner = Owner::new();
        owner.with(|| {
            let resource = ListResource::<Client>::new(3);
            let ticket = resource.begin();
            assert!(resource.loading.get_untracked());
            assert!(resource.finish(ticket, resolved(vec![client("c1", "Acme")])));
            assert_eq!(resource.items.get_untracked().len(), 1);
            assert_eq!(resource.source.get_untracked().as_deref(), Some("/api/clients"));
            assert!(!resource.loading.get_untracked());
            assert!(resource.is_loaded.get_untracked());
        });
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let resource = ListResource::<Client>::new(3);
            let first = resource.begin();
            let second = resource.begin();
            assert!(resource.finish(second, resolved(vec![client("c2", "Newer")])));
            assert!(!resource.finish(first, resolved(vec![client("c1", "Older")])));
            let items = resource.items.get_untracked();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, "c2");
        });
    }

    #[test]
    fn test_finish_after_owner_disposed_is_dropped() {
        let owner = Owner::new();
        let (resource, ticket) = owner.with(|| {
            let resource = ListResource::<Client>::new(3);
            let ticket = resource.begin();
            (resource, ticket)
        });
        owner.cleanup();
        assert!(!resource.finish(ticket, resolved(vec![client("c1", "Acme")])));
        assert_eq!(resource.begin(), 0);
    }

    #[test]
    fn test_upsert_and_remove_by_id() {
        let owner = Owner::new();
        owner.with(|| {
            let resource = ListResource::<Client>::new(3);
            let ticket = resource.begin();
            resource.finish(ticket, resolved(vec![client("c1", "Acme"), client("c2", "Beta")]));

            resource.upsert(client("c1", "Acme Ltd"));
            resource.upsert(client("c3", "Gamma"));
            let names: Vec<String> = resource
                .items
                .get_untracked()
                .into_iter()
                .map(|c| c.name)
                .collect();
            assert_eq!(names, vec!["Acme Ltd", "Beta", "Gamma"]);

            resource.remove("c2");
            resource.remove("missing");
            let ids: Vec<String> = resource.items.get_untracked().into_iter().map(|c| c.id).collect();
            assert_eq!(ids, vec!["c1", "c3"]);
        });
    }

    #[test]
    fn test_failed_write_keeps_items_and_outlives_refetch() {
        let owner = Owner::new();
        owner.with(|| {
            let resource = ListResource::<Client>::new(3);
            let ticket = resource.begin();
            resource.finish(ticket, resolved(vec![client("c1", "Acme")]));

            resource.fail_action("Server error 500: boom");
            assert_eq!(resource.items.get_untracked(), vec![client("c1", "Acme")]);

            let ticket = resource.begin();
            resource.finish(ticket, resolved(vec![client("c1", "Acme")]));
            assert_eq!(
                resource.action_error.get_untracked().as_deref(),
                Some("Server error 500: boom")
            );
            assert!(resource.error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_failed_fetch_keeps_error_and_counts_auth() {
        let owner = Owner::new();
        owner.with(|| {
            let resource = ListResource::<Client>::new(1);
            let ticket = resource.begin();
            resource.finish(
                ticket,
                Resolved {
                    items: Vec::new(),
                    source: None,
                    error: Some("/api/clients: 401".into()),
                    auth_failed: true,
                },
            );
            assert_eq!(resource.error.get_untracked().as_deref(), Some("/api/clients: 401"));
            assert!(resource.auth.with_untracked(|t| t.should_prompt_relogin()));
        });
    }
}
