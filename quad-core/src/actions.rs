//! Preference mutators.
//!
//! Each mutator reads the current snapshot from the store, computes the
//! next one, saves it, and returns a short human-readable [`Notice`]
//! describing the effect. Destructive transitions (unsubscribe, hide)
//! go through a two-phase protocol: the request returns a
//! [`PendingAction`] token and nothing is committed until the caller
//! passes the token to [`PreferencesStore::confirm`]. Dropping the
//! token cancels the action.
//!
//! Ids are accepted without catalog validation; an id with no matching
//! record is stored as-is and simply matches nothing when filtering.

use tracing::debug;

use crate::error::QuadResult;
use crate::store::{PreferencesStore, StorageBackend};

/// Groups and organizations have identical subscription behavior and
/// separate id spaces; the tag only matters for display and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Group,
    Organization,
}

/// Something a user can subscribe to.
#[derive(Debug, Clone)]
pub struct SubscribeTarget {
    pub kind: TargetKind,
    pub id: String,
    pub name: String,
}

impl SubscribeTarget {
    pub fn group(id: impl Into<String>, name: impl Into<String>) -> SubscribeTarget {
        SubscribeTarget {
            kind: TargetKind::Group,
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn organization(id: impl Into<String>, name: impl Into<String>) -> SubscribeTarget {
        SubscribeTarget {
            kind: TargetKind::Organization,
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A short-lived, user-facing message describing a committed mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(title: &str, body: String) -> Notice {
        Notice {
            title: title.to_string(),
            body,
        }
    }
}

/// A destructive mutation awaiting explicit confirmation.
///
/// Pure data: holding one does not touch the store. Confirm with
/// [`PreferencesStore::confirm`]; drop it to cancel.
#[derive(Debug, Clone)]
pub struct PendingAction(PendingKind);

#[derive(Debug, Clone)]
enum PendingKind {
    Unsubscribe(SubscribeTarget),
    HideEvent { id: String, title: String },
}

impl PendingAction {
    /// Prompt text for the confirmation step.
    pub fn prompt(&self) -> String {
        match &self.0 {
            PendingKind::Unsubscribe(target) => {
                format!("Unsubscribe from {}?", target.name)
            }
            PendingKind::HideEvent { title, .. } => {
                format!(
                    "Hide \"{title}\"? It will no longer appear in your feed, \
                     but stays on its group's page."
                )
            }
        }
    }
}

/// Result of a toggle on an event's interest flag.
pub enum ToggleOutcome {
    /// The event was hidden; it is back in the feed, committed.
    Restored(Notice),
    /// Hiding is destructive and needs the confirmation step first.
    NeedsConfirmation(PendingAction),
}

impl<B: StorageBackend> PreferencesStore<B> {
    pub fn is_subscribed(&self, id: &str) -> bool {
        self.preferences().is_subscribed(id)
    }

    pub fn is_not_interested(&self, event_id: &str) -> bool {
        self.preferences().is_not_interested(event_id)
    }

    /// Subscribe to a group or organization. Commits immediately;
    /// returns `None` when already subscribed (no duplicate, no notice).
    pub fn subscribe_to(&mut self, target: &SubscribeTarget) -> QuadResult<Option<Notice>> {
        if self.is_subscribed(&target.id) {
            return Ok(None);
        }

        let next = self.preferences().with_subscription(&target.id);
        self.save(next)?;

        debug!(id = %target.id, "subscribed");
        Ok(Some(Notice::new(
            "Subscribed!",
            format!("You'll receive updates from {}", target.name),
        )))
    }

    /// First phase of an unsubscribe. Nothing is committed yet.
    pub fn request_unsubscribe(&self, target: &SubscribeTarget) -> PendingAction {
        PendingAction(PendingKind::Unsubscribe(target.clone()))
    }

    /// Toggle the not-interested flag on an event.
    ///
    /// Restoring a hidden event commits immediately; the transition
    /// *into* not-interested is destructive and comes back as a pending
    /// action instead.
    pub fn toggle_event_interest(
        &mut self,
        event_id: &str,
        event_title: &str,
    ) -> QuadResult<ToggleOutcome> {
        if self.is_not_interested(event_id) {
            let next = self.preferences().with_event_restored(event_id);
            self.save(next)?;

            debug!(id = %event_id, "event restored");
            return Ok(ToggleOutcome::Restored(Notice::new(
                "Event Restored",
                format!("{event_title} will now appear in your feed"),
            )));
        }

        Ok(ToggleOutcome::NeedsConfirmation(PendingAction(
            PendingKind::HideEvent {
                id: event_id.to_string(),
                title: event_title.to_string(),
            },
        )))
    }

    /// Second phase: commit a pending destructive action.
    ///
    /// Safe to confirm a stale token; committing a state that already
    /// holds is a harmless no-op write.
    pub fn confirm(&mut self, pending: PendingAction) -> QuadResult<Notice> {
        match pending.0 {
            PendingKind::Unsubscribe(target) => {
                let next = self.preferences().without_subscription(&target.id);
                self.save(next)?;

                debug!(id = %target.id, "unsubscribed");
                Ok(Notice::new(
                    "Unsubscribed",
                    format!("You've unsubscribed from {}", target.name),
                ))
            }
            PendingKind::HideEvent { id, title } => {
                let next = self.preferences().with_event_hidden(&id);
                self.save(next)?;

                debug!(id = %id, "event hidden");
                Ok(Notice::new(
                    "Not Interested",
                    format!("{title} won't appear in your feed"),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    fn fresh_store() -> PreferencesStore<MemoryBackend> {
        PreferencesStore::open(MemoryBackend::new())
    }

    #[test]
    fn test_subscribe_is_a_noop_when_already_subscribed() {
        let mut store = fresh_store();
        let target = SubscribeTarget::group("group1", "Film Club");

        let first = store.subscribe_to(&target).unwrap();
        let second = store.subscribe_to(&target).unwrap();

        assert!(first.is_some());
        assert!(second.is_none());
        let count = store
            .preferences()
            .subscribed_groups
            .iter()
            .filter(|g| *g == "group1")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unsubscribe_twice_matches_unsubscribe_once() {
        let mut store = fresh_store();
        let target = SubscribeTarget::group("group5", "Jazz Ensemble");

        let pending = store.request_unsubscribe(&target);
        store.confirm(pending).unwrap();
        let after_once = store.preferences().clone();

        let pending = store.request_unsubscribe(&target);
        store.confirm(pending).unwrap();

        assert_eq!(*store.preferences(), after_once);
        assert!(!store.is_subscribed("group5"));
    }

    #[test]
    fn test_request_without_confirm_commits_nothing() {
        let mut store = fresh_store();
        let target = SubscribeTarget::group("group5", "Jazz Ensemble");

        let pending = store.request_unsubscribe(&target);
        drop(pending);

        assert!(store.is_subscribed("group5"));
        assert_eq!(store.version(), 0);

        match store.toggle_event_interest("event1", "Movie Night").unwrap() {
            ToggleOutcome::NeedsConfirmation(pending) => drop(pending),
            ToggleOutcome::Restored(_) => panic!("should need confirmation"),
        }
        assert!(!store.is_not_interested("event1"));
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_hiding_an_event_is_exclusive_with_interested() {
        let mut store = fresh_store();
        let mut prefs = store.preferences().clone();
        prefs.interested_events = vec!["event1".to_string()];
        store.save(prefs).unwrap();

        let pending = match store.toggle_event_interest("event1", "Movie Night").unwrap() {
            ToggleOutcome::NeedsConfirmation(pending) => pending,
            ToggleOutcome::Restored(_) => panic!("should need confirmation"),
        };
        let notice = store.confirm(pending).unwrap();

        assert_eq!(notice.title, "Not Interested");
        assert!(store.is_not_interested("event1"));
        assert!(!store.preferences().interested_events.contains(&"event1".to_string()));
    }

    #[test]
    fn test_restoring_a_hidden_event_commits_immediately() {
        let mut store = fresh_store();
        let pending = match store.toggle_event_interest("event1", "Movie Night").unwrap() {
            ToggleOutcome::NeedsConfirmation(pending) => pending,
            ToggleOutcome::Restored(_) => panic!("should need confirmation"),
        };
        store.confirm(pending).unwrap();

        match store.toggle_event_interest("event1", "Movie Night").unwrap() {
            ToggleOutcome::Restored(notice) => {
                assert_eq!(notice.title, "Event Restored");
            }
            ToggleOutcome::NeedsConfirmation(_) => panic!("restore needs no confirmation"),
        }
        assert!(!store.is_not_interested("event1"));
    }

    #[test]
    fn test_unknown_ids_are_stored_without_validation() {
        let mut store = fresh_store();
        let target = SubscribeTarget::organization("org999", "Ghost Org");

        store.subscribe_to(&target).unwrap();
        assert!(store.is_subscribed("org999"));
    }
}
