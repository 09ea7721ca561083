//! The persisted user preferences record.
//!
//! Serialized as a single camelCase JSON object so the on-disk shape is
//! exactly `{subscribedGroups, interestedEvents, notInterestedEvents}`.
//! Uniqueness of the id lists is enforced by the mutators in
//! [`crate::actions`], not by this type or by storage.

use serde::{Deserialize, Serialize};

/// Default subscriptions for a first-time user.
pub const DEFAULT_SUBSCRIPTIONS: [&str; 3] = ["group8", "group5", "group12"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Ids of subscribed groups and organizations (separate id spaces,
    /// one combined opt-in set).
    pub subscribed_groups: Vec<String>,
    /// Write-only today: cleared when an event is hidden, never read
    /// back for filtering. Kept for on-disk compatibility.
    pub interested_events: Vec<String>,
    /// Per-event suppression flags ("not interested").
    pub not_interested_events: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            subscribed_groups: DEFAULT_SUBSCRIPTIONS.map(String::from).to_vec(),
            interested_events: vec![],
            not_interested_events: vec![],
        }
    }
}

impl UserPreferences {
    pub fn is_subscribed(&self, id: &str) -> bool {
        self.subscribed_groups.iter().any(|g| g == id)
    }

    pub fn is_not_interested(&self, event_id: &str) -> bool {
        self.not_interested_events.iter().any(|e| e == event_id)
    }

    /// New snapshot with `id` subscribed. Appending only when absent
    /// keeps the list duplicate-free.
    pub fn with_subscription(&self, id: &str) -> UserPreferences {
        let mut next = self.clone();
        if !next.is_subscribed(id) {
            next.subscribed_groups.push(id.to_string());
        }
        next
    }

    /// New snapshot with `id` unsubscribed. No-op if absent.
    pub fn without_subscription(&self, id: &str) -> UserPreferences {
        let mut next = self.clone();
        next.subscribed_groups.retain(|g| g != id);
        next
    }

    /// New snapshot with the event hidden from the feed. Hiding also
    /// drops the id from `interested_events` so an event is never both.
    pub fn with_event_hidden(&self, event_id: &str) -> UserPreferences {
        let mut next = self.clone();
        if !next.is_not_interested(event_id) {
            next.not_interested_events.push(event_id.to_string());
        }
        next.interested_events.retain(|e| e != event_id);
        next
    }

    /// New snapshot with the event restored to the feed.
    pub fn with_event_restored(&self, event_id: &str) -> UserPreferences {
        let mut next = self.clone();
        next.not_interested_events.retain(|e| e != event_id);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_carry_seed_subscriptions() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.subscribed_groups, vec!["group8", "group5", "group12"]);
        assert!(prefs.interested_events.is_empty());
        assert!(prefs.not_interested_events.is_empty());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::to_string(&UserPreferences::default()).unwrap();
        assert!(json.contains("\"subscribedGroups\""));
        assert!(json.contains("\"interestedEvents\""));
        assert!(json.contains("\"notInterestedEvents\""));
    }

    #[test]
    fn test_subscription_is_duplicate_free() {
        let prefs = UserPreferences::default()
            .with_subscription("group1")
            .with_subscription("group1");
        let count = prefs.subscribed_groups.iter().filter(|g| *g == "group1").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_hiding_clears_interested() {
        let mut prefs = UserPreferences::default();
        prefs.interested_events = vec!["event1".to_string()];

        let next = prefs.with_event_hidden("event1");
        assert!(next.is_not_interested("event1"));
        assert!(!next.interested_events.contains(&"event1".to_string()));
    }
}
