//! The static catalog: campus events, groups, organizations, categories.
//!
//! Records are loaded once (typically from an embedded JSON dataset) and
//! are read-only afterwards. Nothing else in the crate mutates them; all
//! personalization lives in [`crate::preferences`] and is applied on top
//! by [`crate::visibility`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QuadError, QuadResult};

/// A campus event.
///
/// An event originates from either a student group (`group_id`) or a
/// campus organization (`organizer_id`); `group_name` is a denormalized
/// copy kept for display. `end_time >= start_time` is expected from the
/// dataset but not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub group_id: String,
    pub group_name: String,
    #[serde(default)]
    pub organizer_id: Option<String>,
    pub category_id: String,
    pub category_name: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// A student group (club, team, program).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub category_name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A campus organization. Same shape as [`Group`], separate id space.
pub type Organization = Group;

/// A label used for grouping and filtering; no lifecycle of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// The full static dataset.
///
/// `universal_events` is the fixed set of campus-wide events (academic
/// calendar entries like exam weeks) that bypass subscription filtering
/// entirely: always visible, never hideable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub groups: Vec<Group>,
    pub organizations: Vec<Organization>,
    pub events: Vec<Event>,
    #[serde(default)]
    pub universal_events: Vec<Event>,
}

impl Catalog {
    /// Parse a catalog from its JSON representation.
    pub fn from_json(raw: &str) -> QuadResult<Catalog> {
        serde_json::from_str(raw)
            .map_err(|e| QuadError::Catalog(format!("invalid catalog data: {e}")))
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    /// Events published by a group, in catalog order.
    pub fn events_for_group<'a>(&'a self, group_id: &str) -> Vec<&'a Event> {
        self.events.iter().filter(|e| e.group_id == group_id).collect()
    }

    /// Events published by an organization, in catalog order.
    pub fn events_for_organizer<'a>(&'a self, organizer_id: &str) -> Vec<&'a Event> {
        self.events
            .iter()
            .filter(|e| e.organizer_id.as_deref() == Some(organizer_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_with_optional_fields_missing() {
        let raw = r#"{
            "categories": [{"id": "cat1", "name": "Arts"}],
            "groups": [{
                "id": "group1",
                "name": "Film Club",
                "description": "Weekly screenings",
                "categoryId": "cat1",
                "categoryName": "Arts"
            }],
            "organizations": [],
            "events": [{
                "id": "event1",
                "title": "Movie Night",
                "description": "Open to all",
                "startTime": "2025-03-20T19:00:00Z",
                "endTime": "2025-03-20T21:00:00Z",
                "location": "Student Center",
                "groupId": "group1",
                "groupName": "Film Club",
                "categoryId": "cat1",
                "categoryName": "Arts"
            }]
        }"#;

        let catalog = Catalog::from_json(raw).expect("Should parse catalog");
        assert_eq!(catalog.events.len(), 1);
        assert!(catalog.universal_events.is_empty());
        assert!(catalog.group("group1").is_some());
        assert!(catalog.group("group2").is_none());
        assert_eq!(catalog.events_for_group("group1").len(), 1);
        assert!(catalog.events_for_organizer("org1").is_empty());
    }

    #[test]
    fn test_invalid_catalog_is_a_catalog_error() {
        let err = Catalog::from_json("not json").unwrap_err();
        assert!(matches!(err, QuadError::Catalog(_)));
    }
}
