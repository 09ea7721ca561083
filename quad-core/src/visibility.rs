//! Derives which events each view shows.
//!
//! Pure functions over (catalog, preferences snapshot, view context).
//! The feed and calendar views apply the personalization rules; the
//! group/organization detail view deliberately does not, so hidden
//! events remain findable on their group's own page.

use chrono::{DateTime, NaiveDate, Utc};

use crate::catalog::{Catalog, Event};
use crate::preferences::UserPreferences;

/// Feed rule: the event's group is subscribed and the event is not
/// flagged not-interested.
fn in_feed(event: &Event, prefs: &UserPreferences) -> bool {
    !prefs.is_not_interested(&event.id) && prefs.is_subscribed(&event.group_id)
}

/// The personalized feed, ascending by start time.
///
/// `scope` narrows the feed to a single group. Sorting is stable, so
/// events with equal start times keep their catalog order.
pub fn feed<'a>(
    catalog: &'a Catalog,
    prefs: &UserPreferences,
    scope: Option<&str>,
) -> Vec<&'a Event> {
    let mut events: Vec<&Event> = catalog
        .events
        .iter()
        .filter(|e| in_feed(e, prefs))
        .filter(|e| scope.is_none_or(|group_id| e.group_id == group_id))
        .collect();

    events.sort_by_key(|e| e.start_time);
    events
}

/// Does the event occur on the given calendar day?
///
/// Midnight of `day` falling within `[start, end]` covers multi-day
/// events; the same-calendar-day arm covers events that start mid-day,
/// whose start midnight precedes.
fn occurs_on(event: &Event, day: NaiveDate) -> bool {
    let day_start = day.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc();

    (day_start >= event.start_time && day_start <= event.end_time)
        || event.start_time.date_naive() == day
}

/// Events shown on the calendar for one day: the feed-eligible events
/// plus every universal event, regardless of subscriptions.
pub fn events_on_day<'a>(
    catalog: &'a Catalog,
    prefs: &UserPreferences,
    day: NaiveDate,
) -> Vec<&'a Event> {
    catalog
        .events
        .iter()
        .filter(|e| in_feed(e, prefs))
        .chain(catalog.universal_events.iter())
        .filter(|e| occurs_on(e, day))
        .collect()
}

/// A group's or organization's events split for the detail view tabs.
///
/// Events that are neither strictly future nor strictly past at `now`
/// (i.e. ongoing) appear in neither list. That mirrors the app this
/// replaces; see DESIGN.md.
pub struct EventPartition<'a> {
    /// Start strictly after `now`, ascending by start time.
    pub upcoming: Vec<&'a Event>,
    /// End strictly before `now`, descending by start time.
    pub past: Vec<&'a Event>,
}

pub fn partition_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    now: DateTime<Utc>,
) -> EventPartition<'a> {
    let mut upcoming: Vec<&Event> = vec![];
    let mut past: Vec<&Event> = vec![];

    for event in events {
        if event.start_time > now {
            upcoming.push(event);
        } else if event.end_time < now {
            past.push(event);
        }
    }

    upcoming.sort_by_key(|e| e.start_time);
    past.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    EventPartition { upcoming, past }
}
