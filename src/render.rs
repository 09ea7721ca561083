//! Shared output formatting for event and notice rendering.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use quad_core::{Event, Notice};

/// Print one event as an indented block: title, time, location.
pub fn print_event(event: &Event) {
    println!("  {}  {}", event.title.bold(), format!("[{}]", event.category_name).dimmed());
    println!("    {}", format_time_range(event.start_time, event.end_time).dimmed());
    println!("    {} · {}", event.location.dimmed(), event.group_name.dimmed());
}

/// Format a start/end pair, collapsing the date when both fall on the
/// same day (e.g. "Fri Apr 25 18:00 - 20:00").
pub fn format_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    if start.date_naive() == end.date_naive() {
        format!(
            "{} {} - {}",
            start.format("%a %b %-d"),
            start.format("%H:%M"),
            end.format("%H:%M")
        )
    } else {
        format!(
            "{} {} - {} {}",
            start.format("%a %b %-d"),
            start.format("%H:%M"),
            end.format("%a %b %-d"),
            end.format("%H:%M")
        )
    }
}

/// Print a committed mutation's notice ("Subscribed!" etc.).
pub fn print_notice(notice: &Notice) {
    println!("{} {}", notice.title.bold().green(), notice.body);
}
