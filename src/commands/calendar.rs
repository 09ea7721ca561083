use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use quad_core::store::StorageBackend;
use quad_core::{Catalog, PreferencesStore, visibility};

use crate::render;

pub fn run<B: StorageBackend>(
    catalog: &Catalog,
    store: &PreferencesStore<B>,
    date: Option<&str>,
) -> Result<()> {
    let day = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))?,
        None => chrono::Local::now().date_naive(),
    };

    let events = visibility::events_on_day(catalog, store.preferences(), day);

    println!("{}", format!("Events for {}", day.format("%B %-d, %Y")).bold());
    println!();

    if events.is_empty() {
        println!("{}", "No events on this date".dimmed());
        println!("{}", "Try a different date".dimmed());
        return Ok(());
    }

    for event in events {
        render::print_event(event);
        if let Some(info) = &event.additional_info {
            println!("    {}", info.dimmed());
        }
        println!();
    }

    Ok(())
}
