use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use quad_core::store::StorageBackend;
use quad_core::{Catalog, Event, Group, PreferencesStore, visibility};

use crate::render;

pub fn run_group<B: StorageBackend>(
    catalog: &Catalog,
    store: &PreferencesStore<B>,
    id: &str,
) -> Result<()> {
    match catalog.group(id) {
        Some(group) => print_detail(group, catalog.events_for_group(id), store),
        None => {
            println!("{}", "Group not found".dimmed());
            Ok(())
        }
    }
}

pub fn run_org<B: StorageBackend>(
    catalog: &Catalog,
    store: &PreferencesStore<B>,
    id: &str,
) -> Result<()> {
    match catalog.organization(id) {
        Some(org) => print_detail(org, catalog.events_for_organizer(id), store),
        None => {
            println!("{}", "Organization not found".dimmed());
            Ok(())
        }
    }
}

/// The detail page: header, contact info, then upcoming/past tabs.
///
/// Subscription and not-interested state never filter here; they only
/// change the subscribe hint.
fn print_detail<B: StorageBackend>(
    group: &Group,
    events: Vec<&Event>,
    store: &PreferencesStore<B>,
) -> Result<()> {
    println!("{}  {}", group.name.bold(), format!("[{}]", group.category_name).dimmed());
    if store.is_subscribed(&group.id) {
        println!("{}", "Subscribed".green());
    } else {
        println!("{}", format!("Not subscribed · quad subscribe {}", group.id).dimmed());
    }
    println!();
    println!("{}", group.description);

    if let Some(email) = &group.contact_email {
        println!("{} {}", "Email:".dimmed(), email);
    }
    if let Some(url) = &group.website_url {
        println!("{} {}", "Web:".dimmed(), url);
    }

    let partition = visibility::partition_events(events, Utc::now());

    println!();
    println!("{}", "Upcoming Events".bold());
    if partition.upcoming.is_empty() {
        println!("{}", "No upcoming events".dimmed());
    }
    for event in &partition.upcoming {
        render::print_event(event);
    }

    println!();
    println!("{}", "Past Events".bold());
    if partition.past.is_empty() {
        println!("{}", "No past events".dimmed());
    }
    for event in &partition.past {
        render::print_event(event);
    }

    Ok(())
}
