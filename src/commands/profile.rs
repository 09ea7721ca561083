use anyhow::Result;
use owo_colors::OwoColorize;
use quad_core::store::StorageBackend;
use quad_core::{Catalog, PreferencesStore};

pub fn run<B: StorageBackend>(catalog: &Catalog, store: &PreferencesStore<B>) -> Result<()> {
    let prefs = store.preferences();

    println!("{}", "Your Subscriptions".bold());
    if prefs.subscribed_groups.is_empty() {
        println!("{}", "No subscriptions yet · quad explore".dimmed());
    }
    for id in &prefs.subscribed_groups {
        // A subscription may point at a group, an organization, or
        // nothing at all (ids are stored without validation).
        let name = catalog
            .group(id)
            .or_else(|| catalog.organization(id))
            .map(|g| g.name.as_str())
            .unwrap_or(id.as_str());
        println!("  {}  {}", name, id.dimmed());
    }

    println!();
    println!("{}", "Hidden Events".bold());
    if prefs.not_interested_events.is_empty() {
        println!("{}", "No hidden events".dimmed());
    }
    for id in &prefs.not_interested_events {
        let title = catalog
            .events
            .iter()
            .find(|e| &e.id == id)
            .map(|e| e.title.as_str())
            .unwrap_or(id.as_str());
        println!("  {}  {}  {}", title, id.dimmed(), format!("quad restore {id}").dimmed());
    }

    Ok(())
}
