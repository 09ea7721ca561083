use anyhow::Result;
use owo_colors::OwoColorize;
use quad_core::store::StorageBackend;
use quad_core::{Catalog, PreferencesStore, visibility};

use crate::render;

pub fn run<B: StorageBackend>(
    catalog: &Catalog,
    store: &PreferencesStore<B>,
    group_scope: Option<&str>,
) -> Result<()> {
    let events = visibility::feed(catalog, store.preferences(), group_scope);

    println!("{}", "Your Feed".bold());
    println!();

    if events.is_empty() {
        let hint = match group_scope {
            None => "Subscribe to groups to see their events here",
            Some(_) => "No events from this group",
        };
        println!("{}", "No events in your feed".dimmed());
        println!("{}", hint.dimmed());
        return Ok(());
    }

    for event in events {
        render::print_event(event);
        println!();
    }

    Ok(())
}
