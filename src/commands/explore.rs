use anyhow::Result;
use owo_colors::OwoColorize;
use quad_core::store::StorageBackend;
use quad_core::{Catalog, Group, PreferencesStore};

pub fn run<B: StorageBackend>(catalog: &Catalog, store: &PreferencesStore<B>) -> Result<()> {
    println!("{}", "Groups".bold());
    for group in &catalog.groups {
        print_listing(group, store);
    }

    println!();
    println!("{}", "Organizations".bold());
    for org in &catalog.organizations {
        print_listing(org, store);
    }

    Ok(())
}

fn print_listing<B: StorageBackend>(group: &Group, store: &PreferencesStore<B>) {
    let marker = if store.is_subscribed(&group.id) {
        format!("{}", "●".green())
    } else {
        format!("{}", "○".dimmed())
    };
    println!(
        "  {} {}  {}  {}",
        marker,
        group.name,
        format!("[{}]", group.category_name).dimmed(),
        group.id.dimmed()
    );
}
