//! Commands that mutate preferences: subscribe, unsubscribe, hide,
//! restore. Destructive mutations go through the store's pending-action
//! protocol and are gated on a `dialoguer` confirmation unless `--yes`.

use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use quad_core::store::StorageBackend;
use quad_core::{Catalog, PendingAction, PreferencesStore, SubscribeTarget, ToggleOutcome};

use crate::render;

fn resolve_target(catalog: &Catalog, id: &str, org: bool) -> SubscribeTarget {
    // Unknown ids are accepted; the id itself stands in for the name.
    if org {
        let name = catalog.organization(id).map_or(id, |o| o.name.as_str());
        SubscribeTarget::organization(id, name)
    } else {
        let name = catalog.group(id).map_or(id, |g| g.name.as_str());
        SubscribeTarget::group(id, name)
    }
}

pub fn subscribe<B: StorageBackend>(
    catalog: &Catalog,
    store: &mut PreferencesStore<B>,
    id: &str,
    org: bool,
) -> Result<()> {
    let target = resolve_target(catalog, id, org);
    match store.subscribe_to(&target)? {
        Some(notice) => render::print_notice(&notice),
        None => println!("{}", format!("Already subscribed to {}", target.name).dimmed()),
    }
    Ok(())
}

pub fn unsubscribe<B: StorageBackend>(
    catalog: &Catalog,
    store: &mut PreferencesStore<B>,
    id: &str,
    org: bool,
    skip_confirm: bool,
) -> Result<()> {
    if !store.is_subscribed(id) {
        println!("{}", format!("You're not subscribed to {id}").dimmed());
        return Ok(());
    }

    let target = resolve_target(catalog, id, org);
    let pending = store.request_unsubscribe(&target);
    if let Some(pending) = gate(pending, skip_confirm)? {
        let notice = store.confirm(pending)?;
        render::print_notice(&notice);
    }
    Ok(())
}

pub fn hide<B: StorageBackend>(
    catalog: &Catalog,
    store: &mut PreferencesStore<B>,
    event_id: &str,
    skip_confirm: bool,
) -> Result<()> {
    if store.is_not_interested(event_id) {
        println!("{}", "Already hidden".dimmed());
        return Ok(());
    }

    let title = event_title(catalog, event_id);
    match store.toggle_event_interest(event_id, title)? {
        ToggleOutcome::NeedsConfirmation(pending) => {
            if let Some(pending) = gate(pending, skip_confirm)? {
                let notice = store.confirm(pending)?;
                render::print_notice(&notice);
            }
        }
        // Unreachable given the check above; a restore here would mean
        // the toggle raced something, so just report it.
        ToggleOutcome::Restored(notice) => render::print_notice(&notice),
    }
    Ok(())
}

pub fn restore<B: StorageBackend>(
    catalog: &Catalog,
    store: &mut PreferencesStore<B>,
    event_id: &str,
) -> Result<()> {
    if !store.is_not_interested(event_id) {
        println!("{}", "This event is not hidden".dimmed());
        return Ok(());
    }

    let title = event_title(catalog, event_id);
    if let ToggleOutcome::Restored(notice) = store.toggle_event_interest(event_id, title)? {
        render::print_notice(&notice);
    }
    Ok(())
}

fn event_title<'a>(catalog: &'a Catalog, event_id: &'a str) -> &'a str {
    catalog
        .events
        .iter()
        .chain(catalog.universal_events.iter())
        .find(|e| e.id == event_id)
        .map_or(event_id, |e| e.title.as_str())
}

/// The confirmation gate: returns the pending action back if the user
/// confirmed (or `--yes` was passed), `None` if they cancelled.
fn gate(pending: PendingAction, skip_confirm: bool) -> Result<Option<PendingAction>> {
    if skip_confirm {
        return Ok(Some(pending));
    }

    let confirmed = Confirm::new()
        .with_prompt(pending.prompt())
        .default(false)
        .interact()?;

    if confirmed {
        Ok(Some(pending))
    } else {
        println!("{}", "Cancelled".dimmed());
        Ok(None)
    }
}
