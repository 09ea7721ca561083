//! Core types and logic for the quad ecosystem.
//!
//! This crate provides everything the presentation surfaces need:
//! - `catalog` for the immutable event/group/organization records
//! - `store` for persisted user preferences with change notification
//! - `actions` for the preference mutators (subscribe, hide, restore)
//! - `visibility` for deriving which events each view should show

pub mod actions;
pub mod catalog;
pub mod error;
pub mod preferences;
pub mod store;
pub mod visibility;

pub use actions::{Notice, PendingAction, SubscribeTarget, TargetKind, ToggleOutcome};
pub use catalog::{Catalog, Category, Event, Group, Organization};
pub use error::{QuadError, QuadResult};
pub use preferences::UserPreferences;
pub use store::{FileBackend, MemoryBackend, PreferencesStore, StorageBackend};
