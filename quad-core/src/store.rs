//! Persistence and change notification for user preferences.
//!
//! The store keeps one in-memory snapshot of [`UserPreferences`] backed
//! by a [`StorageBackend`]. Reads fail open: a missing or corrupt
//! persisted record silently becomes the default. Writes replace the
//! whole record atomically (temp file + rename on the file backend) and
//! then notify every registered observer synchronously, so any view
//! derived from preferences sees the new snapshot before control
//! returns to the caller.

use std::cell::RefCell;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{QuadError, QuadResult};
use crate::preferences::UserPreferences;

const PREFERENCES_FILE: &str = "preferences.json";

/// Where the serialized preferences record lives.
pub trait StorageBackend {
    /// The raw persisted record, or `None` if nothing was saved yet.
    fn read(&self) -> QuadResult<Option<String>>;
    fn write(&self, contents: &str) -> QuadResult<()>;
}

/// File-backed storage under the user's config directory.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> FileBackend {
        FileBackend { path }
    }

    /// Default location: `<config dir>/quad/preferences.json`
    pub fn default_path() -> QuadResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| QuadError::Storage("Could not determine config directory".into()))?
            .join("quad");

        Ok(config_dir.join(PREFERENCES_FILE))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> QuadResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn write(&self, contents: &str) -> QuadResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write to a sibling temp file and rename so a concurrent
        // reader never observes a partially written record.
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, contents)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-memory storage, used by tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryBackend {
    contents: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> QuadResult<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> QuadResult<()> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

/// Handle for removing a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&UserPreferences)>;

/// The single mutable resource of the system.
///
/// Callers read the latest snapshot via [`PreferencesStore::preferences`]
/// and register observers via [`PreferencesStore::observe`] instead of
/// relying on ambient reactivity. `version` increments on every
/// committed save, which makes staleness checkable in tests.
pub struct PreferencesStore<B: StorageBackend> {
    backend: B,
    current: UserPreferences,
    version: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl<B: StorageBackend> PreferencesStore<B> {
    /// Open the store, reading the persisted record if there is one.
    pub fn open(backend: B) -> PreferencesStore<B> {
        let current = read_or_default(&backend);
        PreferencesStore {
            backend,
            current,
            version: 0,
            listeners: vec![],
            next_listener_id: 0,
        }
    }

    /// The latest committed snapshot.
    pub fn preferences(&self) -> &UserPreferences {
        &self.current
    }

    /// Monotonic counter, bumped on every committed save.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Persist `next` as the new record and notify observers.
    ///
    /// The snapshot only advances after the backend write succeeds, so a
    /// failed save leaves the store (and every observer) on the old
    /// value.
    pub fn save(&mut self, next: UserPreferences) -> QuadResult<()> {
        let serialized = serde_json::to_string_pretty(&next)?;
        self.backend.write(&serialized)?;

        debug!(version = self.version + 1, "preferences saved");
        self.current = next;
        self.version += 1;

        for (_, listener) in &mut self.listeners {
            listener(&self.current);
        }
        Ok(())
    }

    /// Register an observer called after every committed save.
    pub fn observe(&mut self, listener: impl FnMut(&UserPreferences) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unobserve(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }
}

/// Read the persisted record, falling back to the default on anything
/// missing or malformed. Never surfaces an error to the caller.
fn read_or_default<B: StorageBackend>(backend: &B) -> UserPreferences {
    match backend.read() {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("corrupt preferences record, using defaults: {e}");
                UserPreferences::default()
            }
        },
        Ok(None) => UserPreferences::default(),
        Err(e) => {
            warn!("could not read preferences, using defaults: {e}");
            UserPreferences::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_load_on_empty_storage_returns_documented_default() {
        let store = PreferencesStore::open(MemoryBackend::new());
        assert_eq!(
            store.preferences().subscribed_groups,
            vec!["group8", "group5", "group12"]
        );
        assert!(store.preferences().interested_events.is_empty());
        assert!(store.preferences().not_interested_events.is_empty());
    }

    #[test]
    fn test_load_on_corrupt_storage_returns_default() {
        let backend = MemoryBackend::new();
        backend.write("{ definitely not json").unwrap();

        let store = PreferencesStore::open(backend);
        assert_eq!(*store.preferences(), UserPreferences::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut prefs = UserPreferences::default();
        prefs.subscribed_groups = vec!["group1".to_string()];
        prefs.not_interested_events = vec!["event9".to_string()];

        let mut store = PreferencesStore::open(MemoryBackend::new());
        store.save(prefs.clone()).unwrap();

        let raw = store.backend.read().unwrap().unwrap();
        let reopened: UserPreferences = serde_json::from_str(&raw).unwrap();
        assert_eq!(reopened, prefs);
    }

    #[test]
    fn test_file_backend_round_trips_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = UserPreferences::default();
        prefs.subscribed_groups.push("group3".to_string());

        let mut store = PreferencesStore::open(FileBackend::new(path.clone()));
        store.save(prefs.clone()).unwrap();

        let reopened = PreferencesStore::open(FileBackend::new(path));
        assert_eq!(*reopened.preferences(), prefs);
    }

    #[test]
    fn test_observers_see_every_save() {
        let seen = Rc::new(Cell::new(0u32));
        let seen_by_listener = Rc::clone(&seen);

        let mut store = PreferencesStore::open(MemoryBackend::new());
        store.observe(move |_| seen_by_listener.set(seen_by_listener.get() + 1));

        store.save(UserPreferences::default()).unwrap();
        store.save(UserPreferences::default().with_subscription("group1")).unwrap();

        assert_eq!(seen.get(), 2);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_unobserve_stops_notifications() {
        let seen = Rc::new(Cell::new(0u32));
        let seen_by_listener = Rc::clone(&seen);

        let mut store = PreferencesStore::open(MemoryBackend::new());
        let id = store.observe(move |_| seen_by_listener.set(seen_by_listener.get() + 1));
        store.unobserve(id);

        store.save(UserPreferences::default()).unwrap();
        assert_eq!(seen.get(), 0);
    }
}
