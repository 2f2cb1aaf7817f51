use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key-value blob store the host provides for durability. Failures are
/// environmental, not part of the engine's error taxonomy.
pub trait StateStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<S: StateStore + ?Sized> StateStore for Rc<S> {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).save(key, value)
    }
}

/// Namespaced key under which a type persists itself.
pub trait StorageKey {
    const KEY: &'static str;
}

/// Load a value from the store, falling back to its default when the blob is
/// missing or unreadable.
pub fn load_or_default<T>(store: &dyn StateStore) -> T
where
    T: StorageKey + DeserializeOwned + Default,
{
    match store.load(T::KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Discarding malformed blob at {}: {}", T::KEY, err);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            log::warn!("Could not load {}: {}", T::KEY, err);
            T::default()
        }
    }
}

/// Serialize and save, logging instead of propagating failures.
pub fn save_best_effort<T>(store: &dyn StateStore, value: &T)
where
    T: StorageKey + Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("Could not serialize {}: {}", T::KEY, err);
            return;
        }
    };
    if let Err(err) = store.save(T::KEY, &raw) {
        log::warn!("Could not save {}: {}", T::KEY, err);
    }
}

/// In-memory store for tests and hosts without platform storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}
