//! Persisted state: an in-memory value mirrored to a storage key.
//!
//! Every mutation goes through [`Persisted::mutate`], which runs the change
//! and then writes the whole state back. Readers use [`Persisted::state`].
//!
//! The stored record wraps the state with a version tag:
//!
//! ```json
//! {"state": {"items": []}, "version": 0}
//! ```

use crate::{Cache, Storage, StorageError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

/// A state type that can be persisted under a fixed key.
pub trait Persist: Serialize + DeserializeOwned + Default {
    /// Storage key for this state.
    const STORAGE_KEY: &'static str;

    /// Version tag written alongside the state. Records carrying a
    /// different tag are discarded on hydrate.
    const VERSION: u32 = 0;
}

/// The record written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState<T> {
    /// The persisted state.
    pub state: T,
    /// Version tag of the state layout.
    pub version: u32,
}

/// Live state plus the storage it mirrors to.
///
/// # Example
///
/// ```rust,ignore
/// let mut cart = Persisted::<CartStore, _>::hydrate(storage)?;
/// cart.mutate(|cart| cart.add_item(item))?;
/// println!("{} items", cart.state().item_count());
/// ```
#[derive(Debug)]
pub struct Persisted<T, S> {
    cache: Cache<S>,
    state: T,
}

impl<T, S> Persisted<T, S>
where
    T: Persist,
    S: Storage,
{
    /// Load the state from storage, or start from `T::default()`.
    ///
    /// Records that fail to parse or carry a different version tag are
    /// ignored; they are overwritten by the next flush.
    pub fn hydrate(storage: S) -> Result<Self, StorageError> {
        let cache = Cache::new(storage);
        let state = Self::load(&cache)?;
        Ok(Self { cache, state })
    }

    fn load(cache: &Cache<S>) -> Result<T, StorageError> {
        let key = T::STORAGE_KEY;
        let record = match cache.get::<PersistedState<T>>(key) {
            Ok(record) => record,
            Err(StorageError::SerializeError(e)) => {
                warn!(key, error = %e, "discarding unreadable persisted state");
                None
            }
            Err(e) => return Err(e),
        };

        match record {
            Some(record) if record.version == T::VERSION => {
                debug!(key, version = record.version, "hydrated persisted state");
                Ok(record.state)
            }
            Some(record) => {
                warn!(
                    key,
                    found = record.version,
                    expected = T::VERSION,
                    "discarding persisted state with mismatched version"
                );
                Ok(T::default())
            }
            None => Ok(T::default()),
        }
    }

    /// Read access to the live state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Apply `f` to the state, then flush the full state to storage.
    ///
    /// The in-memory change is kept even if the flush fails.
    pub fn mutate<R, F>(&mut self, f: F) -> Result<R, StorageError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = f(&mut self.state);
        self.flush()?;
        Ok(result)
    }

    /// Write the current state to storage.
    pub fn flush(&self) -> Result<(), StorageError> {
        let record = PersistedState {
            state: &self.state,
            version: T::VERSION,
        };
        self.cache.set(T::STORAGE_KEY, &record)?;
        debug!(key = T::STORAGE_KEY, "flushed persisted state");
        Ok(())
    }

    /// Replace the live state with whatever storage holds now.
    ///
    /// A key removed externally yields the default state.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        self.state = Self::load(&self.cache)?;
        Ok(())
    }

    /// Remove the stored record and reset to the default state.
    pub fn purge(&mut self) -> Result<(), StorageError> {
        self.cache.delete(T::STORAGE_KEY)?;
        self.state = T::default();
        debug!(key = T::STORAGE_KEY, "purged persisted state");
        Ok(())
    }
}
