//! Local key-value storage and persisted state for Shopverse.
//!
//! Provides a `localStorage`-shaped [`Storage`] trait with in-memory and
//! directory-backed implementations, a typed JSON [`Cache`], and
//! [`Persisted`], which mirrors an in-memory state value to a fixed key.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopverse_storage::{FileStorage, Persist, Persisted};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, Default)]
//! struct Drafts {
//!     notes: Vec<String>,
//! }
//!
//! impl Persist for Drafts {
//!     const STORAGE_KEY: &'static str = "drafts";
//! }
//!
//! let storage = FileStorage::open(".shopverse")?;
//! let mut drafts = Persisted::<Drafts, _>::hydrate(storage)?;
//!
//! // Mutate, then flush
//! drafts.mutate(|d| d.notes.push("gift wrap".to_string()))?;
//! ```

mod backend;
mod error;
mod kv;
mod persist;

pub use backend::{FileStorage, MemoryStorage, Storage};
pub use error::StorageError;
pub use kv::Cache;
pub use persist::{Persist, Persisted, PersistedState};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Cache, FileStorage, MemoryStorage, Persist, Persisted, PersistedState, Storage,
        StorageError,
    };
}
