pub mod json_backend;

use std::path::{Path, PathBuf};

use crate::core::store::FarmStore;

pub type Result<T> = crate::errors::Result<T>;

/// Abstraction over persistence backends capable of storing farm snapshots.
pub trait StorageBackend: Send + Sync {
    /// Persists the store under `name` and returns the written location.
    fn save(&self, store: &FarmStore, name: &str) -> Result<PathBuf>;
    fn load(&self, name: &str) -> Result<FarmStore>;
    /// Names of the stored snapshots, sorted.
    fn list(&self) -> Result<Vec<String>>;
    fn exists(&self, name: &str) -> bool;
    fn snapshot_path(&self, name: &str) -> PathBuf;

    /// Ad-hoc file helpers; default implementations use the JSON format.
    fn save_to_path(&self, store: &FarmStore, path: &Path) -> Result<()> {
        json_backend::save_store_to_path(store, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<FarmStore> {
        json_backend::load_store_from_path(path)
    }
}

pub use json_backend::{integrity_warnings, JsonStorage};
