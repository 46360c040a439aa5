use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::store::{FarmStore, CURRENT_SCHEMA_VERSION};
use crate::errors::{FarmError, Result};
use crate::storage::{integrity_warnings, StorageBackend};

/// Metadata describing the outcome of a load operation.
#[derive(Debug, Clone)]
pub struct LoadMetadata {
    pub warnings: Vec<String>,
    pub path: Option<PathBuf>,
    pub name: Option<String>,
    pub schema_version: u8,
}

/// Owns the session's store and coordinates it with persistence.
pub struct FarmManager {
    store: FarmStore,
    current_name: Option<String>,
    current_path: Option<PathBuf>,
    storage: Box<dyn StorageBackend>,
}

impl FarmManager {
    /// Starts a session with an empty, unnamed store.
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            store: FarmStore::new(),
            current_name: None,
            current_path: None,
            storage,
        }
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn store(&self) -> &FarmStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FarmStore {
        &mut self.store
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn list(&self) -> Result<Vec<String>> {
        self.storage.list()
    }

    /// Replaces the session store with the named snapshot.
    pub fn open(&mut self, name: &str) -> Result<LoadMetadata> {
        let store = self.storage.load(name)?;
        self.apply_load(store, Some(name.to_string()), None)
    }

    pub fn load_from_path(&mut self, path: &Path) -> Result<LoadMetadata> {
        let store = self.storage.load_from_path(path)?;
        self.apply_load(store, None, Some(path.to_path_buf()))
    }

    pub fn save(&mut self) -> Result<PathBuf> {
        if let Some(name) = self.current_name.clone() {
            let path = self.storage.save(&self.store, &name)?;
            self.current_path = Some(path.clone());
            Ok(path)
        } else if let Some(path) = self.current_path.clone() {
            self.storage.save_to_path(&self.store, &path)?;
            Ok(path)
        } else {
            Err(FarmError::Storage(
                "session has no name yet, use save_as".into(),
            ))
        }
    }

    pub fn save_as(&mut self, name: &str) -> Result<PathBuf> {
        let path = self.storage.save(&self.store, name)?;
        self.current_name = Some(name.to_string());
        self.current_path = Some(path.clone());
        info!(name, path = %path.display(), "farm snapshot saved");
        Ok(path)
    }

    fn ensure_schema_support(schema_version: u8) -> Result<()> {
        if schema_version > CURRENT_SCHEMA_VERSION {
            return Err(FarmError::Storage(format!(
                "snapshot schema v{} is newer than supported v{}",
                schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(())
    }

    fn apply_load(
        &mut self,
        store: FarmStore,
        name: Option<String>,
        path: Option<PathBuf>,
    ) -> Result<LoadMetadata> {
        Self::ensure_schema_support(store.schema_version)?;
        let warnings = integrity_warnings(&store);
        for warning in &warnings {
            warn!(%warning, "snapshot integrity");
        }
        let path = match (&name, path) {
            (_, Some(path)) => Some(path),
            (Some(name), None) => Some(self.storage.snapshot_path(name)),
            (None, None) => None,
        };
        let schema_version = store.schema_version;
        self.store = store;
        self.current_name = name.clone();
        self.current_path = path.clone();
        info!(
            name = name.as_deref().unwrap_or("-"),
            warnings = warnings.len(),
            "farm snapshot loaded"
        );
        Ok(LoadMetadata {
            warnings,
            path,
            name,
            schema_version,
        })
    }
}
