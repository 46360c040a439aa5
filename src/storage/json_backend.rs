use serde::Serialize;
use std::{
    collections::HashSet,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        store::FarmStore,
        utils::{ensure_dir, PathResolver},
    },
    domain::RecordId,
    errors::FarmError,
};

use super::{Result, StorageBackend};

const SNAPSHOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_SNAPSHOT: &str = "farm";

/// Stores each snapshot as a JSON document under `<base>/snapshots`.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    snapshots_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let app_root = PathResolver::resolve_base(root);
        ensure_dir(&app_root)?;
        let snapshots_dir = PathResolver::snapshot_dir_in(&app_root);
        ensure_dir(&snapshots_dir)?;
        Ok(Self {
            root: app_root,
            snapshots_dir,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, store: &FarmStore, name: &str) -> Result<PathBuf> {
        let path = self.snapshot_path(name);
        save_store_to_path(store, &path)?;
        Ok(path)
    }

    fn load(&self, name: &str) -> Result<FarmStore> {
        let path = self.snapshot_path(name);
        if !path.exists() {
            return Err(FarmError::Storage(format!(
                "snapshot `{}` not found",
                canonical_name(name)
            )));
        }
        load_store_from_path(&path)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.snapshots_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.snapshots_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &str) -> bool {
        self.snapshot_path(name).exists()
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        self.snapshots_dir
            .join(format!("{}.{}", canonical_name(name), SNAPSHOT_EXTENSION))
    }
}

pub fn save_store_to_path(store: &FarmStore, path: &Path) -> Result<()> {
    write_json_atomic(path, store)
}

/// Reads a snapshot and realigns the id counters with the loaded rows.
pub fn load_store_from_path(path: &Path) -> Result<FarmStore> {
    let data = fs::read_to_string(path)?;
    let mut store: FarmStore = serde_json::from_str(&data)?;
    store.reconcile_ids();
    Ok(store)
}

/// Serializes `value` as pretty JSON into a sibling temp file, then renames it
/// over `path`.
pub(crate) fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_path(path);
    write_file(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        DEFAULT_SNAPSHOT.into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Lists dangling references in a loaded store. Nothing is repaired.
pub fn integrity_warnings(store: &FarmStore) -> Vec<String> {
    let usuarios: HashSet<RecordId> = store.usuarios.iter().map(|u| u.id).collect();
    let propriedades: HashSet<RecordId> = store.propriedades.iter().map(|p| p.id).collect();
    let safras: HashSet<RecordId> = store.safras.iter().map(|s| s.id).collect();
    let produtos: HashSet<RecordId> = store.produtos.iter().map(|p| p.id).collect();
    let mut warnings = Vec::new();

    for propriedade in store.propriedades.iter() {
        if !usuarios.contains(&propriedade.usuario_id) {
            warnings.push(format!(
                "property {} references unknown user {}",
                propriedade.id, propriedade.usuario_id
            ));
        }
    }
    for safra in store.safras.iter() {
        if !propriedades.contains(&safra.propriedade_id) {
            warnings.push(format!(
                "season {} references missing property {}",
                safra.id, safra.propriedade_id
            ));
        }
    }
    for operacao in store.operacoes.iter() {
        if !safras.contains(&operacao.safra_id) {
            warnings.push(format!(
                "operation {} references missing season {}",
                operacao.id, operacao.safra_id
            ));
        }
        if let Some(produto) = operacao.produto_id {
            if !produtos.contains(&produto) {
                warnings.push(format!(
                    "operation {} references unknown product {}",
                    operacao.id, produto
                ));
            }
        }
    }
    for custo in store.custos_variaveis.iter() {
        if !safras.contains(&custo.safra_id) {
            warnings.push(format!(
                "variable cost {} references missing season {}",
                custo.id, custo.safra_id
            ));
        }
    }
    for colheita in store.colheitas.iter() {
        if !safras.contains(&colheita.safra_id) {
            warnings.push(format!(
                "harvest {} references missing season {}",
                colheita.id, colheita.safra_id
            ));
        }
    }

    warnings
}
