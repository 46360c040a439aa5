//! In-memory record store for a single application session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Benfeitoria, Colheita, CustoFixo, CustoVariavel, Identifiable, Maquinario, OperacaoCampo,
    Produto, Propriedade, RecordId, Safra, Usuario,
};

pub(crate) const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Ordered collection of records of one type with its own id sequence.
///
/// Ids come from a monotonic counter and are never reused, even after
/// deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table<T> {
    #[serde(default)]
    last_id: RecordId,
    #[serde(default = "Vec::new")]
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: Vec::new(),
        }
    }
}

impl<T: Identifiable + Clone> Table<T> {
    /// Assigns the next id to `row`, stores it, and returns the stored copy.
    pub fn insert(&mut self, mut row: T) -> T {
        self.last_id += 1;
        row.assign_id(self.last_id);
        self.rows.push(row.clone());
        row
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Replaces the stored record carrying the same id, returning the previous value.
    pub fn replace(&mut self, row: T) -> Option<T> {
        let slot = self.get_mut(row.id())?;
        Some(std::mem::replace(slot, row))
    }

    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().filter(|row| predicate(row)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last_id(&self) -> RecordId {
        self.last_id
    }

    /// Raises the counter above every stored id. Snapshots written by hand or
    /// by older versions may lack a consistent counter.
    fn reconcile(&mut self) {
        let max_id = self.rows.iter().map(Identifiable::id).max().unwrap_or(0);
        self.last_id = self.last_id.max(max_id);
    }
}

/// Every record kept by the application, grouped per entity type.
///
/// Constructed once per session and passed explicitly to the services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmStore {
    #[serde(default)]
    pub usuarios: Table<Usuario>,
    #[serde(default)]
    pub propriedades: Table<Propriedade>,
    #[serde(default)]
    pub safras: Table<Safra>,
    #[serde(default)]
    pub operacoes: Table<OperacaoCampo>,
    #[serde(default)]
    pub custos_variaveis: Table<CustoVariavel>,
    #[serde(default)]
    pub custos_fixos: Table<CustoFixo>,
    #[serde(default)]
    pub colheitas: Table<Colheita>,
    #[serde(default)]
    pub maquinarios: Table<Maquinario>,
    #[serde(default)]
    pub benfeitorias: Table<Benfeitoria>,
    #[serde(default)]
    pub produtos: Table<Produto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "FarmStore::schema_version_default")]
    pub schema_version: u8,
}

impl Default for FarmStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FarmStore {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            usuarios: Table::default(),
            propriedades: Table::default(),
            safras: Table::default(),
            operacoes: Table::default(),
            custos_variaveis: Table::default(),
            custos_fixos: Table::default(),
            colheitas: Table::default(),
            maquinarios: Table::default(),
            benfeitorias: Table::default(),
            produtos: Table::default(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Brings every id counter in line with the records loaded from a snapshot.
    pub fn reconcile_ids(&mut self) {
        self.usuarios.reconcile();
        self.propriedades.reconcile();
        self.safras.reconcile();
        self.operacoes.reconcile();
        self.custos_variaveis.reconcile();
        self.custos_fixos.reconcile();
        self.colheitas.reconcile();
        self.maquinarios.reconcile();
        self.benfeitorias.reconcile();
        self.produtos.reconcile();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Produto, UnidadeProduto};

    fn produto(nome: &str) -> Produto {
        Produto::new(nome, UnidadeProduto::L, 10.0)
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut table = Table::default();
        let first = table.insert(produto("Glifosato"));
        let second = table.insert(produto("Ureia"));
        assert_eq!((first.id, second.id), (1, 2));

        table.remove(second.id).expect("remove second");
        let third = table.insert(produto("Calcario"));
        assert_eq!(third.id, 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn replace_requires_existing_id() {
        let mut table = Table::default();
        let mut stored = table.insert(produto("Glifosato"));
        stored.preco_unitario = 12.5;
        assert!(table.replace(stored.clone()).is_some());
        assert_eq!(table.get(stored.id).unwrap().preco_unitario, 12.5);

        let mut ghost = produto("Ghost");
        ghost.id = 99;
        assert!(table.replace(ghost).is_none());
    }

    #[test]
    fn reconcile_lifts_counter_above_loaded_rows() {
        let json = r#"{"rows":[{"id":7,"nome":"Ureia","unidade":"kg","preco_unitario":3.0}]}"#;
        let mut table: Table<Produto> = serde_json::from_str(json).expect("parse table");
        assert_eq!(table.last_id(), 0);
        table.reconcile();
        assert_eq!(table.insert(produto("Nova")).id, 8);
    }
}
