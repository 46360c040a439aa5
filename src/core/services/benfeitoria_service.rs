use tracing::debug;

use crate::core::store::FarmStore;
use crate::domain::{Benfeitoria, BenfeitoriaPatch, NamedEntity, Patch, RecordId};

use super::{ensure_usuario_exists, require_amount, require_text, ServiceResult};

pub struct BenfeitoriaService;

impl BenfeitoriaService {
    pub fn add(store: &mut FarmStore, benfeitoria: Benfeitoria) -> ServiceResult<Benfeitoria> {
        ensure_usuario_exists(store, benfeitoria.usuario_id)?;
        Self::validate(&benfeitoria)?;
        let stored = store.benfeitorias.insert(benfeitoria);
        store.touch();
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&Benfeitoria> {
        store.benfeitorias.get(id)
    }

    pub fn list_by_usuario(store: &FarmStore, usuario_id: RecordId) -> Vec<&Benfeitoria> {
        store.benfeitorias.filter(|b| b.usuario_id == usuario_id)
    }

    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: BenfeitoriaPatch,
    ) -> ServiceResult<Option<Benfeitoria>> {
        let Some(mut candidate) = store.benfeitorias.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(&candidate)?;
        store.benfeitorias.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    pub fn remove(store: &mut FarmStore, id: RecordId) -> Option<Benfeitoria> {
        let removed = store.benfeitorias.remove(id)?;
        store.touch();
        debug!(id, nome = removed.name(), "improvement removed");
        Some(removed)
    }

    fn validate(benfeitoria: &Benfeitoria) -> ServiceResult<()> {
        require_text("nome", &benfeitoria.nome)?;
        require_amount("valor_total", benfeitoria.valor_total)
    }
}
