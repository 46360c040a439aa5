use tracing::info;

use crate::core::store::FarmStore;
use crate::domain::{NamedEntity, Patch, Propriedade, PropriedadePatch, RecordId};

use super::{ensure_usuario_exists, require_optional_amount, require_text, ServiceResult};

pub struct PropriedadeService;

impl PropriedadeService {
    pub fn add(store: &mut FarmStore, propriedade: Propriedade) -> ServiceResult<Propriedade> {
        ensure_usuario_exists(store, propriedade.usuario_id)?;
        Self::validate(&propriedade)?;
        let stored = store.propriedades.insert(propriedade);
        store.touch();
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&Propriedade> {
        store.propriedades.get(id)
    }

    pub fn list_by_usuario(store: &FarmStore, usuario_id: RecordId) -> Vec<&Propriedade> {
        store.propriedades.filter(|p| p.usuario_id == usuario_id)
    }

    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: PropriedadePatch,
    ) -> ServiceResult<Option<Propriedade>> {
        let Some(mut candidate) = store.propriedades.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(&candidate)?;
        store.propriedades.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    /// Hard delete. Seasons planted on the property are left in place; report
    /// assembly skips them once their property is gone.
    pub fn remove(store: &mut FarmStore, id: RecordId) -> Option<Propriedade> {
        let removed = store.propriedades.remove(id)?;
        store.touch();
        info!(id, nome = removed.name(), "property removed");
        Some(removed)
    }

    fn validate(propriedade: &Propriedade) -> ServiceResult<()> {
        require_text("nome", &propriedade.nome)?;
        require_text("localizacao", &propriedade.localizacao)?;
        require_optional_amount(
            "valor_financiado",
            propriedade.financiamento.valor_financiado,
        )
    }
}
