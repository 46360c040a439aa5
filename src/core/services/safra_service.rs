//! Crop season lifecycle: creation, edits and soft deletion.

use tracing::info;

use crate::core::store::FarmStore;
use crate::domain::{Displayable, Patch, RecordId, Safra, SafraPatch};

use super::{require_text, ServiceError, ServiceResult};

/// Provides validated CRUD helpers for crop seasons.
pub struct SafraService;

impl SafraService {
    /// Adds a new season. It starts active regardless of the incoming flag.
    pub fn add(store: &mut FarmStore, mut safra: Safra) -> ServiceResult<Safra> {
        Self::validate(store, &safra)?;
        safra.ativa = true;
        let stored = store.safras.insert(safra);
        store.touch();
        info!(id = stored.id, nome = %stored.nome, "season created");
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&Safra> {
        store.safras.get(id)
    }

    /// All seasons of the user, active and inactive.
    pub fn list_by_usuario(store: &FarmStore, usuario_id: RecordId) -> Vec<&Safra> {
        store.safras.filter(|s| s.usuario_id == usuario_id)
    }

    pub fn list_ativas(store: &FarmStore, usuario_id: RecordId) -> Vec<&Safra> {
        store
            .safras
            .filter(|s| s.usuario_id == usuario_id && s.ativa)
    }

    pub fn list_by_propriedade(store: &FarmStore, propriedade_id: RecordId) -> Vec<&Safra> {
        store.safras.filter(|s| s.propriedade_id == propriedade_id)
    }

    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: SafraPatch,
    ) -> ServiceResult<Option<Safra>> {
        let Some(mut candidate) = store.safras.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(store, &candidate)?;
        store.safras.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    /// Soft delete: the season stays in the store for historical reports.
    pub fn inativar(store: &mut FarmStore, id: RecordId) -> Option<Safra> {
        Self::set_ativa(store, id, false)
    }

    pub fn reativar(store: &mut FarmStore, id: RecordId) -> Option<Safra> {
        Self::set_ativa(store, id, true)
    }

    fn set_ativa(store: &mut FarmStore, id: RecordId, ativa: bool) -> Option<Safra> {
        let safra = store.safras.get_mut(id)?;
        safra.ativa = ativa;
        let updated = safra.clone();
        store.touch();
        info!(id, safra = %updated.display_label(), ativa, "season status changed");
        Some(updated)
    }

    fn validate(store: &FarmStore, safra: &Safra) -> ServiceResult<()> {
        require_text("nome", &safra.nome)?;
        require_text("cultura", &safra.cultura)?;
        require_text("variedade", &safra.variedade)?;
        if !(safra.area_ha.is_finite() && safra.area_ha > 0.0) {
            return Err(ServiceError::Invalid(
                "area_ha must be greater than zero".into(),
            ));
        }
        if let Some(fim) = safra.data_fim {
            if fim < safra.data_inicio {
                return Err(ServiceError::Invalid(
                    "data_fim cannot precede data_inicio".into(),
                ));
            }
        }
        match store.propriedades.get(safra.propriedade_id) {
            Some(propriedade) if propriedade.usuario_id == safra.usuario_id => Ok(()),
            Some(_) => Err(ServiceError::Invalid(
                "Property belongs to another user".into(),
            )),
            None => Err(ServiceError::Invalid(
                "A registered property must be selected".into(),
            )),
        }
    }
}
