use tracing::debug;

use crate::core::store::FarmStore;
use crate::domain::{Maquinario, MaquinarioPatch, NamedEntity, Patch, RecordId};

use super::{
    ensure_usuario_exists, require_amount, require_optional_amount, require_text, ServiceError,
    ServiceResult,
};

pub struct MaquinarioService;

impl MaquinarioService {
    pub fn add(store: &mut FarmStore, maquinario: Maquinario) -> ServiceResult<Maquinario> {
        ensure_usuario_exists(store, maquinario.usuario_id)?;
        Self::validate(&maquinario)?;
        let stored = store.maquinarios.insert(maquinario);
        store.touch();
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&Maquinario> {
        store.maquinarios.get(id)
    }

    pub fn list_by_usuario(store: &FarmStore, usuario_id: RecordId) -> Vec<&Maquinario> {
        store.maquinarios.filter(|m| m.usuario_id == usuario_id)
    }

    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: MaquinarioPatch,
    ) -> ServiceResult<Option<Maquinario>> {
        let Some(mut candidate) = store.maquinarios.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(&candidate)?;
        store.maquinarios.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    pub fn remove(store: &mut FarmStore, id: RecordId) -> Option<Maquinario> {
        let removed = store.maquinarios.remove(id)?;
        store.touch();
        debug!(id, nome = removed.name(), "machine removed");
        Some(removed)
    }

    fn validate(maquinario: &Maquinario) -> ServiceResult<()> {
        require_text("nome", &maquinario.nome)?;
        require_amount("valor_inicial", maquinario.valor_inicial)?;
        require_amount("vida_util_horas", maquinario.vida_util_horas)?;
        // Zero or negative life is allowed and depreciates to 0.
        if !maquinario.vida_util_anos.is_finite() {
            return Err(ServiceError::Invalid(
                "vida_util_anos must be a finite number".into(),
            ));
        }
        require_optional_amount(
            "valor_financiado",
            maquinario.financiamento.valor_financiado,
        )?;
        let residual = maquinario.valor_residual_percentual;
        if !(0.0..=100.0).contains(&residual) {
            return Err(ServiceError::Invalid(
                "valor_residual_percentual must be between 0 and 100".into(),
            ));
        }
        Ok(())
    }
}
