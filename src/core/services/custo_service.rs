use crate::core::store::FarmStore;
use crate::domain::{
    CustoFixo, CustoFixoPatch, CustoVariavel, CustoVariavelPatch, Patch, RecordId,
};

use super::{
    ensure_safra_exists, ensure_usuario_exists, require_amount, require_text, ServiceResult,
};

/// CRUD helpers for season-specific costs.
pub struct CustoVariavelService;

impl CustoVariavelService {
    pub fn add(store: &mut FarmStore, custo: CustoVariavel) -> ServiceResult<CustoVariavel> {
        ensure_safra_exists(store, custo.safra_id)?;
        Self::validate(&custo)?;
        let stored = store.custos_variaveis.insert(custo);
        store.touch();
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&CustoVariavel> {
        store.custos_variaveis.get(id)
    }

    pub fn list_by_safra(store: &FarmStore, safra_id: RecordId) -> Vec<&CustoVariavel> {
        store.custos_variaveis.filter(|c| c.safra_id == safra_id)
    }

    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: CustoVariavelPatch,
    ) -> ServiceResult<Option<CustoVariavel>> {
        let Some(mut candidate) = store.custos_variaveis.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(&candidate)?;
        store.custos_variaveis.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    pub fn remove(store: &mut FarmStore, id: RecordId) -> Option<CustoVariavel> {
        let removed = store.custos_variaveis.remove(id)?;
        store.touch();
        Some(removed)
    }

    fn validate(custo: &CustoVariavel) -> ServiceResult<()> {
        require_text("descricao", &custo.descricao)?;
        require_amount("valor", custo.valor)
    }
}

/// CRUD helpers for manually entered annual fixed costs.
pub struct CustoFixoService;

impl CustoFixoService {
    pub fn add(store: &mut FarmStore, custo: CustoFixo) -> ServiceResult<CustoFixo> {
        ensure_usuario_exists(store, custo.usuario_id)?;
        Self::validate(&custo)?;
        let stored = store.custos_fixos.insert(custo);
        store.touch();
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&CustoFixo> {
        store.custos_fixos.get(id)
    }

    pub fn list_by_usuario(store: &FarmStore, usuario_id: RecordId) -> Vec<&CustoFixo> {
        store.custos_fixos.filter(|c| c.usuario_id == usuario_id)
    }

    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: CustoFixoPatch,
    ) -> ServiceResult<Option<CustoFixo>> {
        let Some(mut candidate) = store.custos_fixos.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(&candidate)?;
        store.custos_fixos.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    pub fn remove(store: &mut FarmStore, id: RecordId) -> Option<CustoFixo> {
        let removed = store.custos_fixos.remove(id)?;
        store.touch();
        Some(removed)
    }

    fn validate(custo: &CustoFixo) -> ServiceResult<()> {
        require_text("descricao", &custo.descricao)?;
        require_amount("valor", custo.valor)
    }
}
