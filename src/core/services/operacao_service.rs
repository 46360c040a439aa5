//! Business logic helpers for managing field operations.

use tracing::debug;

use crate::core::store::FarmStore;
use crate::domain::{
    Displayable, OperacaoCampo, OperacaoCampoPatch, Patch, RecordId, TipoOperacao,
};

use super::{
    ensure_safra_exists, require_amount, require_optional_amount, ServiceError, ServiceResult,
};

/// Provides validated CRUD helpers for field operations.
pub struct OperacaoService;

impl OperacaoService {
    /// Adds a new operation and returns the stored record.
    pub fn add(store: &mut FarmStore, operacao: OperacaoCampo) -> ServiceResult<OperacaoCampo> {
        ensure_safra_exists(store, operacao.safra_id)?;
        Self::validate(store, &operacao)?;
        let stored = store.operacoes.insert(operacao);
        store.touch();
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&OperacaoCampo> {
        store.operacoes.get(id)
    }

    pub fn list_by_safra(store: &FarmStore, safra_id: RecordId) -> Vec<&OperacaoCampo> {
        store.operacoes.filter(|op| op.safra_id == safra_id)
    }

    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: OperacaoCampoPatch,
    ) -> ServiceResult<Option<OperacaoCampo>> {
        let Some(mut candidate) = store.operacoes.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(store, &candidate)?;
        store.operacoes.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    pub fn remove(store: &mut FarmStore, id: RecordId) -> Option<OperacaoCampo> {
        let removed = store.operacoes.remove(id)?;
        store.touch();
        debug!(id, operacao = %removed.display_label(), "operation removed");
        Some(removed)
    }

    fn validate(store: &FarmStore, operacao: &OperacaoCampo) -> ServiceResult<()> {
        require_amount("custo", operacao.custo)?;
        require_optional_amount("dose", operacao.dose)?;
        require_optional_amount("volume_calda", operacao.volume_calda)?;
        require_optional_amount("tempo_irrigacao", operacao.tempo_irrigacao)?;
        if operacao.tipo == TipoOperacao::Defensivo && !operacao.informa_produto() {
            return Err(ServiceError::MissingField("nome_produto"));
        }
        if let Some(produto_id) = operacao.produto_id {
            if !store.produtos.contains(produto_id) {
                return Err(ServiceError::Invalid(format!(
                    "Product {produto_id} is not in the catalog"
                )));
            }
        }
        Ok(())
    }
}
