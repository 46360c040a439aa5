use crate::core::store::FarmStore;
use crate::domain::{Produto, RecordId};

use super::{require_amount, require_text, ServiceResult};

/// Read access to the product catalog, plus registration for seeding it.
pub struct ProdutoService;

impl ProdutoService {
    pub fn register(store: &mut FarmStore, produto: Produto) -> ServiceResult<Produto> {
        require_text("nome", &produto.nome)?;
        require_amount("preco_unitario", produto.preco_unitario)?;
        let stored = store.produtos.insert(produto);
        store.touch();
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&Produto> {
        store.produtos.get(id)
    }

    pub fn list(store: &FarmStore) -> Vec<&Produto> {
        store.produtos.iter().collect()
    }

    pub fn nome(store: &FarmStore, id: RecordId) -> Option<&str> {
        store.produtos.get(id).map(|produto| produto.nome.as_str())
    }
}
