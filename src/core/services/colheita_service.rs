use tracing::debug;

use crate::core::store::FarmStore;
use crate::domain::{Colheita, ColheitaPatch, Displayable, Patch, RecordId};

use super::{ensure_safra_exists, require_amount, require_text, ServiceResult};

pub struct ColheitaService;

impl ColheitaService {
    pub fn add(store: &mut FarmStore, colheita: Colheita) -> ServiceResult<Colheita> {
        ensure_safra_exists(store, colheita.safra_id)?;
        Self::validate(&colheita)?;
        let stored = store.colheitas.insert(colheita);
        store.touch();
        Ok(stored)
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&Colheita> {
        store.colheitas.get(id)
    }

    pub fn list_by_safra(store: &FarmStore, safra_id: RecordId) -> Vec<&Colheita> {
        store.colheitas.filter(|c| c.safra_id == safra_id)
    }

    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: ColheitaPatch,
    ) -> ServiceResult<Option<Colheita>> {
        let Some(mut candidate) = store.colheitas.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(&candidate)?;
        store.colheitas.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    pub fn remove(store: &mut FarmStore, id: RecordId) -> Option<Colheita> {
        let removed = store.colheitas.remove(id)?;
        store.touch();
        debug!(id, colheita = %removed.display_label(), "harvest removed");
        Some(removed)
    }

    fn validate(colheita: &Colheita) -> ServiceResult<()> {
        require_amount("quantidade", colheita.quantidade)?;
        require_amount("preco_unitario", colheita.preco_unitario)?;
        require_text("responsavel", &colheita.responsavel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Safra, UnidadeColheita};
    use chrono::NaiveDate;

    #[test]
    fn harvests_follow_their_season() {
        let mut store = FarmStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let safra = store
            .safras
            .insert(Safra::new(1, 1, "Soja", "Soja", "BMX", 10.0, date));

        let colheita = ColheitaService::add(
            &mut store,
            Colheita::new(safra.id, date, 600.0, UnidadeColheita::Saca, 130.0, "Pedro"),
        )
        .expect("add harvest");
        assert_eq!(colheita.receita(), 78_000.0);

        let orphan = Colheita::new(99, date, 1.0, UnidadeColheita::Kg, 1.0, "Pedro");
        assert!(ColheitaService::add(&mut store, orphan).is_err());

        let patch = ColheitaPatch {
            preco_unitario: Some(-1.0),
            ..Default::default()
        };
        assert!(ColheitaService::update(&mut store, colheita.id, patch).is_err());
        assert_eq!(ColheitaService::list_by_safra(&store, safra.id).len(), 1);
    }
}
