//! Report assembly: one composite record per selected season, handed to a
//! document generator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::clock::Clock;
use crate::core::finance::{CustoPorCategoria, ResultadosSafra};
use crate::core::store::FarmStore;
use crate::domain::{
    Colheita, CustoVariavel, Displayable, OperacaoCampo, Propriedade, RecordId, Safra,
};
use crate::errors::Result;
use crate::storage::json_backend::write_json_atomic;

use super::{ProdutoService, ResultadoService, ServiceError, ServiceResult};

/// Everything a report needs about one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatorioSafra {
    #[serde(flatten)]
    pub safra: Safra,
    pub propriedade: Propriedade,
    pub operacoes: Vec<OperacaoCampo>,
    pub custos_variaveis: Vec<CustoVariavel>,
    pub colheitas: Vec<Colheita>,
    pub custos_por_categoria: Vec<CustoPorCategoria>,
    pub resultados: ResultadosSafra,
}

/// Renders an assembled batch into a document.
pub trait DocumentGenerator {
    fn gerar(&self, relatorios: &[RelatorioSafra]) -> Result<()>;
}

/// Writes the batch as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentGenerator for JsonReportWriter {
    fn gerar(&self, relatorios: &[RelatorioSafra]) -> Result<()> {
        write_json_atomic(&self.path, &relatorios)
    }
}

pub struct RelatorioService;

impl RelatorioService {
    /// Builds report records for the selected seasons in selection order.
    ///
    /// Seasons that are unknown, owned by another user, or whose property is
    /// gone are skipped; the rest of the batch is still produced.
    pub fn montar(
        store: &FarmStore,
        usuario_id: RecordId,
        safra_ids: &[RecordId],
        clock: &dyn Clock,
    ) -> Vec<RelatorioSafra> {
        safra_ids
            .iter()
            .filter_map(|&safra_id| Self::montar_safra(store, usuario_id, safra_id, clock))
            .collect()
    }

    fn montar_safra(
        store: &FarmStore,
        usuario_id: RecordId,
        safra_id: RecordId,
        clock: &dyn Clock,
    ) -> Option<RelatorioSafra> {
        let Some(safra) = store
            .safras
            .get(safra_id)
            .filter(|safra| safra.usuario_id == usuario_id)
        else {
            warn!(safra_id, usuario_id, "season not available for report, skipping");
            return None;
        };
        let Some(propriedade) = store.propriedades.get(safra.propriedade_id) else {
            warn!(
                safra = %safra.display_label(),
                propriedade_id = safra.propriedade_id,
                "season property missing, skipping"
            );
            return None;
        };

        let operacoes = store
            .operacoes
            .filter(|op| op.safra_id == safra_id)
            .into_iter()
            .map(|op| Self::anotar_produto(store, op))
            .collect();

        Some(RelatorioSafra {
            safra: safra.clone(),
            propriedade: propriedade.clone(),
            operacoes,
            custos_variaveis: store
                .custos_variaveis
                .filter(|c| c.safra_id == safra_id)
                .into_iter()
                .cloned()
                .collect(),
            colheitas: store
                .colheitas
                .filter(|c| c.safra_id == safra_id)
                .into_iter()
                .cloned()
                .collect(),
            custos_por_categoria: ResultadoService::custos_por_categoria(store, safra_id),
            resultados: ResultadoService::resultados_de(store, safra, clock),
        })
    }

    /// Fills `nome_produto` from the catalog when only the product id is set.
    fn anotar_produto(store: &FarmStore, operacao: &OperacaoCampo) -> OperacaoCampo {
        let mut anotada = operacao.clone();
        if anotada.nome_produto.is_none() {
            if let Some(nome) = anotada.produto_id.and_then(|id| ProdutoService::nome(store, id)) {
                anotada.nome_produto = Some(nome.to_string());
            }
        }
        anotada
    }

    /// Assembles the selection and passes it to the generator. Returns the
    /// number of seasons exported.
    pub fn exportar(
        store: &FarmStore,
        usuario_id: RecordId,
        safra_ids: &[RecordId],
        clock: &dyn Clock,
        generator: &dyn DocumentGenerator,
    ) -> ServiceResult<usize> {
        if safra_ids.is_empty() {
            return Err(ServiceError::Invalid(
                "Select at least one season to export".into(),
            ));
        }
        let relatorios = Self::montar(store, usuario_id, safra_ids, clock);
        if relatorios.is_empty() {
            return Err(ServiceError::Invalid(
                "None of the selected seasons can be exported".into(),
            ));
        }
        generator.gerar(&relatorios)?;
        info!(
            usuario_id,
            solicitadas = safra_ids.len(),
            exportadas = relatorios.len(),
            "season report exported"
        );
        Ok(relatorios.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::domain::{Produto, TipoOperacao, UnidadeProduto};
    use chrono::NaiveDate;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Capture {
        seasons: RefCell<Vec<RecordId>>,
    }

    impl DocumentGenerator for Capture {
        fn gerar(&self, relatorios: &[RelatorioSafra]) -> Result<()> {
            self.seasons
                .borrow_mut()
                .extend(relatorios.iter().map(|r| r.safra.id));
            Ok(())
        }
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn seeded() -> (FarmStore, RecordId, RecordId) {
        let mut store = FarmStore::new();
        let prop = store.propriedades.insert(Propriedade::new(1, "Sítio", "MG"));
        let safra = store
            .safras
            .insert(Safra::new(1, prop.id, "Soja 24", "Soja", "BMX", 10.0, date(1, 1)));
        (store, prop.id, safra.id)
    }

    #[test]
    fn operations_carry_catalog_names() {
        let (mut store, _, safra_id) = seeded();
        let produto = store
            .produtos
            .insert(Produto::new("Glifosato", UnidadeProduto::L, 30.0));
        store.operacoes.insert(
            OperacaoCampo::new(safra_id, date(2, 1), TipoOperacao::Defensivo, 100.0)
                .with_produto(produto.id),
        );

        let clock = FixedClock::new(date(6, 1));
        let relatorios = RelatorioService::montar(&store, 1, &[safra_id], &clock);
        assert_eq!(relatorios.len(), 1);
        assert_eq!(
            relatorios[0].operacoes[0].nome_produto.as_deref(),
            Some("Glifosato")
        );
        assert_eq!(store.operacoes.iter().next().unwrap().nome_produto, None);
    }

    #[test]
    fn foreign_unknown_and_orphaned_seasons_are_dropped() {
        let (mut store, prop_id, safra_id) = seeded();
        let alheia = store
            .safras
            .insert(Safra::new(2, prop_id, "Outra", "Milho", "X", 1.0, date(1, 1)));
        let orfa = store
            .safras
            .insert(Safra::new(1, 77, "Órfã", "Milho", "X", 1.0, date(1, 1)));

        let clock = FixedClock::new(date(6, 1));
        let relatorios =
            RelatorioService::montar(&store, 1, &[orfa.id, safra_id, alheia.id, 999], &clock);
        let ids: Vec<_> = relatorios.iter().map(|r| r.safra.id).collect();
        assert_eq!(ids, vec![safra_id]);
    }

    #[test]
    fn export_requires_a_selection() {
        let (store, _, safra_id) = seeded();
        let clock = FixedClock::new(date(6, 1));
        let capture = Capture::default();

        let err = RelatorioService::exportar(&store, 1, &[], &clock, &capture)
            .expect_err("empty selection");
        assert!(matches!(err, ServiceError::Invalid(_)));

        let err = RelatorioService::exportar(&store, 2, &[safra_id, 404], &clock, &capture)
            .expect_err("nothing the user can export");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert!(capture.seasons.borrow().is_empty());

        let exported = RelatorioService::exportar(&store, 1, &[safra_id], &clock, &capture)
            .expect("export");
        assert_eq!(exported, 1);
        assert_eq!(*capture.seasons.borrow(), vec![safra_id]);
    }

    #[test]
    fn report_flattens_season_fields() {
        let (store, _, safra_id) = seeded();
        let clock = FixedClock::new(date(6, 1));
        let relatorios = RelatorioService::montar(&store, 1, &[safra_id], &clock);
        let value = serde_json::to_value(&relatorios[0]).expect("serialize report");
        assert_eq!(value["cultura"], "Soja");
        assert_eq!(value["propriedade"]["nome"], "Sítio");
        assert!(value["resultados"]["roi"].is_number());
    }
}
