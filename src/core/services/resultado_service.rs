//! Season results built from the store: revenue, costs and returns.

use crate::core::clock::Clock;
use crate::core::finance::{self, CustoPorCategoria, ResultadosSafra};
use crate::core::store::FarmStore;
use crate::domain::{RecordId, Safra};

pub struct ResultadoService;

impl ResultadoService {
    /// Annual fixed cost of a user across manual entries, machinery,
    /// improvements and financed properties.
    pub fn custos_fixos_anuais(store: &FarmStore, usuario_id: RecordId) -> f64 {
        let manuais = store.custos_fixos.filter(|c| c.usuario_id == usuario_id);
        let maquinarios = store.maquinarios.filter(|m| m.usuario_id == usuario_id);
        let benfeitorias = store.benfeitorias.filter(|b| b.usuario_id == usuario_id);
        let propriedades = store.propriedades.filter(|p| p.usuario_id == usuario_id);
        finance::total_custos_fixos(&manuais, &maquinarios, &benfeitorias, &propriedades)
    }

    /// Fixed cost attributed to a season, pro-rated over its duration. Open
    /// seasons run until the clock's current day.
    pub fn custos_fixos_safra(store: &FarmStore, safra: &Safra, clock: &dyn Clock) -> f64 {
        let anual = Self::custos_fixos_anuais(store, safra.usuario_id);
        let fim = safra.data_referencia_fim(clock.today());
        let dias = finance::duracao_dias(safra.data_inicio, fim);
        finance::custos_fixos_periodo(anual, dias)
    }

    pub fn resultados(
        store: &FarmStore,
        safra_id: RecordId,
        clock: &dyn Clock,
    ) -> Option<ResultadosSafra> {
        let safra = store.safras.get(safra_id)?;
        Some(Self::resultados_de(store, safra, clock))
    }

    pub(crate) fn resultados_de(
        store: &FarmStore,
        safra: &Safra,
        clock: &dyn Clock,
    ) -> ResultadosSafra {
        let colheitas = store.colheitas.filter(|c| c.safra_id == safra.id);
        let operacoes = store.operacoes.filter(|op| op.safra_id == safra.id);
        let custos = store.custos_variaveis.filter(|c| c.safra_id == safra.id);
        let fixos = Self::custos_fixos_safra(store, safra, clock);
        ResultadosSafra::calcular(&colheitas, &operacoes, &custos, fixos, safra.area_ha)
    }

    pub fn custos_por_categoria(store: &FarmStore, safra_id: RecordId) -> Vec<CustoPorCategoria> {
        finance::agregar_custos_por_categoria(
            store.operacoes.filter(|op| op.safra_id == safra_id),
            store.custos_variaveis.filter(|c| c.safra_id == safra_id),
        )
    }
}
