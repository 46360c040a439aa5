//! Pure financial aggregation over farm records.
//!
//! Every function here is side-effect free and total: divisions by zero and
//! degenerate inputs resolve to `0.0` instead of surfacing `NaN` or infinity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Benfeitoria, Colheita, CustoFixo, CustoVariavel, Financiado, Financiamento, Maquinario,
    OperacaoCampo, Propriedade,
};

/// Installments counted toward one year of financing cost.
pub const PARCELAS_POR_ANO: u32 = 12;
pub const DIAS_POR_ANO: f64 = 365.0;

pub fn total_receita<'a, I>(colheitas: I) -> f64
where
    I: IntoIterator<Item = &'a Colheita>,
{
    colheitas.into_iter().map(Colheita::receita).sum()
}

pub fn total_custos_variaveis<'a, O, C>(operacoes: O, custos: C) -> f64
where
    O: IntoIterator<Item = &'a OperacaoCampo>,
    C: IntoIterator<Item = &'a CustoVariavel>,
{
    let operacional: f64 = operacoes.into_iter().map(|op| op.custo).sum();
    let avulso: f64 = custos.into_iter().map(|custo| custo.valor).sum();
    operacional + avulso
}

/// Straight-line annual depreciation down to the residual value.
pub fn depreciacao_anual(maquinario: &Maquinario) -> f64 {
    if maquinario.vida_util_anos <= 0.0 {
        return 0.0;
    }
    let residual = maquinario.valor_inicial * maquinario.valor_residual_percentual / 100.0;
    (maquinario.valor_inicial - residual) / maquinario.vida_util_anos
}

/// Installments due over the next year for each financed item, capped at
/// [`PARCELAS_POR_ANO`] and never negative.
pub fn custo_anual_financiamento<'a, F, I>(itens: I) -> f64
where
    F: Financiado + 'a,
    I: IntoIterator<Item = &'a F>,
{
    itens
        .into_iter()
        .map(|item| parcela_anual(item.financiamento()))
        .sum()
}

fn parcela_anual(financiamento: Financiamento) -> f64 {
    let num_parcelas = financiamento.num_parcelas.unwrap_or(0);
    let valor = financiamento.valor_financiado.unwrap_or(0.0);
    if num_parcelas == 0 || valor == 0.0 {
        return 0.0;
    }
    let pagas = financiamento.parcelas_pagas.unwrap_or(0);
    let restantes = num_parcelas.saturating_sub(pagas).min(PARCELAS_POR_ANO);
    valor / f64::from(num_parcelas) * f64::from(restantes)
}

pub fn custo_anual_benfeitorias<'a, I>(benfeitorias: I) -> f64
where
    I: IntoIterator<Item = &'a Benfeitoria>,
{
    custo_anual_financiamento(benfeitorias)
}

/// Annual fixed cost for a user: depreciation, every financing stream and the
/// manually entered fixed costs.
pub fn total_custos_fixos(
    manuais: &[&CustoFixo],
    maquinarios: &[&Maquinario],
    benfeitorias: &[&Benfeitoria],
    propriedades: &[&Propriedade],
) -> f64 {
    let depreciacao: f64 = maquinarios.iter().map(|m| depreciacao_anual(m)).sum();
    let financiamento_benfeitorias = custo_anual_benfeitorias(benfeitorias.iter().copied());
    let financiamento_maquinas = custo_anual_financiamento(maquinarios.iter().copied());
    let financiamento_propriedades = custo_anual_financiamento(propriedades.iter().copied());
    let manual: f64 = manuais.iter().map(|custo| custo.valor).sum();

    depreciacao
        + financiamento_benfeitorias
        + financiamento_maquinas
        + financiamento_propriedades
        + manual
}

/// Days between two dates, floored at one.
pub fn duracao_dias(inicio: NaiveDate, fim: NaiveDate) -> i64 {
    (fim - inicio).num_days().max(1)
}

pub fn custos_fixos_periodo(anual: f64, dias: i64) -> f64 {
    anual / DIAS_POR_ANO * dias as f64
}

pub fn lucro_bruto(receita: f64, custos: f64) -> f64 {
    receita - custos
}

/// Return on investment as a percentage.
pub fn roi(lucro: f64, custos: f64) -> f64 {
    if custos == 0.0 {
        0.0
    } else {
        lucro / custos * 100.0
    }
}

pub fn rentabilidade_por_ha(receita: f64, area_ha: f64) -> f64 {
    if area_ha == 0.0 {
        0.0
    } else {
        receita / area_ha
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustoPorCategoria {
    pub categoria: String,
    pub valor: f64,
}

/// Sums operation costs by operation type and variable costs by cost type.
/// Categories appear in the order they are first seen, operations first.
pub fn agregar_custos_por_categoria<'a, O, C>(operacoes: O, custos: C) -> Vec<CustoPorCategoria>
where
    O: IntoIterator<Item = &'a OperacaoCampo>,
    C: IntoIterator<Item = &'a CustoVariavel>,
{
    let mut categorias: Vec<CustoPorCategoria> = Vec::new();
    let lancamentos = operacoes
        .into_iter()
        .map(|op| (op.tipo.label(), op.custo))
        .chain(custos.into_iter().map(|c| (c.tipo.label(), c.valor)));

    for (label, valor) in lancamentos {
        match categorias.iter_mut().find(|entry| entry.categoria == label) {
            Some(entry) => entry.valor += valor,
            None => categorias.push(CustoPorCategoria {
                categoria: label.to_string(),
                valor,
            }),
        }
    }
    categorias
}

/// Season results computed in one pass over the season's records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultadosSafra {
    pub total_receita: f64,
    pub total_custos: f64,
    pub total_custos_variaveis: f64,
    pub total_custos_fixos: f64,
    pub lucro_bruto: f64,
    pub roi: f64,
    pub rentabilidade_por_ha: f64,
}

impl ResultadosSafra {
    /// `custos_fixos` is the fixed cost already pro-rated to the season.
    pub fn calcular(
        colheitas: &[&Colheita],
        operacoes: &[&OperacaoCampo],
        custos_variaveis: &[&CustoVariavel],
        custos_fixos: f64,
        area_ha: f64,
    ) -> Self {
        let total_receita = total_receita(colheitas.iter().copied());
        let total_custos_variaveis = total_custos_variaveis(
            operacoes.iter().copied(),
            custos_variaveis.iter().copied(),
        );
        let total_custos = total_custos_variaveis + custos_fixos;
        let lucro = lucro_bruto(total_receita, total_custos);

        Self {
            total_receita,
            total_custos,
            total_custos_variaveis,
            total_custos_fixos: custos_fixos,
            lucro_bruto: lucro,
            roi: roi(lucro, total_custos),
            rentabilidade_por_ha: rentabilidade_por_ha(total_receita, area_ha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TipoCustoFixo, TipoCustoVariavel, TipoOperacao, UnidadeColheita};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn revenue_sums_each_harvest() {
        let colheitas = vec![
            Colheita::new(1, date(2024, 3, 1), 100.0, UnidadeColheita::Saca, 50.0, "Ana"),
            Colheita::new(1, date(2024, 3, 2), 2.5, UnidadeColheita::Tonelada, 900.0, "Ana"),
        ];
        assert!(approx(total_receita(&colheitas), 5000.0 + 2250.0));
        assert_eq!(total_receita(&Vec::<Colheita>::new()), 0.0);
    }

    #[test]
    fn depreciation_is_zero_without_useful_life() {
        let maquina = Maquinario::new(1, "Trator", "Trator", 100_000.0, 0.0)
            .with_residual_percentual(10.0);
        assert_eq!(depreciacao_anual(&maquina), 0.0);

        let negativa = Maquinario::new(1, "Trator", "Trator", 100_000.0, -3.0);
        assert_eq!(depreciacao_anual(&negativa), 0.0);

        let valida = Maquinario::new(1, "Trator", "Trator", 100_000.0, 10.0)
            .with_residual_percentual(20.0);
        assert!(approx(depreciacao_anual(&valida), 8_000.0));
    }

    #[test]
    fn financing_counts_at_most_one_year_of_installments() {
        let quitado = Maquinario::new(1, "A", "Trator", 0.0, 1.0)
            .with_financiamento(Financiamento::new(12_000.0, 10).with_parcelas_pagas(10));
        let alem = Maquinario::new(1, "B", "Trator", 0.0, 1.0)
            .with_financiamento(Financiamento::new(12_000.0, 10).with_parcelas_pagas(14));
        assert_eq!(custo_anual_financiamento([&quitado, &alem]), 0.0);

        let novo = Maquinario::new(1, "C", "Trator", 0.0, 1.0)
            .with_financiamento(Financiamento::new(48_000.0, 48));
        assert!(approx(custo_anual_financiamento([&novo]), 12.0 * 1_000.0));

        let final_do_prazo = Maquinario::new(1, "D", "Trator", 0.0, 1.0)
            .with_financiamento(Financiamento::new(48_000.0, 48).with_parcelas_pagas(45));
        assert!(approx(custo_anual_financiamento([&final_do_prazo]), 3_000.0));
    }

    #[test]
    fn financing_ignores_incomplete_terms() {
        let sem_parcelas = Propriedade::new(1, "Sítio", "MG").with_financiamento(Financiamento {
            valor_financiado: Some(50_000.0),
            num_parcelas: None,
            parcelas_pagas: None,
        });
        let sem_valor = Propriedade::new(1, "Fazenda", "GO").with_financiamento(Financiamento {
            valor_financiado: None,
            num_parcelas: Some(24),
            parcelas_pagas: None,
        });
        assert_eq!(custo_anual_financiamento([&sem_parcelas, &sem_valor]), 0.0);
    }

    #[test]
    fn improvements_use_their_total_value() {
        let galpao = Benfeitoria::new(1, "Galpão", 24_000.0, date(2023, 1, 1), 24)
            .with_parcelas_pagas(6);
        assert!(approx(custo_anual_benfeitorias([&galpao]), 12_000.0));
    }

    #[test]
    fn fixed_costs_combine_every_stream() {
        let manual = CustoFixo::new(1, date(2024, 1, 1), "ITR", TipoCustoFixo::Impostos, 500.0);
        let maquina = Maquinario::new(1, "Trator", "Trator", 10_000.0, 10.0)
            .with_financiamento(Financiamento::new(1_200.0, 12));
        let galpao = Benfeitoria::new(1, "Galpão", 2_400.0, date(2023, 1, 1), 24);
        let sitio = Propriedade::new(1, "Sítio", "MG")
            .with_financiamento(Financiamento::new(3_600.0, 36));

        let total = total_custos_fixos(&[&manual], &[&maquina], &[&galpao], &[&sitio]);
        // 1000 depreciation + 1200 + 1200 + 1200 + 500
        assert!(approx(total, 5_100.0));
    }

    #[test]
    fn zero_denominators_resolve_to_zero() {
        assert_eq!(roi(3_800.0, 0.0), 0.0);
        assert_eq!(roi(-10.0, 0.0), 0.0);
        assert_eq!(rentabilidade_por_ha(5_000.0, 0.0), 0.0);
        assert!(approx(roi(3_800.0, 1_200.0), 316.666_666_666));
        assert_eq!(rentabilidade_por_ha(5_000.0, 10.0), 500.0);
    }

    #[test]
    fn full_year_proration_matches_annual_cost() {
        let dias = duracao_dias(date(2023, 1, 1), date(2024, 1, 1));
        assert_eq!(dias, 365);
        assert!(approx(custos_fixos_periodo(7_300.0, dias), 7_300.0));
    }

    #[test]
    fn duration_is_at_least_one_day() {
        assert_eq!(duracao_dias(date(2024, 5, 1), date(2024, 5, 1)), 1);
        assert_eq!(duracao_dias(date(2024, 5, 1), date(2024, 4, 1)), 1);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let operacoes = vec![
            OperacaoCampo::new(1, date(2024, 1, 2), TipoOperacao::Plantio, 300.0),
            OperacaoCampo::new(1, date(2024, 1, 3), TipoOperacao::Defensivo, 120.0)
                .with_nome_produto("Glifosato"),
            OperacaoCampo::new(1, date(2024, 1, 4), TipoOperacao::Plantio, 50.0),
        ];
        let custos = vec![
            CustoVariavel::new(1, date(2024, 1, 5), TipoCustoVariavel::Diesel, "Diesel", 80.0),
            CustoVariavel::new(1, date(2024, 1, 6), TipoCustoVariavel::Diesel, "Diesel", 20.0),
        ];

        let categorias = agregar_custos_por_categoria(&operacoes, &custos);
        let labels: Vec<_> = categorias.iter().map(|c| c.categoria.as_str()).collect();
        assert_eq!(labels, vec!["Plantio", "Defensivo", "Diesel"]);
        assert_eq!(categorias[0].valor, 350.0);
        assert_eq!(categorias[2].valor, 100.0);
    }

    #[test]
    fn season_results_in_one_call() {
        let colheita = Colheita::new(1, date(2024, 6, 1), 100.0, UnidadeColheita::Saca, 50.0, "Ana");
        let operacao = OperacaoCampo::new(1, date(2024, 2, 1), TipoOperacao::Plantio, 1_000.0);
        let resultados = ResultadosSafra::calcular(&[&colheita], &[&operacao], &[], 200.0, 10.0);

        assert_eq!(resultados.total_receita, 5_000.0);
        assert_eq!(resultados.total_custos_variaveis, 1_000.0);
        assert_eq!(resultados.total_custos, 1_200.0);
        assert_eq!(resultados.lucro_bruto, 3_800.0);
        assert!(approx(resultados.roi, 316.666_666_666));
        assert_eq!(resultados.rentabilidade_por_ha, 500.0);
    }
}
