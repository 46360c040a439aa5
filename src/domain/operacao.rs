//! Field operations performed during a season.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperacaoCampo {
    pub id: RecordId,
    pub safra_id: RecordId,
    pub data: NaiveDate,
    pub tipo: TipoOperacao,
    pub custo: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produto_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome_produto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_calda: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph_agua: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carencia_dias: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forma_aplicacao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metodo_irrigacao: Option<String>,
    /// Irrigation time in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_irrigacao: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condicoes_climaticas: Option<CondicoesClimaticas>,
}

impl OperacaoCampo {
    pub fn new(safra_id: RecordId, data: NaiveDate, tipo: TipoOperacao, custo: f64) -> Self {
        Self {
            id: 0,
            safra_id,
            data,
            tipo,
            custo,
            produto_id: None,
            nome_produto: None,
            dose: None,
            volume_calda: None,
            ph_agua: None,
            carencia_dias: None,
            forma_aplicacao: None,
            metodo_irrigacao: None,
            tempo_irrigacao: None,
            observacoes: None,
            condicoes_climaticas: None,
        }
    }

    pub fn with_produto(mut self, produto_id: RecordId) -> Self {
        self.produto_id = Some(produto_id);
        self
    }

    pub fn with_nome_produto(mut self, nome: impl Into<String>) -> Self {
        self.nome_produto = Some(nome.into());
        self
    }

    pub fn with_dose(mut self, dose: f64) -> Self {
        self.dose = Some(dose);
        self
    }

    pub fn with_irrigacao(mut self, metodo: impl Into<String>, horas: f64) -> Self {
        self.metodo_irrigacao = Some(metodo.into());
        self.tempo_irrigacao = Some(horas);
        self
    }

    pub fn with_condicoes(mut self, condicoes: CondicoesClimaticas) -> Self {
        self.condicoes_climaticas = Some(condicoes);
        self
    }

    /// True when the operation identifies the product it applied.
    pub fn informa_produto(&self) -> bool {
        self.produto_id.is_some()
            || self
                .nome_produto
                .as_deref()
                .map_or(false, |nome| !nome.trim().is_empty())
    }
}

impl Identifiable for OperacaoCampo {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Displayable for OperacaoCampo {
    fn display_label(&self) -> String {
        match self.nome_produto.as_deref() {
            Some(produto) => format!("{} {} ({})", self.data, self.tipo, produto),
            None => format!("{} {}", self.data, self.tipo),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TipoOperacao {
    Plantio,
    Defensivo,
    #[serde(rename = "Adubação e Correção")]
    AdubacaoCorrecao,
    #[serde(rename = "Irrigação")]
    Irrigacao,
    #[serde(rename = "Preparo do Solo")]
    PreparoSolo,
    #[serde(rename = "Tratamento Adicional")]
    TratamentoAdicional,
    #[serde(rename = "Tratos Culturais")]
    TratosCulturais,
    Outra,
}

impl TipoOperacao {
    pub const ALL: [TipoOperacao; 8] = [
        TipoOperacao::Plantio,
        TipoOperacao::Defensivo,
        TipoOperacao::AdubacaoCorrecao,
        TipoOperacao::Irrigacao,
        TipoOperacao::PreparoSolo,
        TipoOperacao::TratamentoAdicional,
        TipoOperacao::TratosCulturais,
        TipoOperacao::Outra,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TipoOperacao::Plantio => "Plantio",
            TipoOperacao::Defensivo => "Defensivo",
            TipoOperacao::AdubacaoCorrecao => "Adubação e Correção",
            TipoOperacao::Irrigacao => "Irrigação",
            TipoOperacao::PreparoSolo => "Preparo do Solo",
            TipoOperacao::TratamentoAdicional => "Tratamento Adicional",
            TipoOperacao::TratosCulturais => "Tratos Culturais",
            TipoOperacao::Outra => "Outra",
        }
    }
}

impl fmt::Display for TipoOperacao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weather at the time of a spraying operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CondicoesClimaticas {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperatura: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umidade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vento: Option<Vento>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clima: Option<Clima>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Vento {
    Leve,
    #[serde(rename = "Médio")]
    Medio,
    Forte,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Clima {
    Ensolarado,
    Nublado,
    Chuvoso,
    Outro,
}

#[derive(Debug, Clone, Default)]
pub struct OperacaoCampoPatch {
    pub data: Option<NaiveDate>,
    pub tipo: Option<TipoOperacao>,
    pub custo: Option<f64>,
    pub produto_id: Option<Option<RecordId>>,
    pub nome_produto: Option<Option<String>>,
    pub dose: Option<Option<f64>>,
    pub volume_calda: Option<Option<f64>>,
    pub ph_agua: Option<Option<f64>>,
    pub carencia_dias: Option<Option<u32>>,
    pub forma_aplicacao: Option<Option<String>>,
    pub metodo_irrigacao: Option<Option<String>>,
    pub tempo_irrigacao: Option<Option<f64>>,
    pub observacoes: Option<Option<String>>,
    pub condicoes_climaticas: Option<Option<CondicoesClimaticas>>,
}

impl Patch<OperacaoCampo> for OperacaoCampoPatch {
    fn apply_to(self, target: &mut OperacaoCampo) {
        apply(&mut target.data, self.data);
        apply(&mut target.tipo, self.tipo);
        apply(&mut target.custo, self.custo);
        apply(&mut target.produto_id, self.produto_id);
        apply(&mut target.nome_produto, self.nome_produto);
        apply(&mut target.dose, self.dose);
        apply(&mut target.volume_calda, self.volume_calda);
        apply(&mut target.ph_agua, self.ph_agua);
        apply(&mut target.carencia_dias, self.carencia_dias);
        apply(&mut target.forma_aplicacao, self.forma_aplicacao);
        apply(&mut target.metodo_irrigacao, self.metodo_irrigacao);
        apply(&mut target.tempo_irrigacao, self.tempo_irrigacao);
        apply(&mut target.observacoes, self.observacoes);
        apply(&mut target.condicoes_climaticas, self.condicoes_climaticas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_labels_match_serialized_names() {
        for tipo in TipoOperacao::ALL {
            let json = serde_json::to_string(&tipo).unwrap();
            assert_eq!(json, format!("\"{}\"", tipo.label()));
        }
    }

    #[test]
    fn blank_product_name_does_not_count() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let op = OperacaoCampo::new(1, date, TipoOperacao::Defensivo, 10.0).with_nome_produto(" ");
        assert!(!op.informa_produto());
        assert!(op.with_produto(4).informa_produto());
    }
}
