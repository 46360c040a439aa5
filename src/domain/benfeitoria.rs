use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A capital improvement (barn, silo, fencing...) paid in installments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Benfeitoria {
    pub id: RecordId,
    pub usuario_id: RecordId,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub valor_total: f64,
    pub data_inicio_pagamento: NaiveDate,
    pub num_parcelas: u32,
    #[serde(default)]
    pub parcelas_pagas: u32,
}

impl Benfeitoria {
    pub fn new(
        usuario_id: RecordId,
        nome: impl Into<String>,
        valor_total: f64,
        data_inicio_pagamento: NaiveDate,
        num_parcelas: u32,
    ) -> Self {
        Self {
            id: 0,
            usuario_id,
            nome: nome.into(),
            descricao: None,
            valor_total,
            data_inicio_pagamento,
            num_parcelas,
            parcelas_pagas: 0,
        }
    }

    pub fn with_descricao(mut self, descricao: impl Into<String>) -> Self {
        self.descricao = Some(descricao.into());
        self
    }

    pub fn with_parcelas_pagas(mut self, pagas: u32) -> Self {
        self.parcelas_pagas = pagas;
        self
    }
}

impl Identifiable for Benfeitoria {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl NamedEntity for Benfeitoria {
    fn name(&self) -> &str {
        &self.nome
    }
}

impl Displayable for Benfeitoria {
    fn display_label(&self) -> String {
        format!(
            "{} ({}/{} parcelas)",
            self.nome, self.parcelas_pagas, self.num_parcelas
        )
    }
}

/// The whole improvement value is treated as financed.
impl Financiado for Benfeitoria {
    fn financiamento(&self) -> Financiamento {
        Financiamento {
            valor_financiado: Some(self.valor_total),
            num_parcelas: Some(self.num_parcelas),
            parcelas_pagas: Some(self.parcelas_pagas),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BenfeitoriaPatch {
    pub nome: Option<String>,
    pub descricao: Option<Option<String>>,
    pub valor_total: Option<f64>,
    pub data_inicio_pagamento: Option<NaiveDate>,
    pub num_parcelas: Option<u32>,
    pub parcelas_pagas: Option<u32>,
}

impl Patch<Benfeitoria> for BenfeitoriaPatch {
    fn apply_to(self, target: &mut Benfeitoria) {
        apply(&mut target.nome, self.nome);
        apply(&mut target.descricao, self.descricao);
        apply(&mut target.valor_total, self.valor_total);
        apply(&mut target.data_inicio_pagamento, self.data_inicio_pagamento);
        apply(&mut target.num_parcelas, self.num_parcelas);
        apply(&mut target.parcelas_pagas, self.parcelas_pagas);
    }
}
