use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A farm property owned by a user. Seasons are planted on properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Propriedade {
    pub id: RecordId,
    pub usuario_id: RecordId,
    pub nome: String,
    pub localizacao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub financiamento: Financiamento,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_inicio_pagamento: Option<NaiveDate>,
}

impl Propriedade {
    pub fn new(
        usuario_id: RecordId,
        nome: impl Into<String>,
        localizacao: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            usuario_id,
            nome: nome.into(),
            localizacao: localizacao.into(),
            latitude: None,
            longitude: None,
            financiamento: Financiamento::default(),
            data_inicio_pagamento: None,
        }
    }

    pub fn with_coordenadas(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_financiamento(mut self, financiamento: Financiamento) -> Self {
        self.financiamento = financiamento;
        self
    }
}

impl Identifiable for Propriedade {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl NamedEntity for Propriedade {
    fn name(&self) -> &str {
        &self.nome
    }
}

impl Displayable for Propriedade {
    fn display_label(&self) -> String {
        format!("{} ({})", self.nome, self.localizacao)
    }
}

impl Financiado for Propriedade {
    fn financiamento(&self) -> Financiamento {
        self.financiamento
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropriedadePatch {
    pub nome: Option<String>,
    pub localizacao: Option<String>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
    pub financiamento: Option<Financiamento>,
    pub data_inicio_pagamento: Option<Option<NaiveDate>>,
}

impl Patch<Propriedade> for PropriedadePatch {
    fn apply_to(self, target: &mut Propriedade) {
        apply(&mut target.nome, self.nome);
        apply(&mut target.localizacao, self.localizacao);
        apply(&mut target.latitude, self.latitude);
        apply(&mut target.longitude, self.longitude);
        apply(&mut target.financiamento, self.financiamento);
        apply(&mut target.data_inicio_pagamento, self.data_inicio_pagamento);
    }
}
