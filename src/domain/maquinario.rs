use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A machine owned by the user. Contributes straight-line depreciation and,
/// when financed, installment costs to the annual fixed costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Maquinario {
    pub id: RecordId,
    pub usuario_id: RecordId,
    pub nome: String,
    pub tipo: String,
    pub valor_inicial: f64,
    pub vida_util_anos: f64,
    pub vida_util_horas: f64,
    pub valor_residual_percentual: f64,
    pub segurado: bool,
    #[serde(flatten)]
    pub financiamento: Financiamento,
}

impl Maquinario {
    pub fn new(
        usuario_id: RecordId,
        nome: impl Into<String>,
        tipo: impl Into<String>,
        valor_inicial: f64,
        vida_util_anos: f64,
    ) -> Self {
        Self {
            id: 0,
            usuario_id,
            nome: nome.into(),
            tipo: tipo.into(),
            valor_inicial,
            vida_util_anos,
            vida_util_horas: 0.0,
            valor_residual_percentual: 0.0,
            segurado: false,
            financiamento: Financiamento::default(),
        }
    }

    pub fn with_residual_percentual(mut self, percentual: f64) -> Self {
        self.valor_residual_percentual = percentual;
        self
    }

    pub fn with_vida_util_horas(mut self, horas: f64) -> Self {
        self.vida_util_horas = horas;
        self
    }

    pub fn with_financiamento(mut self, financiamento: Financiamento) -> Self {
        self.financiamento = financiamento;
        self
    }

    pub fn segurado(mut self) -> Self {
        self.segurado = true;
        self
    }
}

impl Identifiable for Maquinario {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl NamedEntity for Maquinario {
    fn name(&self) -> &str {
        &self.nome
    }
}

impl Displayable for Maquinario {
    fn display_label(&self) -> String {
        format!("{} ({})", self.nome, self.tipo)
    }
}

impl Financiado for Maquinario {
    fn financiamento(&self) -> Financiamento {
        self.financiamento
    }
}

#[derive(Debug, Clone, Default)]
pub struct MaquinarioPatch {
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub valor_inicial: Option<f64>,
    pub vida_util_anos: Option<f64>,
    pub vida_util_horas: Option<f64>,
    pub valor_residual_percentual: Option<f64>,
    pub segurado: Option<bool>,
    pub financiamento: Option<Financiamento>,
}

impl Patch<Maquinario> for MaquinarioPatch {
    fn apply_to(self, target: &mut Maquinario) {
        apply(&mut target.nome, self.nome);
        apply(&mut target.tipo, self.tipo);
        apply(&mut target.valor_inicial, self.valor_inicial);
        apply(&mut target.vida_util_anos, self.vida_util_anos);
        apply(&mut target.vida_util_horas, self.vida_util_horas);
        apply(
            &mut target.valor_residual_percentual,
            self.valor_residual_percentual,
        );
        apply(&mut target.segurado, self.segurado);
        apply(&mut target.financiamento, self.financiamento);
    }
}
