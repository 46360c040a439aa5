use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A harvest event. Revenue is `quantidade × preco_unitario`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Colheita {
    pub id: RecordId,
    pub safra_id: RecordId,
    pub data: NaiveDate,
    pub quantidade: f64,
    pub unidade: UnidadeColheita,
    pub preco_unitario: f64,
    pub responsavel: String,
}

impl Colheita {
    pub fn new(
        safra_id: RecordId,
        data: NaiveDate,
        quantidade: f64,
        unidade: UnidadeColheita,
        preco_unitario: f64,
        responsavel: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            safra_id,
            data,
            quantidade,
            unidade,
            preco_unitario,
            responsavel: responsavel.into(),
        }
    }

    pub fn receita(&self) -> f64 {
        self.quantidade * self.preco_unitario
    }
}

impl Identifiable for Colheita {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Displayable for Colheita {
    fn display_label(&self) -> String {
        format!("{} {} {}", self.data, self.quantidade, self.unidade)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnidadeColheita {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "t")]
    Tonelada,
    #[serde(rename = "saca")]
    Saca,
}

impl fmt::Display for UnidadeColheita {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnidadeColheita::Kg => "kg",
            UnidadeColheita::Tonelada => "t",
            UnidadeColheita::Saca => "saca",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColheitaPatch {
    pub data: Option<NaiveDate>,
    pub quantidade: Option<f64>,
    pub unidade: Option<UnidadeColheita>,
    pub preco_unitario: Option<f64>,
    pub responsavel: Option<String>,
}

impl Patch<Colheita> for ColheitaPatch {
    fn apply_to(self, target: &mut Colheita) {
        apply(&mut target.data, self.data);
        apply(&mut target.quantidade, self.quantidade);
        apply(&mut target.unidade, self.unidade);
        apply(&mut target.preco_unitario, self.preco_unitario);
        apply(&mut target.responsavel, self.responsavel);
    }
}
