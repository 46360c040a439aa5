use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Reference catalog entry for inputs applied in field operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Produto {
    pub id: RecordId,
    pub nome: String,
    pub unidade: UnidadeProduto,
    pub preco_unitario: f64,
}

impl Produto {
    pub fn new(nome: impl Into<String>, unidade: UnidadeProduto, preco_unitario: f64) -> Self {
        Self {
            id: 0,
            nome: nome.into(),
            unidade,
            preco_unitario,
        }
    }
}

impl Identifiable for Produto {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl NamedEntity for Produto {
    fn name(&self) -> &str {
        &self.nome
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnidadeProduto {
    #[serde(rename = "kg")]
    Kg,
    L,
    #[serde(rename = "saca")]
    Saca,
}

impl fmt::Display for UnidadeProduto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnidadeProduto::Kg => "kg",
            UnidadeProduto::L => "L",
            UnidadeProduto::Saca => "saca",
        };
        f.write_str(label)
    }
}
