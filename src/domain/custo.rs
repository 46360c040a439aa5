//! Variable (per season) and fixed (annual, per user) costs.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A cost incurred for a specific season.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustoVariavel {
    pub id: RecordId,
    pub safra_id: RecordId,
    pub data: NaiveDate,
    pub tipo: TipoCustoVariavel,
    pub descricao: String,
    pub valor: f64,
}

impl CustoVariavel {
    pub fn new(
        safra_id: RecordId,
        data: NaiveDate,
        tipo: TipoCustoVariavel,
        descricao: impl Into<String>,
        valor: f64,
    ) -> Self {
        Self {
            id: 0,
            safra_id,
            data,
            tipo,
            descricao: descricao.into(),
            valor,
        }
    }
}

impl Identifiable for CustoVariavel {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Displayable for CustoVariavel {
    fn display_label(&self) -> String {
        format!("{} {} ({})", self.data, self.descricao, self.tipo)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TipoCustoVariavel {
    #[serde(rename = "Mão de Obra")]
    MaoDeObra,
    Transporte,
    Armazenamento,
    Diesel,
    #[serde(rename = "Manutenção")]
    Manutencao,
    Outro,
}

impl TipoCustoVariavel {
    pub fn label(&self) -> &'static str {
        match self {
            TipoCustoVariavel::MaoDeObra => "Mão de Obra",
            TipoCustoVariavel::Transporte => "Transporte",
            TipoCustoVariavel::Armazenamento => "Armazenamento",
            TipoCustoVariavel::Diesel => "Diesel",
            TipoCustoVariavel::Manutencao => "Manutenção",
            TipoCustoVariavel::Outro => "Outro",
        }
    }
}

impl fmt::Display for TipoCustoVariavel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A manually entered annual fixed cost (insurance, interest, taxes...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustoFixo {
    pub id: RecordId,
    pub usuario_id: RecordId,
    pub data: NaiveDate,
    pub descricao: String,
    pub categoria: TipoCustoFixo,
    pub valor: f64,
}

impl CustoFixo {
    pub fn new(
        usuario_id: RecordId,
        data: NaiveDate,
        descricao: impl Into<String>,
        categoria: TipoCustoFixo,
        valor: f64,
    ) -> Self {
        Self {
            id: 0,
            usuario_id,
            data,
            descricao: descricao.into(),
            categoria,
            valor,
        }
    }
}

impl Identifiable for CustoFixo {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Displayable for CustoFixo {
    fn display_label(&self) -> String {
        format!("{} ({})", self.descricao, self.categoria)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TipoCustoFixo {
    Seguro,
    Juros,
    Impostos,
    Outro,
}

impl fmt::Display for TipoCustoFixo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TipoCustoFixo::Seguro => "Seguro",
            TipoCustoFixo::Juros => "Juros",
            TipoCustoFixo::Impostos => "Impostos",
            TipoCustoFixo::Outro => "Outro",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustoVariavelPatch {
    pub data: Option<NaiveDate>,
    pub tipo: Option<TipoCustoVariavel>,
    pub descricao: Option<String>,
    pub valor: Option<f64>,
}

impl Patch<CustoVariavel> for CustoVariavelPatch {
    fn apply_to(self, target: &mut CustoVariavel) {
        apply(&mut target.data, self.data);
        apply(&mut target.tipo, self.tipo);
        apply(&mut target.descricao, self.descricao);
        apply(&mut target.valor, self.valor);
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustoFixoPatch {
    pub data: Option<NaiveDate>,
    pub descricao: Option<String>,
    pub categoria: Option<TipoCustoFixo>,
    pub valor: Option<f64>,
}

impl Patch<CustoFixo> for CustoFixoPatch {
    fn apply_to(self, target: &mut CustoFixo) {
        apply(&mut target.data, self.data);
        apply(&mut target.descricao, self.descricao);
        apply(&mut target.categoria, self.categoria);
        apply(&mut target.valor, self.valor);
    }
}
