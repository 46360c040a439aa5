//! Crop seasons and their soil analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A crop season planted on a property.
///
/// Seasons are never hard-deleted: inactivation keeps them available for
/// historical reports and can be reverted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Safra {
    pub id: RecordId,
    pub usuario_id: RecordId,
    pub propriedade_id: RecordId,
    pub nome: String,
    pub cultura: String,
    pub variedade: String,
    pub area_ha: f64,
    pub data_inicio: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<NaiveDate>,
    #[serde(default = "Safra::ativa_default")]
    pub ativa: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analise_solo: Option<AnaliseSolo>,
}

impl Safra {
    pub fn new(
        usuario_id: RecordId,
        propriedade_id: RecordId,
        nome: impl Into<String>,
        cultura: impl Into<String>,
        variedade: impl Into<String>,
        area_ha: f64,
        data_inicio: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            usuario_id,
            propriedade_id,
            nome: nome.into(),
            cultura: cultura.into(),
            variedade: variedade.into(),
            area_ha,
            data_inicio,
            data_fim: None,
            ativa: true,
            analise_solo: None,
        }
    }

    pub fn with_data_fim(mut self, data_fim: NaiveDate) -> Self {
        self.data_fim = Some(data_fim);
        self
    }

    pub fn with_analise_solo(mut self, analise: AnaliseSolo) -> Self {
        self.analise_solo = Some(analise);
        self
    }

    /// Last day considered for the season: `data_fim`, or `today` while ongoing.
    pub fn data_referencia_fim(&self, today: NaiveDate) -> NaiveDate {
        self.data_fim.unwrap_or(today)
    }

    fn ativa_default() -> bool {
        true
    }
}

impl Identifiable for Safra {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl NamedEntity for Safra {
    fn name(&self) -> &str {
        &self.nome
    }
}

impl Displayable for Safra {
    fn display_label(&self) -> String {
        let status = if self.ativa { "Ativa" } else { "Inativa" };
        format!("{} - {} {} ({})", self.nome, self.cultura, self.variedade, status)
    }
}

/// Soil analysis captured at the start of a season.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnaliseSolo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph_solo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fosforo_ppm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassio_ppm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcio_cmolc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnesio_cmolc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aluminio_cmolc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materia_organica_percent: Option<f64>,
}

impl AnaliseSolo {
    pub fn is_empty(&self) -> bool {
        [
            self.ph_solo,
            self.fosforo_ppm,
            self.potassio_ppm,
            self.calcio_cmolc,
            self.magnesio_cmolc,
            self.aluminio_cmolc,
            self.materia_organica_percent,
        ]
        .iter()
        .all(Option::is_none)
    }
}

/// Partial update for [`Safra`]. `ativa` is changed only through
/// inactivation/reactivation.
#[derive(Debug, Clone, Default)]
pub struct SafraPatch {
    pub propriedade_id: Option<RecordId>,
    pub nome: Option<String>,
    pub cultura: Option<String>,
    pub variedade: Option<String>,
    pub area_ha: Option<f64>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<Option<NaiveDate>>,
    pub analise_solo: Option<Option<AnaliseSolo>>,
}

impl Patch<Safra> for SafraPatch {
    fn apply_to(self, target: &mut Safra) {
        apply(&mut target.propriedade_id, self.propriedade_id);
        apply(&mut target.nome, self.nome);
        apply(&mut target.cultura, self.cultura);
        apply(&mut target.variedade, self.variedade);
        apply(&mut target.area_ha, self.area_ha);
        apply(&mut target.data_inicio, self.data_inicio);
        apply(&mut target.data_fim, self.data_fim);
        apply(&mut target.analise_solo, self.analise_solo);
    }
}
