use serde::{Deserialize, Serialize};

/// Integer identifier shared by every stored record. `0` marks a record that
/// has not been inserted yet.
pub type RecordId = u64;

/// Identifies entities that expose a store-assigned identifier.
pub trait Identifiable {
    fn id(&self) -> RecordId;

    /// Called by the store when the record is inserted.
    fn assign_id(&mut self, id: RecordId);
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Applies a partial update onto an existing record.
///
/// Fields set on the patch override the target; unset fields are preserved.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}

/// Installment financing attached to an asset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Financiamento {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_financiado: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_parcelas: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parcelas_pagas: Option<u32>,
}

impl Financiamento {
    pub fn new(valor_financiado: f64, num_parcelas: u32) -> Self {
        Self {
            valor_financiado: Some(valor_financiado),
            num_parcelas: Some(num_parcelas),
            parcelas_pagas: None,
        }
    }

    pub fn with_parcelas_pagas(mut self, pagas: u32) -> Self {
        self.parcelas_pagas = Some(pagas);
        self
    }
}

/// Assets that may carry installment financing.
pub trait Financiado {
    fn financiamento(&self) -> Financiamento;
}

pub(crate) fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
