pub mod benfeitoria_service;
pub mod colheita_service;
pub mod custo_service;
pub mod maquinario_service;
pub mod operacao_service;
pub mod produto_service;
pub mod propriedade_service;
pub mod relatorio_service;
pub mod resultado_service;
pub mod safra_service;
pub mod usuario_service;

pub use benfeitoria_service::BenfeitoriaService;
pub use colheita_service::ColheitaService;
pub use custo_service::{CustoFixoService, CustoVariavelService};
pub use maquinario_service::MaquinarioService;
pub use operacao_service::OperacaoService;
pub use produto_service::ProdutoService;
pub use propriedade_service::PropriedadeService;
pub use relatorio_service::{DocumentGenerator, JsonReportWriter, RelatorioSafra, RelatorioService};
pub use resultado_service::ResultadoService;
pub use safra_service::SafraService;
pub use usuario_service::UsuarioService;

use crate::core::store::FarmStore;
use crate::domain::RecordId;
use crate::errors::FarmError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Farm(#[from] FarmError),
    #[error("{0}")]
    Invalid(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Either CPF or email must be provided")]
    MissingIdentifier,
    #[error("User already registered: {0} is taken")]
    DuplicateUser(&'static str),
}

pub(crate) fn require_text(field: &'static str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        Err(ServiceError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Monetary values, quantities and rates must be finite and non-negative.
pub(crate) fn require_amount(field: &str, value: f64) -> ServiceResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ServiceError::Invalid(format!(
            "{field} must be a non-negative number"
        )))
    }
}

pub(crate) fn require_optional_amount(field: &str, value: Option<f64>) -> ServiceResult<()> {
    match value {
        Some(value) => require_amount(field, value),
        None => Ok(()),
    }
}

pub(crate) fn ensure_safra_exists(store: &FarmStore, safra_id: RecordId) -> ServiceResult<()> {
    if store.safras.contains(safra_id) {
        Ok(())
    } else {
        Err(ServiceError::Invalid(format!("Season {safra_id} does not exist")))
    }
}

pub(crate) fn ensure_usuario_exists(store: &FarmStore, usuario_id: RecordId) -> ServiceResult<()> {
    if store.usuarios.contains(usuario_id) {
        Ok(())
    } else {
        Err(ServiceError::Invalid(format!("User {usuario_id} does not exist")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_reject_negative_and_nan() {
        assert!(require_amount("custo", 0.0).is_ok());
        assert!(require_amount("custo", -1.0).is_err());
        assert!(require_amount("custo", f64::NAN).is_err());
        assert!(require_optional_amount("dose", None).is_ok());
    }

    #[test]
    fn blank_text_is_missing() {
        let err = require_text("nome", "   ").expect_err("blank must fail");
        assert!(matches!(err, ServiceError::MissingField("nome")));
    }
}
