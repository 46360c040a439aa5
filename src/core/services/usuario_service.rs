//! Registration, lookup and authentication of users.

use tracing::{debug, info};

use crate::core::store::FarmStore;
use crate::domain::{Patch, RecordId, Usuario, UsuarioPatch};

use super::{require_text, ServiceError, ServiceResult};

pub struct UsuarioService;

impl UsuarioService {
    /// Registers a new user. Fails without touching the store when a required
    /// field is missing or the username, CPF or email is already in use.
    pub fn registrar(store: &mut FarmStore, usuario: Usuario) -> ServiceResult<Usuario> {
        Self::validate(&usuario)?;
        Self::ensure_unique(store, None, &usuario)?;
        let stored = store.usuarios.insert(usuario);
        store.touch();
        info!(id = stored.id, username = %stored.nome_de_usuario, "user registered");
        Ok(stored)
    }

    /// Returns the user whose credentials match, if any.
    pub fn autenticar<'a>(
        store: &'a FarmStore,
        nome_de_usuario: &str,
        senha: &str,
    ) -> Option<&'a Usuario> {
        let found = store
            .usuarios
            .iter()
            .find(|user| user.nome_de_usuario == nome_de_usuario && user.senha == senha);
        if found.is_none() {
            debug!(username = %nome_de_usuario, "authentication rejected");
        }
        found
    }

    pub fn get(store: &FarmStore, id: RecordId) -> Option<&Usuario> {
        store.usuarios.get(id)
    }

    pub fn list(store: &FarmStore) -> Vec<&Usuario> {
        store.usuarios.iter().collect()
    }

    /// Applies `patch` to the user `id`. Returns `Ok(None)` for an unknown id.
    pub fn update(
        store: &mut FarmStore,
        id: RecordId,
        patch: UsuarioPatch,
    ) -> ServiceResult<Option<Usuario>> {
        let Some(mut candidate) = store.usuarios.get(id).cloned() else {
            return Ok(None);
        };
        patch.apply_to(&mut candidate);
        Self::validate(&candidate)?;
        Self::ensure_unique(store, Some(id), &candidate)?;
        store.usuarios.replace(candidate.clone());
        store.touch();
        Ok(Some(candidate))
    }

    fn validate(usuario: &Usuario) -> ServiceResult<()> {
        require_text("nome", &usuario.nome)?;
        require_text("nome_de_usuario", &usuario.nome_de_usuario)?;
        require_text("senha", &usuario.senha)?;
        if usuario.cpf_informado().is_none() && usuario.email_informado().is_none() {
            return Err(ServiceError::MissingIdentifier);
        }
        Ok(())
    }

    fn ensure_unique(
        store: &FarmStore,
        exclude: Option<RecordId>,
        candidate: &Usuario,
    ) -> ServiceResult<()> {
        let others = store
            .usuarios
            .iter()
            .filter(|user| exclude.map_or(true, |id| user.id != id));
        for other in others {
            if other.nome_de_usuario == candidate.nome_de_usuario {
                return Err(ServiceError::DuplicateUser("nome_de_usuario"));
            }
            if candidate.cpf_informado().is_some() && other.cpf_informado() == candidate.cpf_informado()
            {
                return Err(ServiceError::DuplicateUser("cpf"));
            }
            if candidate.email_informado().is_some()
                && other.email_informado() == candidate.email_informado()
            {
                return Err(ServiceError::DuplicateUser("email"));
            }
        }
        Ok(())
    }
}
