//! Application users and their registration data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A registered user. Every other record is owned by one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Usuario {
    pub id: RecordId,
    pub nome: String,
    pub nome_de_usuario: String,
    pub senha: String,
    pub perfil: PerfilUsuario,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_url: Option<String>,
}

impl Usuario {
    pub fn new(
        nome: impl Into<String>,
        nome_de_usuario: impl Into<String>,
        senha: impl Into<String>,
        perfil: PerfilUsuario,
    ) -> Self {
        Self {
            id: 0,
            nome: nome.into(),
            nome_de_usuario: nome_de_usuario.into(),
            senha: senha.into(),
            perfil,
            cpf: None,
            email: None,
            foto_url: None,
        }
    }

    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns the CPF when it is set and not blank.
    pub fn cpf_informado(&self) -> Option<&str> {
        non_blank(self.cpf.as_deref())
    }

    /// Returns the email when it is set and not blank.
    pub fn email_informado(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

impl Identifiable for Usuario {
    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl NamedEntity for Usuario {
    fn name(&self) -> &str {
        &self.nome
    }
}

impl Displayable for Usuario {
    fn display_label(&self) -> String {
        format!("{} (@{}, {})", self.nome, self.nome_de_usuario, self.perfil)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PerfilUsuario {
    #[default]
    Produtor,
    #[serde(rename = "Técnico")]
    Tecnico,
}

impl fmt::Display for PerfilUsuario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerfilUsuario::Produtor => "Produtor",
            PerfilUsuario::Tecnico => "Técnico",
        };
        f.write_str(label)
    }
}

/// Partial update for [`Usuario`].
#[derive(Debug, Clone, Default)]
pub struct UsuarioPatch {
    pub nome: Option<String>,
    pub nome_de_usuario: Option<String>,
    pub senha: Option<String>,
    pub perfil: Option<PerfilUsuario>,
    pub cpf: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub foto_url: Option<Option<String>>,
}

impl Patch<Usuario> for UsuarioPatch {
    fn apply_to(self, target: &mut Usuario) {
        apply(&mut target.nome, self.nome);
        apply(&mut target.nome_de_usuario, self.nome_de_usuario);
        apply(&mut target.senha, self.senha);
        apply(&mut target.perfil, self.perfil);
        apply(&mut target.cpf, self.cpf);
        apply(&mut target.email, self.email);
        apply(&mut target.foto_url, self.foto_url);
    }
}
