use database::{
    entities::professores,
    services::professor::{NewProfessor, ProfessorChanges},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{double_option, non_blank, not_null, required_text};
use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProfessorRequest {
    pub nome: Option<String>,
    pub idade: Option<i32>,
    pub materia: Option<String>,
    pub observacoes: Option<String>,
}

impl CreateProfessorRequest {
    pub fn validate(self) -> Result<NewProfessor, AppError> {
        Ok(NewProfessor {
            nome: required_text(self.nome, "nome")?,
            idade: self.idade,
            materia: self.materia,
            observacoes: self.observacoes,
        })
    }
}

/// Every field is optional; only the ones sent are changed and an explicit
/// `null` clears a nullable column
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfessorRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub nome: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub idade: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub materia: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub observacoes: Option<Option<String>>,
}

impl UpdateProfessorRequest {
    pub fn validate(self) -> Result<ProfessorChanges, AppError> {
        Ok(ProfessorChanges {
            nome: non_blank(not_null(self.nome, "nome")?, "nome")?,
            idade: self.idade,
            materia: self.materia,
            observacoes: self.observacoes,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorCreated {
    pub id: i32,
    pub nome: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorResponse {
    pub id: i32,
    pub nome: String,
    pub idade: Option<i32>,
    pub materia: Option<String>,
    pub observacoes: Option<String>,
}

impl From<professores::Model> for ProfessorCreated {
    fn from(professor: professores::Model) -> Self {
        Self {
            id: professor.id,
            nome: professor.nome,
        }
    }
}

impl From<professores::Model> for ProfessorResponse {
    fn from(professor: professores::Model) -> Self {
        Self {
            id: professor.id,
            nome: professor.nome,
            idade: professor.idade,
            materia: professor.materia,
            observacoes: professor.observacoes,
        }
    }
}
