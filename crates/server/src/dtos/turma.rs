use database::{
    entities::turmas,
    services::turma::{NewTurma, TurmaChanges},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{double_option, non_blank, not_null, required, required_text};
use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTurmaRequest {
    pub descricao: Option<String>,
    pub professor_id: Option<i32>,
    /// Defaults to `true`
    pub ativo: Option<bool>,
}

impl CreateTurmaRequest {
    pub fn validate(self) -> Result<NewTurma, AppError> {
        Ok(NewTurma {
            descricao: required_text(self.descricao, "descricao")?,
            professor_id: required(self.professor_id, "professor_id")?,
            ativo: self.ativo.unwrap_or(true),
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTurmaRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub descricao: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub professor_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<bool>)]
    pub ativo: Option<Option<bool>>,
}

impl UpdateTurmaRequest {
    pub fn validate(self) -> Result<TurmaChanges, AppError> {
        Ok(TurmaChanges {
            descricao: non_blank(not_null(self.descricao, "descricao")?, "descricao")?,
            professor_id: not_null(self.professor_id, "professor_id")?,
            ativo: not_null(self.ativo, "ativo")?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TurmaCreated {
    pub id: i32,
    pub descricao: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TurmaResponse {
    pub id: i32,
    pub descricao: String,
    pub professor_id: i32,
    pub ativo: bool,
}

impl From<turmas::Model> for TurmaCreated {
    fn from(turma: turmas::Model) -> Self {
        Self {
            id: turma.id,
            descricao: turma.descricao,
        }
    }
}

impl From<turmas::Model> for TurmaResponse {
    fn from(turma: turmas::Model) -> Self {
        Self {
            id: turma.id,
            descricao: turma.descricao,
            professor_id: turma.professor_id,
            ativo: turma.ativo,
        }
    }
}
