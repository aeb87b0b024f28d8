use database::{entities::atividades, services::atividade::NewAtividade};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{required, required_text};
use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAtividadeRequest {
    pub descricao: Option<String>,
    pub nota: Option<f64>,
    /// Class id, checked against the management service
    pub turma_id: Option<i32>,
    /// Professor id, checked against the management service
    pub professor_id: Option<i32>,
}

impl CreateAtividadeRequest {
    pub fn validate(self) -> Result<NewAtividade, AppError> {
        Ok(NewAtividade {
            descricao: required_text(self.descricao, "descricao")?,
            nota: self.nota,
            turma_id: required(self.turma_id, "turma_id")?,
            professor_id: required(self.professor_id, "professor_id")?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AtividadeCreated {
    pub id: i32,
    pub descricao: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AtividadeResponse {
    pub id: i32,
    pub descricao: String,
    pub nota: Option<f64>,
    pub turma_id: i32,
    pub professor_id: i32,
}

impl From<atividades::Model> for AtividadeCreated {
    fn from(atividade: atividades::Model) -> Self {
        Self {
            id: atividade.id,
            descricao: atividade.descricao,
        }
    }
}

impl From<atividades::Model> for AtividadeResponse {
    fn from(atividade: atividades::Model) -> Self {
        Self {
            id: atividade.id,
            descricao: atividade.descricao,
            nota: atividade.nota,
            turma_id: atividade.turma_id,
            professor_id: atividade.professor_id,
        }
    }
}
