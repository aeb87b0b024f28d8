use database::{
    entities::alunos,
    services::aluno::{AlunoChanges, NewAluno},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{double_option, non_blank, not_null, required_text};
use crate::error::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAlunoRequest {
    pub nome: Option<String>,
    pub idade: Option<i32>,
    pub turma_id: Option<i32>,
    /// Free-form date, e.g. `2010-03-14`
    pub data_nascimento: Option<String>,
}

impl CreateAlunoRequest {
    pub fn validate(self) -> Result<NewAluno, AppError> {
        Ok(NewAluno {
            nome: required_text(self.nome, "nome")?,
            idade: self.idade,
            turma_id: self.turma_id,
            data_nascimento: self.data_nascimento,
        })
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAlunoRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub nome: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub idade: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub turma_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub data_nascimento: Option<Option<String>>,
}

impl UpdateAlunoRequest {
    pub fn validate(self) -> Result<AlunoChanges, AppError> {
        Ok(AlunoChanges {
            nome: non_blank(not_null(self.nome, "nome")?, "nome")?,
            idade: self.idade,
            turma_id: self.turma_id,
            data_nascimento: self.data_nascimento,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlunoCreated {
    pub id: i32,
    pub nome: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlunoResponse {
    pub id: i32,
    pub nome: String,
    pub idade: Option<i32>,
    pub turma_id: Option<i32>,
    pub data_nascimento: Option<String>,
}

impl From<alunos::Model> for AlunoCreated {
    fn from(aluno: alunos::Model) -> Self {
        Self {
            id: aluno.id,
            nome: aluno.nome,
        }
    }
}

impl From<alunos::Model> for AlunoResponse {
    fn from(aluno: alunos::Model) -> Self {
        Self {
            id: aluno.id,
            nome: aluno.nome,
            idade: aluno.idade,
            turma_id: aluno.turma_id,
            data_nascimento: aluno.data_nascimento,
        }
    }
}
