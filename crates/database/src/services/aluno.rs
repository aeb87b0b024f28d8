use crate::entities::alunos;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder,
};

#[derive(Debug, Clone, Default)]
pub struct NewAluno {
    pub nome: String,
    pub idade: Option<i32>,
    pub turma_id: Option<i32>,
    pub data_nascimento: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AlunoChanges {
    pub nome: Option<String>,
    pub idade: Option<Option<i32>>,
    pub turma_id: Option<Option<i32>>,
    pub data_nascimento: Option<Option<String>>,
}

impl AlunoChanges {
    pub fn apply(self, active: &mut alunos::ActiveModel) {
        if let Some(nome) = self.nome {
            active.nome = Set(nome);
        }
        if let Some(idade) = self.idade {
            active.idade = Set(idade);
        }
        if let Some(turma_id) = self.turma_id {
            active.turma_id = Set(turma_id);
        }
        if let Some(data_nascimento) = self.data_nascimento {
            active.data_nascimento = Set(data_nascimento);
        }
    }
}

pub struct AlunoService;

impl AlunoService {
    pub async fn create(db: &DatabaseConnection, aluno: NewAluno) -> Result<alunos::Model, DbErr> {
        alunos::ActiveModel {
            id: NotSet,
            nome: Set(aluno.nome),
            idade: Set(aluno.idade),
            turma_id: Set(aluno.turma_id),
            data_nascimento: Set(aluno.data_nascimento),
        }
        .insert(db)
        .await
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<alunos::Model>, DbErr> {
        alunos::Entity::find()
            .order_by_asc(alunos::Column::Id)
            .all(db)
            .await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<alunos::Model, DbErr> {
        alunos::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: AlunoChanges,
    ) -> Result<alunos::Model, DbErr> {
        let aluno = Self::get(db, id).await?;

        let mut active: alunos::ActiveModel = aluno.clone().into();
        changes.apply(&mut active);

        if !active.is_changed() {
            return Ok(aluno);
        }

        active.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        let result = alunos::Entity::delete_by_id(id).exec(db).await?;

        match result.rows_affected {
            0 => Err(Self::not_found(id)),
            _ => Ok(()),
        }
    }

    fn not_found(id: i32) -> DbErr {
        DbErr::RecordNotFound(format!("Aluno com ID {id} não encontrado"))
    }
}
