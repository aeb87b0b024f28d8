use crate::entities::atividades;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder,
};

/// An activity whose class and professor references have already been checked
#[derive(Debug, Clone)]
pub struct NewAtividade {
    pub descricao: String,
    pub nota: Option<f64>,
    pub turma_id: i32,
    pub professor_id: i32,
}

pub struct AtividadeService;

impl AtividadeService {
    pub async fn create(
        db: &DatabaseConnection,
        atividade: NewAtividade,
    ) -> Result<atividades::Model, DbErr> {
        atividades::ActiveModel {
            id: NotSet,
            descricao: Set(atividade.descricao),
            nota: Set(atividade.nota),
            turma_id: Set(atividade.turma_id),
            professor_id: Set(atividade.professor_id),
        }
        .insert(db)
        .await
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<atividades::Model>, DbErr> {
        atividades::Entity::find()
            .order_by_asc(atividades::Column::Id)
            .all(db)
            .await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        let result = atividades::Entity::delete_by_id(id).exec(db).await?;

        match result.rows_affected {
            0 => Err(DbErr::RecordNotFound(format!(
                "Atividade com ID {id} não encontrada"
            ))),
            _ => Ok(()),
        }
    }
}
