use crate::entities::turmas;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder,
};

#[derive(Debug, Clone)]
pub struct NewTurma {
    pub descricao: String,
    pub professor_id: i32,
    pub ativo: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TurmaChanges {
    pub descricao: Option<String>,
    pub professor_id: Option<i32>,
    pub ativo: Option<bool>,
}

impl TurmaChanges {
    pub fn apply(self, active: &mut turmas::ActiveModel) {
        if let Some(descricao) = self.descricao {
            active.descricao = Set(descricao);
        }
        if let Some(professor_id) = self.professor_id {
            active.professor_id = Set(professor_id);
        }
        if let Some(ativo) = self.ativo {
            active.ativo = Set(ativo);
        }
    }
}

pub struct TurmaService;

impl TurmaService {
    pub async fn create(db: &DatabaseConnection, turma: NewTurma) -> Result<turmas::Model, DbErr> {
        turmas::ActiveModel {
            id: NotSet,
            descricao: Set(turma.descricao),
            professor_id: Set(turma.professor_id),
            ativo: Set(turma.ativo),
        }
        .insert(db)
        .await
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<turmas::Model>, DbErr> {
        turmas::Entity::find()
            .order_by_asc(turmas::Column::Id)
            .all(db)
            .await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<turmas::Model, DbErr> {
        turmas::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: TurmaChanges,
    ) -> Result<turmas::Model, DbErr> {
        let turma = Self::get(db, id).await?;

        let mut active: turmas::ActiveModel = turma.clone().into();
        changes.apply(&mut active);

        if !active.is_changed() {
            return Ok(turma);
        }

        active.update(db).await
    }

    /// Removes the class; reservations and activities elsewhere keep pointing at it
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        let result = turmas::Entity::delete_by_id(id).exec(db).await?;

        match result.rows_affected {
            0 => Err(Self::not_found(id)),
            _ => Ok(()),
        }
    }

    fn not_found(id: i32) -> DbErr {
        DbErr::RecordNotFound(format!("Turma com ID {id} não encontrada"))
    }
}
