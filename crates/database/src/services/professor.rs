use crate::entities::professores;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder,
};

/// Fields of a professor about to be created
#[derive(Debug, Clone, Default)]
pub struct NewProfessor {
    pub nome: String,
    pub idade: Option<i32>,
    pub materia: Option<String>,
    pub observacoes: Option<String>,
}

/// A partial update; `None` leaves the stored value untouched and
/// `Some(None)` clears a nullable column
#[derive(Debug, Clone, Default)]
pub struct ProfessorChanges {
    pub nome: Option<String>,
    pub idade: Option<Option<i32>>,
    pub materia: Option<Option<String>>,
    pub observacoes: Option<Option<String>>,
}

impl ProfessorChanges {
    /// Merges the supplied fields into `active`
    pub fn apply(self, active: &mut professores::ActiveModel) {
        if let Some(nome) = self.nome {
            active.nome = Set(nome);
        }
        if let Some(idade) = self.idade {
            active.idade = Set(idade);
        }
        if let Some(materia) = self.materia {
            active.materia = Set(materia);
        }
        if let Some(observacoes) = self.observacoes {
            active.observacoes = Set(observacoes);
        }
    }
}

pub struct ProfessorService;

impl ProfessorService {
    pub async fn create(
        db: &DatabaseConnection,
        professor: NewProfessor,
    ) -> Result<professores::Model, DbErr> {
        professores::ActiveModel {
            id: NotSet,
            nome: Set(professor.nome),
            idade: Set(professor.idade),
            materia: Set(professor.materia),
            observacoes: Set(professor.observacoes),
        }
        .insert(db)
        .await
    }

    /// All professors in insertion order
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<professores::Model>, DbErr> {
        professores::Entity::find()
            .order_by_asc(professores::Column::Id)
            .all(db)
            .await
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<professores::Model, DbErr> {
        professores::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        changes: ProfessorChanges,
    ) -> Result<professores::Model, DbErr> {
        let professor = Self::get(db, id).await?;

        let mut active: professores::ActiveModel = professor.clone().into();
        changes.apply(&mut active);

        if !active.is_changed() {
            return Ok(professor);
        }

        active.update(db).await
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
        let result = professores::Entity::delete_by_id(id).exec(db).await?;

        match result.rows_affected {
            0 => Err(Self::not_found(id)),
            _ => Ok(()),
        }
    }

    fn not_found(id: i32) -> DbErr {
        DbErr::RecordNotFound(format!("Professor com ID {id} não encontrado"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_util::memory_db;
    use migration::ManagementMigrator;

    fn ana() -> NewProfessor {
        NewProfessor {
            nome: "Ana".to_string(),
            idade: Some(35),
            materia: Some("Matemática".to_string()),
            observacoes: Some("Coordenadora".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids() {
        let db = memory_db::<ManagementMigrator>().await;

        let first = ProfessorService::create(&db, ana()).await.unwrap();
        let second = ProfessorService::create(&db, ana()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.nome, "Ana");
    }

    #[tokio::test]
    async fn test_partial_update_preserves_other_fields() {
        let db = memory_db::<ManagementMigrator>().await;
        let before = ProfessorService::create(&db, ana()).await.unwrap();

        let changes = ProfessorChanges {
            idade: Some(Some(40)),
            ..Default::default()
        };
        let after = ProfessorService::update(&db, before.id, changes).await.unwrap();

        assert_eq!(after.idade, Some(40));
        assert_eq!(after.nome, before.nome);
        assert_eq!(after.materia, before.materia);
        assert_eq!(after.observacoes, before.observacoes);

        let stored = ProfessorService::get(&db, before.id).await.unwrap();
        assert_eq!(stored, after);
    }

    #[tokio::test]
    async fn test_update_clears_nullable_columns() {
        let db = memory_db::<ManagementMigrator>().await;
        let before = ProfessorService::create(&db, ana()).await.unwrap();

        let changes = ProfessorChanges {
            materia: Some(None),
            ..Default::default()
        };
        let after = ProfessorService::update(&db, before.id, changes).await.unwrap();

        assert_eq!(after.materia, None);
        assert_eq!(after.idade, before.idade);
        assert_eq!(after.observacoes, before.observacoes);
    }

    #[tokio::test]
    async fn test_empty_update_is_a_no_op() {
        let db = memory_db::<ManagementMigrator>().await;
        let before = ProfessorService::create(&db, ana()).await.unwrap();

        let after = ProfessorService::update(&db, before.id, ProfessorChanges::default())
            .await
            .unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = memory_db::<ManagementMigrator>().await;

        let result = ProfessorService::update(&db, 42, ProfessorChanges::default()).await;
        assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_after_creates_and_deletes() {
        let db = memory_db::<ManagementMigrator>().await;

        let mut ids = Vec::new();
        for _ in 0..4 {
            ids.push(ProfessorService::create(&db, ana()).await.unwrap().id);
        }
        ProfessorService::delete(&db, ids[1]).await.unwrap();

        let listed: Vec<i32> = ProfessorService::list(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(listed, vec![ids[0], ids[2], ids[3]]);

        // Deleting twice never succeeds
        let result = ProfessorService::delete(&db, ids[1]).await;
        assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    }
}
