pub mod aluno;
pub mod atividade;
pub mod professor;
pub mod reserva;
pub mod turma;

#[cfg(test)]
pub(crate) mod test_util {
    use migration::MigratorTrait;
    use sea_orm::DatabaseConnection;

    use crate::db::create_connection;

    /// A fresh in-memory database with the tables of `M`
    pub async fn memory_db<M: MigratorTrait>() -> DatabaseConnection {
        let db = create_connection("sqlite::memory:").await.unwrap();
        M::up(&db, None).await.unwrap();
        db
    }
}
