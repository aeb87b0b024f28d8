use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Atividades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Atividades::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Atividades::Descricao).string_len(100).not_null())
                    .col(ColumnDef::new(Atividades::Nota).double())
                    .col(ColumnDef::new(Atividades::TurmaId).integer().not_null())
                    .col(ColumnDef::new(Atividades::ProfessorId).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Atividades::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Atividades {
    Table,
    Id,
    Descricao,
    Nota,
    TurmaId,
    ProfessorId,
}
