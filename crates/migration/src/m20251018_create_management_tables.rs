use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create professores table
        manager
            .create_table(
                Table::create()
                    .table(Professores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professores::Nome).string_len(100).not_null())
                    .col(ColumnDef::new(Professores::Idade).integer())
                    .col(ColumnDef::new(Professores::Materia).string_len(100))
                    .col(ColumnDef::new(Professores::Observacoes).text())
                    .to_owned(),
            )
            .await?;

        // Create turmas table
        manager
            .create_table(
                Table::create()
                    .table(Turmas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Turmas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Turmas::Descricao).string_len(100).not_null())
                    .col(ColumnDef::new(Turmas::ProfessorId).integer().not_null())
                    .col(
                        ColumnDef::new(Turmas::Ativo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Create alunos table
        manager
            .create_table(
                Table::create()
                    .table(Alunos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alunos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alunos::Nome).string_len(100).not_null())
                    .col(ColumnDef::new(Alunos::Idade).integer())
                    .col(ColumnDef::new(Alunos::TurmaId).integer())
                    .col(ColumnDef::new(Alunos::DataNascimento).string_len(10))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alunos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Turmas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Professores {
    Table,
    Id,
    Nome,
    Idade,
    Materia,
    Observacoes,
}

#[derive(Iden)]
enum Turmas {
    Table,
    Id,
    Descricao,
    ProfessorId,
    Ativo,
}

#[derive(Iden)]
enum Alunos {
    Table,
    Id,
    Nome,
    Idade,
    TurmaId,
    DataNascimento,
}
