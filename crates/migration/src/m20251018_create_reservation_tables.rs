use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservas::Data).string_len(20).not_null())
                    .col(ColumnDef::new(Reservas::NumSala).integer().not_null())
                    .col(
                        ColumnDef::new(Reservas::Lab)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // turma_id points into the management service, so no foreign key
                    .col(ColumnDef::new(Reservas::TurmaId).integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reservas {
    Table,
    Id,
    Data,
    NumSala,
    Lab,
    TurmaId,
}
