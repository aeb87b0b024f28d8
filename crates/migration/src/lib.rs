pub use sea_orm_migration::prelude::*;

mod m20251018_create_activity_tables;
mod m20251018_create_management_tables;
mod m20251018_create_reservation_tables;

/// Tables owned by the management service
pub struct ManagementMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ManagementMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251018_create_management_tables::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_management").into_iden()
    }
}

/// Tables owned by the reservation service
pub struct ReservationMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ReservationMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251018_create_reservation_tables::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_reservas").into_iden()
    }
}

/// Tables owned by the activity service
pub struct ActivityMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ActivityMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251018_create_activity_tables::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_atividades").into_iden()
    }
}
