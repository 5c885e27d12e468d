pub use sea_orm_migration::prelude::*;

mod m20250114_000001_create_identity_table;
mod m20250114_000002_create_profile_table;
mod m20250120_000001_create_turma_table;
mod m20250120_000002_create_atividade_table;

pub struct Migrator;

impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250114_000001_create_identity_table::Migration),
            Box::new(m20250114_000002_create_profile_table::Migration),
            Box::new(m20250120_000001_create_turma_table::Migration),
            Box::new(m20250120_000002_create_atividade_table::Migration),
        ]
    }
}
