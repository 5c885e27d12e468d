use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Turma {
    Table,
    Id,
    ProfessorId,
    Nome,
    AnoLetivo,
    Periodo,
    Descricao,
    CreatedAt,
    UpdatedAt,
}

fn periodo_values() -> [Alias; 3] {
    [
        Alias::new("matutino"),
        Alias::new("vespertino"),
        Alias::new("noturno"),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_type(
            Type::create()
                .as_enum(Alias::new("periodo"))
                .values(periodo_values())
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Turma::Table)
                .col(ColumnDef::new(Turma::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Turma::ProfessorId).uuid().not_null())
                .col(ColumnDef::new(Turma::Nome).string().not_null())
                .col(ColumnDef::new(Turma::AnoLetivo).string().not_null())
                .col(
                    ColumnDef::new(Turma::Periodo)
                        .enumeration(Alias::new("periodo"), periodo_values())
                        .null(),
                )
                .col(ColumnDef::new(Turma::Descricao).string().null())
                .col(ColumnDef::new(Turma::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Turma::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_turma_profile")
                        .from(Turma::Table, Turma::ProfessorId)
                        .to(Profile::Table, Profile::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_turma_professor")
                .table(Turma::Table)
                .col(Turma::ProfessorId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Turma::Table).if_exists().to_owned()).await?;
        m.drop_type(Type::drop().name(Alias::new("periodo")).to_owned()).await?;
        Ok(())
    }
}
