use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Turma {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Atividade {
    Table,
    Id,
    TurmaId,
    Titulo,
    Descricao,
    DataEntrega,
    Tipo,
    Status,
    CreatedAt,
    UpdatedAt,
}

fn tipo_values() -> [Alias; 5] {
    [
        Alias::new("tarefa"),
        Alias::new("prova"),
        Alias::new("projeto"),
        Alias::new("exercicio"),
        Alias::new("trabalho"),
    ]
}

fn status_values() -> [Alias; 3] {
    [
        Alias::new("ativa"),
        Alias::new("finalizada"),
        Alias::new("cancelada"),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_type(
            Type::create()
                .as_enum(Alias::new("tipo_atividade"))
                .values(tipo_values())
                .to_owned(),
        ).await?;

        m.create_type(
            Type::create()
                .as_enum(Alias::new("status_atividade"))
                .values(status_values())
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Atividade::Table)
                .col(ColumnDef::new(Atividade::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Atividade::TurmaId).uuid().not_null())
                .col(ColumnDef::new(Atividade::Titulo).string().not_null())
                .col(ColumnDef::new(Atividade::Descricao).string().null())
                .col(ColumnDef::new(Atividade::DataEntrega).date().null())
                .col(
                    ColumnDef::new(Atividade::Tipo)
                        .enumeration(Alias::new("tipo_atividade"), tipo_values())
                        .null(),
                )
                .col(
                    ColumnDef::new(Atividade::Status)
                        .enumeration(Alias::new("status_atividade"), status_values())
                        .not_null(),
                )
                .col(ColumnDef::new(Atividade::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Atividade::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_atividade_turma")
                        .from(Atividade::Table, Atividade::TurmaId)
                        .to(Turma::Table, Turma::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_atividade_turma")
                .table(Atividade::Table)
                .col(Atividade::TurmaId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Atividade::Table).if_exists().to_owned()).await?;
        m.drop_type(Type::drop().name(Alias::new("status_atividade")).to_owned()).await?;
        m.drop_type(Type::drop().name(Alias::new("tipo_atividade")).to_owned()).await?;
        Ok(())
    }
}
