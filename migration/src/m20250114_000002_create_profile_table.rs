use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Identity {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    IdentityId,
    Nome,
    Email,
    Escola,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Profile::Table)
                .col(ColumnDef::new(Profile::Id).uuid().not_null().primary_key())
                // one profile per identity, removed only by identity deletion
                .col(ColumnDef::new(Profile::IdentityId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Profile::Nome).string().not_null())
                .col(ColumnDef::new(Profile::Email).string().not_null())
                .col(ColumnDef::new(Profile::Escola).string().null())
                .col(ColumnDef::new(Profile::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Profile::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_profile_identity")
                        .from(Profile::Table, Profile::IdentityId)
                        .to(Identity::Table, Identity::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_profile_identity")
                .table(Profile::Table)
                .col(Profile::IdentityId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Profile::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
