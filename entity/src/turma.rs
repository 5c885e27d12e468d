use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "turma")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub professor_id: Uuid, // FK -> profile.id
    pub nome: String,
    pub ano_letivo: String,
    pub periodo: Option<Periodo>,
    pub descricao: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "periodo")]
#[serde(rename_all = "lowercase")]
pub enum Periodo {
    #[sea_orm(string_value = "matutino")]
    Matutino,
    #[sea_orm(string_value = "vespertino")]
    Vespertino,
    #[sea_orm(string_value = "noturno")]
    Noturno,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::ProfessorId",
        to = "super::profile::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Profile,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::atividade::Entity> for Entity {
    fn to() -> RelationDef {
        super::atividade::Relation::Turma.def().rev()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
