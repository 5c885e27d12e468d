use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "atividade")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub turma_id: Uuid, // FK -> turma.id
    pub titulo: String,
    pub descricao: Option<String>,
    pub data_entrega: Option<Date>,
    pub tipo: Option<Tipo>,
    pub status: Status,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "tipo_atividade")]
#[serde(rename_all = "lowercase")]
pub enum Tipo {
    #[sea_orm(string_value = "tarefa")]
    Tarefa,
    #[sea_orm(string_value = "prova")]
    Prova,
    #[sea_orm(string_value = "projeto")]
    Projeto,
    #[sea_orm(string_value = "exercicio")]
    Exercicio,
    #[sea_orm(string_value = "trabalho")]
    Trabalho,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "status_atividade")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "ativa")]
    Ativa,
    #[sea_orm(string_value = "finalizada")]
    Finalizada,
    #[sea_orm(string_value = "cancelada")]
    Cancelada,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::turma::Entity",
        from = "Column::TurmaId",
        to = "super::turma::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Turma,
}

impl Related<super::turma::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turma.def()
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
