use crate::db::postgres_service::PostgresService;
use crate::types::atividade::{RAtividadeCreate, RAtividadeUpdate};
use crate::types::error::AppError;
use crate::utils::token::new_id;
use entity::atividade::{
    ActiveModel as AtividadeActive, Entity as Atividade, Model as AtividadeModel, Status,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select, Set,
};
use uuid::Uuid;

impl PostgresService {
    /// Two-hop ownership scope: atividade -> turma -> profile. The inner
    /// join keeps the caller inside their own chain without a separate
    /// permission lookup.
    pub(crate) fn atividades_of(profile_id: Uuid) -> Select<Atividade> {
        Atividade::find()
            .join(JoinType::InnerJoin, entity::atividade::Relation::Turma.def())
            .filter(entity::turma::Column::ProfessorId.eq(profile_id))
    }

    pub async fn create_atividade(
        &self,
        profile_id: Uuid,
        payload: RAtividadeCreate,
    ) -> Result<AtividadeModel, AppError> {
        // Parent lookup goes through the caller's scope. A turma owned by
        // someone else resolves the same as one that does not exist.
        Self::turmas_of(profile_id)
            .filter(entity::turma::Column::Id.eq(payload.turma_id))
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::DependencyMissing)?;

        Ok(AtividadeActive {
            id: Set(new_id()),
            turma_id: Set(payload.turma_id),
            titulo: Set(payload.titulo),
            descricao: Set(payload.descricao),
            data_entrega: Set(payload.data_entrega),
            tipo: Set(payload.tipo),
            status: Set(payload.status.unwrap_or(Status::Ativa)),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn list_atividades(
        &self,
        profile_id: Uuid,
        turma_id: Option<Uuid>,
    ) -> Result<Vec<AtividadeModel>, AppError> {
        let mut finder = Self::atividades_of(profile_id);
        if let Some(turma_id) = turma_id {
            finder = finder.filter(entity::atividade::Column::TurmaId.eq(turma_id));
        }
        Ok(finder
            .order_by_desc(entity::atividade::Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_atividade(
        &self,
        profile_id: Uuid,
        atividade_id: Uuid,
    ) -> Result<AtividadeModel, AppError> {
        Self::atividades_of(profile_id)
            .filter(entity::atividade::Column::Id.eq(atividade_id))
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn update_atividade(
        &self,
        profile_id: Uuid,
        atividade_id: Uuid,
        changes: RAtividadeUpdate,
    ) -> Result<AtividadeModel, AppError> {
        let mut am: AtividadeActive = self.get_atividade(profile_id, atividade_id).await?.into();
        if let Some(titulo) = changes.titulo {
            am.titulo = Set(titulo);
        }
        if let Some(descricao) = changes.descricao {
            am.descricao = Set(Some(descricao));
        }
        if let Some(data_entrega) = changes.data_entrega {
            am.data_entrega = Set(Some(data_entrega));
        }
        if let Some(tipo) = changes.tipo {
            am.tipo = Set(Some(tipo));
        }
        if let Some(status) = changes.status {
            am.status = Set(status);
        }
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_atividade(
        &self,
        profile_id: Uuid,
        atividade_id: Uuid,
    ) -> Result<(), AppError> {
        let atividade = self.get_atividade(profile_id, atividade_id).await?;
        atividade.delete(&self.database_connection).await?;
        Ok(())
    }
}
