use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::turma::{RTurmaCreate, RTurmaUpdate};
use crate::utils::token::new_id;
use entity::turma::{ActiveModel as TurmaActive, Entity as Turma, Model as TurmaModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

impl PostgresService {
    /// Ownership scope for turmas: everything below starts from this Select,
    /// so rows of other professors are never reachable. A foreign turma id
    /// resolves to nothing, same as an id that was never issued.
    pub(crate) fn turmas_of(profile_id: Uuid) -> Select<Turma> {
        Turma::find().filter(entity::turma::Column::ProfessorId.eq(profile_id))
    }

    pub async fn create_turma(
        &self,
        profile_id: Uuid,
        payload: RTurmaCreate,
    ) -> Result<TurmaModel, AppError> {
        Ok(TurmaActive {
            id: Set(new_id()),
            professor_id: Set(profile_id),
            nome: Set(payload.nome),
            ano_letivo: Set(payload.ano_letivo),
            periodo: Set(payload.periodo),
            descricao: Set(payload.descricao),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn list_turmas(&self, profile_id: Uuid) -> Result<Vec<TurmaModel>, AppError> {
        Ok(Self::turmas_of(profile_id)
            .order_by_desc(entity::turma::Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_turma(
        &self,
        profile_id: Uuid,
        turma_id: Uuid,
    ) -> Result<TurmaModel, AppError> {
        Self::turmas_of(profile_id)
            .filter(entity::turma::Column::Id.eq(turma_id))
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn update_turma(
        &self,
        profile_id: Uuid,
        turma_id: Uuid,
        changes: RTurmaUpdate,
    ) -> Result<TurmaModel, AppError> {
        let mut am: TurmaActive = self.get_turma(profile_id, turma_id).await?.into();
        if let Some(nome) = changes.nome {
            am.nome = Set(nome);
        }
        if let Some(ano_letivo) = changes.ano_letivo {
            am.ano_letivo = Set(ano_letivo);
        }
        if let Some(periodo) = changes.periodo {
            am.periodo = Set(Some(periodo));
        }
        if let Some(descricao) = changes.descricao {
            am.descricao = Set(Some(descricao));
        }
        Ok(am.update(&self.database_connection).await?)
    }

    /// Atividades of the turma are removed by the FK cascade in the same
    /// transaction as the turma row.
    pub async fn delete_turma(&self, profile_id: Uuid, turma_id: Uuid) -> Result<(), AppError> {
        let turma = self.get_turma(profile_id, turma_id).await?;
        turma.delete(&self.database_connection).await?;
        Ok(())
    }
}
