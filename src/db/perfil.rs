use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::perfil::RPerfilUpdate;
use entity::profile::{ActiveModel as ProfileActive, Entity as Profile, Model as ProfileModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    /// Entry point of every authorized operation: the caller's identity is
    /// resolved to its profile, and all further filtering hangs off that
    /// profile id. An identity without a profile cannot happen through
    /// signup, so the miss is treated as a broken credential.
    pub async fn profile_for_identity(&self, identity_id: Uuid) -> Result<ProfileModel, AppError> {
        Profile::find()
            .filter(entity::profile::Column::IdentityId.eq(identity_id))
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    pub async fn update_profile(
        &self,
        identity_id: Uuid,
        changes: RPerfilUpdate,
    ) -> Result<ProfileModel, AppError> {
        let mut am: ProfileActive = self.profile_for_identity(identity_id).await?.into();
        if let Some(nome) = changes.nome {
            am.nome = Set(nome);
        }
        if let Some(escola) = changes.escola {
            am.escola = Set(Some(escola));
        }
        Ok(am.update(&self.database_connection).await?)
    }
}
