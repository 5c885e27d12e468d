use crate::db::postgres_service::PostgresService;
use crate::types::auth::DBSignup;
use crate::types::error::AppError;
use crate::utils::token::{self, encrypt, new_secret};
use entity::identity::{ActiveModel as IdentityActive, Entity as Identity, Model as IdentityModel};
use entity::profile::ActiveModel as ProfileActive;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    Set, TransactionTrait,
};
use uuid::Uuid;

/// Display name used when signup metadata carries no nome.
pub const DEFAULT_NOME: &str = "Professor(a)";

impl PostgresService {
    pub async fn identity_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(Identity::find()
            .filter(entity::identity::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_identity(&self, id: &Uuid) -> Result<IdentityModel, AppError> {
        Ok(Identity::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Identity does not exist".into()))?)
    }

    /// Signup: the identity and its profile are one transaction. Either both
    /// rows exist afterwards or neither does.
    pub async fn create_identity_with_profile(&self, payload: DBSignup) -> Result<Uuid, AppError> {
        if self.identity_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let identity_id = token::new_id();
        let txn = self.database_connection.begin().await?;

        IdentityActive {
            id: Set(identity_id),
            email: Set(payload.email.clone()),
            token_hash: Set(payload.token_hash),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        ProfileActive {
            id: Set(token::new_id()),
            identity_id: Set(identity_id),
            nome: Set(payload.nome.unwrap_or_else(|| DEFAULT_NOME.to_string())),
            email: Set(payload.email),
            escola: Set(payload.escola),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(identity_id)
    }

    /// Rotates the stored secret. Tokens issued before this stop validating.
    pub async fn regenerate_identity_token(&self, identity_id: &Uuid) -> Result<String, AppError> {
        let identity = self.get_identity(identity_id).await?;
        let secret = new_secret();
        let hashed =
            encrypt(&secret).map_err(|_| AppError::Internal("token hashing failed".into()))?;
        let mut am: IdentityActive = identity.into();
        am.token_hash = Set(hashed);
        am.update(&self.database_connection).await?;
        Ok(secret)
    }

    /// Removes the identity; profile, turmas and atividades go with it.
    pub async fn delete_identity(&self, identity_id: &Uuid) -> Result<(), AppError> {
        let identity = self.get_identity(identity_id).await?;
        identity.delete(&self.database_connection).await?;
        Ok(())
    }
}
