use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::atividade::RAtividadeCreate;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticate;

#[post("")]
async fn create_atividade(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RAtividadeCreate>,
) -> ApiResult<entity::atividade::Model> {
    let identity_id = authenticate(&db, auth.token()).await?;
    let profile = db.profile_for_identity(identity_id).await?;

    if body.titulo.trim().is_empty() {
        return Err(AppError::Validation("titulo must not be empty".into()));
    }

    let atividade = db.create_atividade(profile.id, body.into_inner()).await?;

    Ok(ApiResponse::Created(atividade))
}
