use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::turma::RTurmaCreate;
use crate::utils::webutils::authenticate;

#[post("")]
async fn create_turma(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RTurmaCreate>,
) -> ApiResult<entity::turma::Model> {
    let identity_id = authenticate(&db, auth.token()).await?;
    let profile = db.profile_for_identity(identity_id).await?;

    if body.nome.trim().is_empty() {
        return Err(AppError::Validation("nome must not be empty".into()));
    }
    if body.ano_letivo.trim().is_empty() {
        return Err(AppError::Validation("ano_letivo must not be empty".into()));
    }

    let turma = db.create_turma(profile.id, body.into_inner()).await?;

    Ok(ApiResponse::Created(turma))
}
