use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::turma::RTurmaUpdate;
use crate::utils::webutils::authenticate;

#[put("/{id}")]
async fn update_turma(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RTurmaUpdate>,
) -> ApiResult<entity::turma::Model> {
    let identity_id = authenticate(&db, auth.token()).await?;
    let profile = db.profile_for_identity(identity_id).await?;

    let turma = db
        .update_turma(profile.id, path.into_inner(), body.into_inner())
        .await?;

    Ok(ApiResponse::Ok(turma))
}
