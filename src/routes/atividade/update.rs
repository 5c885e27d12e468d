use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::atividade::RAtividadeUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticate;

#[put("/{id}")]
async fn update_atividade(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RAtividadeUpdate>,
) -> ApiResult<entity::atividade::Model> {
    let identity_id = authenticate(&db, auth.token()).await?;
    let profile = db.profile_for_identity(identity_id).await?;

    let atividade = db
        .update_atividade(profile.id, path.into_inner(), body.into_inner())
        .await?;

    Ok(ApiResponse::Ok(atividade))
}
