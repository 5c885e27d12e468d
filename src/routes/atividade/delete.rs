use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticate;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[delete("/{id}")]
async fn delete_atividade(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Response> {
    let identity_id = authenticate(&db, auth.token()).await?;
    let profile = db.profile_for_identity(identity_id).await?;

    db.delete_atividade(profile.id, path.into_inner()).await?;

    Ok(ApiResponse::NoContent)
}
