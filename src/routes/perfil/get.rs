use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticate;

#[get("")]
async fn get_perfil(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<entity::profile::Model> {
    let identity_id = authenticate(&db, auth.token()).await?;

    let profile = db.profile_for_identity(identity_id).await?;

    Ok(ApiResponse::Ok(profile))
}
