use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::perfil::RPerfilUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticate;

#[put("")]
async fn update_perfil(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RPerfilUpdate>,
) -> ApiResult<entity::profile::Model> {
    let identity_id = authenticate(&db, auth.token()).await?;

    let profile = db.update_profile(identity_id, body.into_inner()).await?;

    Ok(ApiResponse::Ok(profile))
}
