use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::auth::RegenerateRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::construct_token;
use crate::utils::webutils::authenticate;

#[post("")]
async fn regenerate(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<RegenerateRes> {
    let identity_id = authenticate(&db, auth.token()).await?;

    let secret = db.regenerate_identity_token(&identity_id).await?;

    Ok(ApiResponse::Ok(RegenerateRes {
        token: construct_token(&identity_id, &secret),
    }))
}
