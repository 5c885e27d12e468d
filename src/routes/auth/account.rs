use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticate;

#[derive(Serialize, Deserialize)]
pub struct Response {}

/// Removes the caller's identity. The profile and everything owned through
/// it are deleted by the cascade, all in one transaction.
#[delete("")]
async fn delete_account(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Response> {
    let identity_id = authenticate(&db, auth.token()).await?;

    db.delete_identity(&identity_id).await?;

    Ok(ApiResponse::NoContent)
}
