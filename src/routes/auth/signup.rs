use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::auth::{DBSignup, RSignup, SignupRes};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::{construct_token, encrypt, new_secret};

#[post("")]
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RSignup>,
) -> ApiResult<SignupRes> {
    if body.email.trim().is_empty() {
        return Err(AppError::Validation("email must not be empty".into()));
    }

    let secret = new_secret();
    let token_hash =
        encrypt(&secret).map_err(|_| AppError::Internal("token hashing failed".into()))?;

    // Profile provisioning happens inside this call, in the same
    // transaction as the identity row.
    let identity_id = db
        .create_identity_with_profile(DBSignup {
            email: body.email.clone(),
            nome: body.nome.clone(),
            escola: body.escola.clone(),
            token_hash,
        })
        .await?;

    Ok(ApiResponse::Created(SignupRes {
        token: construct_token(&identity_id, &secret),
    }))
}
