use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{extract_token_parts, verify};
use uuid::Uuid;

/// Resolves a bearer token to the identity it was issued for. Any failure
/// along the way (malformed token, unknown identity, stale secret) collapses
/// into Unauthorized.
pub async fn authenticate(db: &PostgresService, token: &str) -> Result<Uuid, AppError> {
    let (identity_id, secret) = extract_token_parts(token).ok_or(AppError::Unauthorized)?;

    let identity = db
        .get_identity(&identity_id)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    match verify(&secret, &identity.token_hash) {
        Ok(true) => Ok(identity_id),
        _ => Err(AppError::Unauthorized),
    }
}
