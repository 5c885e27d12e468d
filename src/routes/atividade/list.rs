use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::atividade::AtividadeQuery;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::authenticate;

#[get("")]
async fn list_atividades(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<AtividadeQuery>,
) -> ApiResult<Vec<entity::atividade::Model>> {
    let identity_id = authenticate(&db, auth.token()).await?;
    let profile = db.profile_for_identity(identity_id).await?;

    let atividades = db.list_atividades(profile.id, query.turma).await?;

    Ok(ApiResponse::Ok(atividades))
}
