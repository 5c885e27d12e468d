use std::sync::Arc;

use actix_web::{web, App};
use turmalina::{
    db::postgres_service::PostgresService,
    types::auth::DBSignup,
    utils::token::{construct_token, encrypt, new_secret},
};
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(turmalina::routes::configure_routes)
    }

    /// Provisions an identity (and, through the signup transaction, its
    /// profile) directly against the db layer. Returns the identity id and
    /// a usable bearer token.
    #[allow(dead_code)]
    pub async fn create_test_teacher(&self, email: Option<String>) -> (Uuid, String) {
        let secret = new_secret();
        let token_hash = encrypt(&secret).expect("Failed to hash secret");
        let random_id = Uuid::new_v4();

        let email = email.unwrap_or_else(|| format!("prof-{}@test.com", random_id));

        let identity_id = self
            .db
            .create_identity_with_profile(DBSignup {
                email,
                nome: Some("Professora de Teste".to_string()),
                escola: None,
                token_hash,
            })
            .await
            .expect("Failed to create teacher");

        let access_token = construct_token(&identity_id, &secret);

        (identity_id, access_token)
    }

    #[allow(dead_code)]
    pub async fn create_turma_for(&self, identity_id: Uuid) -> Uuid {
        let profile = self
            .db
            .profile_for_identity(identity_id)
            .await
            .expect("Failed to load profile");

        let turma = self
            .db
            .create_turma(
                profile.id,
                turmalina::types::turma::RTurmaCreate {
                    nome: "Turma de Teste".to_string(),
                    ano_letivo: "2026".to_string(),
                    periodo: None,
                    descricao: None,
                },
            )
            .await
            .expect("Failed to create turma");

        turma.id
    }
}
