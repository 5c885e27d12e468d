use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use turmalina::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};
    use uuid::Uuid;

    pub fn sample_signup() -> Value {
        json!({
            "nome": "Maria Silva",
            "email": "maria@escola.example",
            "escola": "Escola Municipal Dom Pedro"
        })
    }

    pub fn sample_signup_with_email(email: &str) -> Value {
        json!({
            "nome": "Maria Silva",
            "email": email
        })
    }

    pub fn sample_turma() -> Value {
        json!({
            "nome": "5º Ano A",
            "ano_letivo": "2026",
            "periodo": "matutino",
            "descricao": "Turma da manhã"
        })
    }

    pub fn sample_atividade(turma_id: Uuid) -> Value {
        json!({
            "turma_id": turma_id,
            "titulo": "Prova de Matemática",
            "tipo": "prova",
            "data_entrega": "2026-09-15"
        })
    }
}
