mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use turmalina::utils::token::extract_token_parts;

#[tokio::test]
async fn test_signup_creates_identity_and_profile() {
    println!("\n\n[+] Running test: test_signup_creates_identity_and_profile");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(test_data::sample_signup())
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token missing from response");

    // The token carries the identity id; the profile must already exist.
    let (identity_id, _) = extract_token_parts(token).expect("token should decode");
    let profile = ctx
        .db
        .profile_for_identity(identity_id)
        .await
        .expect("profile should be provisioned with the identity");

    assert_eq!(profile.nome, "Maria Silva");
    assert_eq!(profile.email, "maria@escola.example");
    assert_eq!(profile.escola.as_deref(), Some("Escola Municipal Dom Pedro"));
    println!("[/] Test passed: profile provisioned at signup.");
}

#[tokio::test]
async fn test_signup_without_nome_uses_default() {
    println!("\n\n[+] Running test: test_signup_without_nome_uses_default");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(serde_json::json!({ "email": "sem-nome@test.com" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let (identity_id, _) = extract_token_parts(body["token"].as_str().unwrap()).unwrap();
    let profile = ctx.db.profile_for_identity(identity_id).await.unwrap();

    assert_eq!(profile.nome, turmalina::db::identity::DEFAULT_NOME);
    assert_eq!(profile.email, "sem-nome@test.com");
    println!("[/] Test passed: default nome applied.");
}

#[tokio::test]
async fn test_signup_duplicate_email_conflict() {
    println!("\n\n[+] Running test: test_signup_duplicate_email_conflict");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req1 = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(test_data::sample_signup_with_email("dup@test.com"))
        .to_request();
    let resp1 = test::call_service(&app, req1).await;
    assert_eq!(resp1.status(), StatusCode::CREATED);

    let req2 = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(test_data::sample_signup_with_email("dup@test.com"))
        .to_request();
    let resp2 = test::call_service(&app, req2).await;
    println!("[<] Second signup status: {}", resp2.status());
    assert_eq!(resp2.status(), StatusCode::CONFLICT);
    println!("[/] Test passed: duplicate email rejected.");
}

#[tokio::test]
async fn test_signup_empty_email_rejected() {
    println!("\n\n[+] Running test: test_signup_empty_email_rejected");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(serde_json::json!({ "email": "  " }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    println!("[/] Test passed: empty email rejected.");
}

#[tokio::test]
async fn test_validate_and_regenerate_flow() {
    println!("\n\n[+] Running test: test_validate_and_regenerate_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_identity_id, token) = client.create_test_teacher(None).await;

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    println!("[>] Regenerating token.");
    let req = test::TestRequest::post()
        .uri("/auth/regenerate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let new_token = body["token"].as_str().unwrap().to_string();
    assert_ne!(new_token, token);

    // The old secret must be dead, the new one alive.
    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", new_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: regeneration invalidates the old token.");
}

#[tokio::test]
async fn test_validate_garbage_token_unauthorized() {
    println!("\n\n[+] Running test: test_validate_garbage_token_unauthorized");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: garbage token rejected.");
}

#[tokio::test]
async fn test_delete_account_cascades_everything() {
    println!("\n\n[+] Running test: test_delete_account_cascades_everything");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (identity_id, token) = client.create_test_teacher(None).await;
    let turma_id = client.create_turma_for(identity_id).await;

    let profile = ctx.db.profile_for_identity(identity_id).await.unwrap();
    ctx.db
        .create_atividade(
            profile.id,
            turmalina::types::atividade::RAtividadeCreate {
                turma_id,
                titulo: "Tarefa de casa".to_string(),
                descricao: None,
                data_entrega: None,
                tipo: None,
                status: None,
            },
        )
        .await
        .expect("Failed to create atividade");

    println!("[>] Deleting account.");
    let req = test::TestRequest::delete()
        .uri("/auth/account")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // The whole chain is gone: credentials no longer resolve, the profile
    // and everything under it was cascade-deleted.
    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    assert!(ctx.db.profile_for_identity(identity_id).await.is_err());
    println!("[/] Test passed: account deletion cascades.");
}
