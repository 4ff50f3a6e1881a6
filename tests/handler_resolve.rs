mod common;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

async fn shorten(
    server: &TestServer,
    username: &str,
    password: &str,
    url: &str,
    visibility: &str,
) -> String {
    let response = server
        .post("/api/v1/shorten")
        .add_header(header::AUTHORIZATION, common::basic_auth(username, password))
        .json(&json!([{ "original_url": url, "visibility": visibility }]))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()[0]["short_id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[sqlx::test]
async fn test_resolve_public_link_redirects(pool: PgPool) {
    let state = common::create_test_state(pool);
    common::register_user(&state, "alice", "pw1").await;
    let server = TestServer::new(common::test_router(state)).unwrap();

    let code = shorten(&server, "alice", "pw1", "https://a.example", "public").await;

    let response = server
        .get(&format!("/api/v1/{code}"))
        .add_header(header::AUTHORIZATION, common::basic_auth("alice", "pw1"))
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://a.example"
    );
}

#[sqlx::test]
async fn test_resolve_public_link_as_other_user(pool: PgPool) {
    let state = common::create_test_state(pool);
    common::register_user(&state, "alice", "pw1").await;
    common::register_user(&state, "bob", "pw2").await;
    let server = TestServer::new(common::test_router(state)).unwrap();

    let code = shorten(&server, "alice", "pw1", "https://a.example", "public").await;

    let response = server
        .get(&format!("/api/v1/{code}"))
        .add_header(header::AUTHORIZATION, common::basic_auth("bob", "pw2"))
        .await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
}

#[sqlx::test]
async fn test_resolve_unknown_code(pool: PgPool) {
    let state = common::create_test_state(pool);
    common::register_user(&state, "alice", "pw1").await;
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server
        .get("/api/v1/missing1")
        .add_header(header::AUTHORIZATION, common::basic_auth("alice", "pw1"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_resolve_private_link_owner_only(pool: PgPool) {
    let state = common::create_test_state(pool);
    common::register_user(&state, "alice", "pw1").await;
    common::register_user(&state, "bob", "pw2").await;
    let server = TestServer::new(common::test_router(state)).unwrap();

    let code = shorten(&server, "alice", "pw1", "https://secret.example", "private").await;

    let response = server
        .get(&format!("/api/v1/{code}"))
        .add_header(header::AUTHORIZATION, common::basic_auth("bob", "pw2"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .get(&format!("/api/v1/{code}"))
        .add_header(header::AUTHORIZATION, common::basic_auth("alice", "pw1"))
        .await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://secret.example"
    );
}

#[sqlx::test]
async fn test_resolve_after_delete_is_gone_for_owner(pool: PgPool) {
    let state = common::create_test_state(pool);
    common::register_user(&state, "alice", "pw1").await;
    let server = TestServer::new(common::test_router(state)).unwrap();

    let code = shorten(&server, "alice", "pw1", "https://a.example", "public").await;

    server
        .delete(&format!("/api/v1/{code}"))
        .add_header(header::AUTHORIZATION, common::basic_auth("alice", "pw1"))
        .await
        .assert_status_ok();

    let response = server
        .get(&format!("/api/v1/{code}"))
        .add_header(header::AUTHORIZATION, common::basic_auth("alice", "pw1"))
        .await;

    response.assert_status(StatusCode::GONE);
}

#[sqlx::test]
async fn test_resolve_deleted_private_link_is_gone_for_non_owner(pool: PgPool) {
    // Retirement is reported before authorization.
    let state = common::create_test_state(pool);
    common::register_user(&state, "alice", "pw1").await;
    common::register_user(&state, "bob", "pw2").await;
    let server = TestServer::new(common::test_router(state)).unwrap();

    let code = shorten(&server, "alice", "pw1", "https://secret.example", "private").await;

    server
        .delete(&format!("/api/v1/{code}"))
        .add_header(header::AUTHORIZATION, common::basic_auth("alice", "pw1"))
        .await
        .assert_status_ok();

    let response = server
        .get(&format!("/api/v1/{code}"))
        .add_header(header::AUTHORIZATION, common::basic_auth("bob", "pw2"))
        .await;

    response.assert_status(StatusCode::GONE);
}
