//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

const REGISTER: &str = "/api/v1/auth/register";
const LOGIN: &str = "/api/v1/auth/login";
const RENEW: &str = "/api/v1/auth/token/renew";
const LOGOUT: &str = "/api/v1/auth/logout";

async fn register_and_login(server: &TestServer) -> (Credentials, TokenPair) {
    let credentials = Credentials::unique();
    let response = server.post(REGISTER, &credentials).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post(LOGIN, &credentials).await.unwrap();
    let tokens = assert_json(response, StatusCode::OK).await.unwrap();
    (credentials, tokens)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Register Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post(REGISTER, &Credentials::unique()).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_duplicate_phone_number() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();

    server.post(REGISTER, &credentials).await.unwrap();

    let response = server.post(REGISTER, &credentials).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "DUPLICATE_PHONE_NUMBER");
}

#[tokio::test]
async fn test_register_invalid_phone_number() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials {
        phone_number: "0101234".to_string(),
        password: "TestPass123!".to_string(),
    };

    let response = server.post(REGISTER, &credentials).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;

    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
    assert_ne!(tokens.access_token, tokens.refresh_token);
}

#[tokio::test]
async fn test_login_unknown_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post(LOGIN, &Credentials::unique()).await.unwrap();

    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (credentials, _) = register_and_login(&server).await;

    let response = server
        .post(LOGIN, &credentials.with_password("WrongPass456!"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "WRONG_PASSWORD");
}

// ============================================================================
// Token Renewal Tests
// ============================================================================

#[tokio::test]
async fn test_renew_access_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;
    let body = RefreshTokenBody::new(&tokens.refresh_token);

    let first: TokenPair = assert_json(server.post(RENEW, &body).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let second: TokenPair = assert_json(server.post(RENEW, &body).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    assert_eq!(first.refresh_token, tokens.refresh_token);
    assert_eq!(second.refresh_token, tokens.refresh_token);
    assert_ne!(first.access_token, second.access_token);
}

#[tokio::test]
async fn test_renew_with_invalid_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(RENEW, &RefreshTokenBody::new("invalid.token.here"))
        .await
        .unwrap();

    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_TOKEN");
}

// ============================================================================
// Logout Tests
// ============================================================================

#[tokio::test]
async fn test_logout_revokes_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;
    let body = RefreshTokenBody::new(&tokens.refresh_token);

    let response = server
        .post_auth(LOGOUT, &tokens.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.post(RENEW, &body).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "BLOCKED_SESSION");
}

#[tokio::test]
async fn test_logout_without_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;

    let response = server
        .post(LOGOUT, &RefreshTokenBody::new(&tokens.refresh_token))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");
    assert!(!body.error.message.is_empty());
}
