//! Authentication handlers
//!
//! Endpoints for registration, login, access token renewal, and logout.

use axum::{extract::State, Json};
use pha_service::dto::{
    LoginParams, LoginRequest, LogoutRequest, RegisterRequest, RenewAccessTokenParams,
    RenewAccessTokenRequest, TokenPairResponse,
};

use crate::extractors::{AuthUser, Client, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<()>> {
    state.auth_service().register(request).await?;
    Ok(Created(()))
}

/// Login with phone number and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Client(client): Client,
    ValidatedJson(credentials): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    let response = state
        .auth_service()
        .login(LoginParams {
            credentials,
            client,
        })
        .await?;
    Ok(Json(response))
}

/// Issue a new access token for a refresh token
///
/// POST /auth/token/renew
pub async fn renew_access_token(
    State(state): State<AppState>,
    Client(client): Client,
    ValidatedJson(request): ValidatedJson<RenewAccessTokenRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    let response = state
        .auth_service()
        .renew_access_token(RenewAccessTokenParams { request, client })
        .await?;
    Ok(Json(response))
}

/// Revoke the session behind a refresh token
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<LogoutRequest>,
) -> ApiResult<NoContent> {
    state.auth_service().revoke_session(auth.user_id, request).await?;
    Ok(NoContent)
}
