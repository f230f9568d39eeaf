//! Authentication service
//!
//! Handles registration, login, access token renewal against server-side
//! sessions, session revocation, and retention of expired sessions.

use chrono::Utc;
use pha_common::auth::{check_password, hash_password, TokenKind, TokenPayload};
use pha_common::AppError;
use pha_core::entities::NewSession;
use pha_core::value_objects::UserId;
use tracing::{info, instrument, warn};

use crate::dto::{
    LoginParams, LogoutRequest, RegisterRequest, RenewAccessTokenParams, TokenPairResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(phone_number = %request.phone_number))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<()> {
        let password_hash = hash_password(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(&request.phone_number, &password_hash)
            .await
            .map_err(|e| match e.constraint_violation() {
                Some(violation) if violation.is_unique_on("phone_number") => {
                    warn!("Registration failed: duplicate phone number");
                    ServiceError::App(AppError::DuplicatePhoneNumber)
                }
                _ => ServiceError::from(e),
            })?;

        info!(user_id = %user.id, "User registered successfully");
        Ok(())
    }

    /// Login with phone number and password
    ///
    /// Issues an access token and a refresh token, and records a session
    /// keyed by the refresh token's id. Nothing is returned unless the
    /// session was stored.
    #[instrument(skip(self, params), fields(phone_number = %params.credentials.phone_number))]
    pub async fn login(&self, params: LoginParams) -> ServiceResult<TokenPairResponse> {
        let LoginParams {
            credentials,
            client,
        } = params;

        let user = self
            .ctx
            .user_repo()
            .find_by_phone_number(&credentials.phone_number)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::UserNotFound)
            })?;

        if let Err(e) = check_password(&credentials.password, &user.password_hash) {
            if matches!(e, AppError::WrongPassword) {
                warn!(user_id = %user.id, "Login failed: wrong password");
            }
            return Err(e.into());
        }

        let jwt = self.ctx.jwt_service();
        let (access_token, _) =
            jwt.create_token(user.id, TokenKind::Access, self.ctx.access_token_duration())?;
        let (refresh_token, refresh_payload) =
            jwt.create_token(user.id, TokenKind::Refresh, self.ctx.refresh_token_duration())?;

        let session = NewSession {
            id: refresh_payload.token_id,
            user_id: user.id,
            refresh_token: refresh_token.clone(),
            user_agent: client.user_agent,
            client_ip: client.client_ip,
            is_blocked: false,
            expired_at: refresh_payload.expires_at,
        };
        self.ctx
            .session_repo()
            .create(&session)
            .await
            .map_err(ServiceError::internal)?;

        info!(user_id = %user.id, session_id = %session.id, "User logged in successfully");

        Ok(TokenPairResponse::new(access_token, refresh_token))
    }

    /// Issue a new access token for a valid refresh token
    ///
    /// The refresh token is returned unchanged. Checks run in order and stop
    /// at the first failure: token signature and expiry, session existence,
    /// revocation, ownership, exact token match, session expiry.
    #[instrument(skip(self, params))]
    pub async fn renew_access_token(
        &self,
        params: RenewAccessTokenParams,
    ) -> ServiceResult<TokenPairResponse> {
        let RenewAccessTokenParams { request, client } = params;

        let payload = self.verify_refresh_token(&request.refresh_token)?;

        let session = self
            .ctx
            .session_repo()
            .find_by_id(payload.token_id)
            .await?
            .ok_or(ServiceError::App(AppError::SessionNotFound))?;

        if session.is_blocked {
            warn!(session_id = %session.id, "Renewal rejected: blocked session");
            return Err(ServiceError::App(AppError::BlockedSession));
        }
        if !session.is_owned_by(payload.user_id) {
            warn!(session_id = %session.id, user_id = %payload.user_id, "Renewal rejected: session belongs to another user");
            return Err(ServiceError::App(AppError::IncorrectSessionUser));
        }
        if session.refresh_token != request.refresh_token {
            warn!(session_id = %session.id, "Renewal rejected: refresh token does not match session");
            return Err(ServiceError::App(AppError::MismatchedSessionToken));
        }
        if session.is_expired_at(Utc::now()) {
            return Err(ServiceError::App(AppError::ExpiredSession));
        }

        if session.user_agent != client.user_agent || session.client_ip != client.client_ip {
            warn!(
                session_id = %session.id,
                session_client_ip = %session.client_ip,
                client_ip = %client.client_ip,
                "Renewal from a different client than the one that logged in"
            );
        }

        let (access_token, _) = self
            .ctx
            .jwt_service()
            .create_token(payload.user_id, TokenKind::Access, self.ctx.access_token_duration())?;

        info!(user_id = %payload.user_id, session_id = %session.id, "Access token renewed");

        Ok(TokenPairResponse::new(access_token, request.refresh_token))
    }

    /// Revoke the session behind a refresh token (logout)
    ///
    /// Only the owner of the session may revoke it. Revoking an already
    /// blocked session succeeds.
    #[instrument(skip(self, request))]
    pub async fn revoke_session(&self, user_id: UserId, request: LogoutRequest) -> ServiceResult<()> {
        let payload = self.verify_refresh_token(&request.refresh_token)?;

        let session = self
            .ctx
            .session_repo()
            .find_by_id(payload.token_id)
            .await?
            .ok_or(ServiceError::App(AppError::SessionNotFound))?;

        if !session.is_owned_by(user_id) {
            warn!(session_id = %session.id, "Logout rejected: session belongs to another user");
            return Err(ServiceError::App(AppError::IncorrectSessionUser));
        }

        if session.is_blocked {
            info!(session_id = %session.id, "Session already revoked");
            return Ok(());
        }

        self.ctx.session_repo().block(session.id).await?;

        info!(session_id = %session.id, "Session revoked");
        Ok(())
    }

    /// Delete sessions whose expiry has passed
    #[instrument(skip(self))]
    pub async fn purge_expired_sessions(&self) -> ServiceResult<u64> {
        let deleted = self.ctx.session_repo().delete_expired(Utc::now()).await?;

        if deleted > 0 {
            info!(deleted, "Purged expired sessions");
        }
        Ok(deleted)
    }

    /// Verify an access token and return its payload
    ///
    /// Access tokens are trusted on signature, kind and expiry alone; no
    /// session lookup happens here. A refresh token is rejected as invalid.
    #[instrument(skip(self, token))]
    pub fn authenticate(&self, token: &str) -> ServiceResult<TokenPayload> {
        let payload = self.ctx.jwt_service().verify_token(token)?;

        if payload.kind != TokenKind::Access {
            warn!(kind = %payload.kind, "Bearer token is not an access token");
            return Err(ServiceError::App(AppError::InvalidToken));
        }
        Ok(payload)
    }

    /// Verify a refresh token presented as request input
    ///
    /// An access token in its place is treated like any other invalid token.
    fn verify_refresh_token(&self, token: &str) -> ServiceResult<TokenPayload> {
        let payload = self
            .ctx
            .jwt_service()
            .verify_token(token)
            .and_then(|payload| match payload.kind {
                TokenKind::Refresh => Ok(payload),
                TokenKind::Access => Err(AppError::InvalidToken),
            });

        payload.map_err(|e| {
            if e.is_token_error() {
                warn!(reason = %e, "Refresh token rejected");
                ServiceError::BadRequest(e)
            } else {
                ServiceError::from(e)
            }
        })
    }
}
