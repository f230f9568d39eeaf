//! JWT utilities for authentication
//!
//! Provides token creation and verification using the `jsonwebtoken` crate.
//! Tokens are signed with HS256 only; any other declared algorithm is
//! rejected before the claims are looked at. Every token carries a `typ`
//! claim so an access token cannot stand in for a refresh token or the
//! other way around.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use pha_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Signing algorithm accepted by [`JwtService`]
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Which of the two token roles a token was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived bearer token for protected routes
    Access,
    /// Long-lived token backing a session
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims as they appear on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// Unique token id
    jti: Uuid,
    /// Token role
    typ: TokenKind,
    /// Subject (user ID)
    sub: String,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

/// Structured payload carried by a signed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub token_id: Uuid,
    pub user_id: UserId,
    pub kind: TokenKind,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenPayload {
    /// Build a payload for a fresh token valid for `duration` from now
    ///
    /// Timestamps are truncated to whole seconds, the precision of the
    /// encoded claims.
    ///
    /// # Errors
    /// Returns an internal error if `duration` pushes the expiry past the
    /// representable date range
    pub fn new(user_id: UserId, kind: TokenKind, duration: Duration) -> Result<Self, AppError> {
        let issued_at = Utc::now().trunc_subsecs(0);
        let expires_at = issued_at.checked_add_signed(duration).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("Token lifetime out of range: {duration}"))
        })?;

        Ok(Self {
            token_id: Uuid::new_v4(),
            user_id,
            kind,
            issued_at,
            expires_at,
        })
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    fn to_claims(&self) -> Claims {
        Claims {
            jti: self.token_id,
            typ: self.kind,
            sub: self.user_id.to_string(),
            iat: self.issued_at.timestamp(),
            exp: self.expires_at.timestamp(),
        }
    }
}

impl TryFrom<Claims> for TokenPayload {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = claims
            .sub
            .parse::<UserId>()
            .map_err(|_| AppError::InvalidToken)?;
        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(AppError::InvalidToken)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(AppError::InvalidToken)?;

        Ok(Self {
            token_id: claims.jti,
            user_id,
            kind: claims.typ,
            issued_at,
            expires_at,
        })
    }
}

/// JWT service for creating and verifying tokens with a symmetric secret
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Create a new JWT service with the given secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create a signed token of the given kind for a user, valid for `duration`
    ///
    /// Returns the token string together with the payload it carries.
    ///
    /// # Errors
    /// Returns an internal error if the expiry is out of range or signing fails
    pub fn create_token(
        &self,
        user_id: UserId,
        kind: TokenKind,
        duration: Duration,
    ) -> Result<(String, TokenPayload), AppError> {
        let payload = TokenPayload::new(user_id, kind, duration)?;

        let token = encode(
            &Header::new(TOKEN_ALGORITHM),
            &payload.to_claims(),
            &self.encoding_key,
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))?;

        Ok((token, payload))
    }

    /// Verify a token and return its payload
    ///
    /// Signature and algorithm are checked before expiry, so only a
    /// well-formed, correctly signed token can yield `TokenExpired`.
    ///
    /// # Errors
    /// Returns `AppError::TokenExpired` for an expired token and
    /// `AppError::InvalidToken` for anything else that fails verification
    pub fn verify_token(&self, token: &str) -> Result<TokenPayload, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        TokenPayload::try_from(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &TOKEN_ALGORITHM)
            .finish_non_exhaustive()
    }
}
