//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{JwtService, TokenKind, TokenPayload, TOKEN_ALGORITHM};
pub use password::{check_password, hash_password, verify_password, MAX_PASSWORD_LENGTH};
