//! Service inputs that combine a request body with caller metadata

use super::requests::{LoginRequest, RenewAccessTokenRequest};

/// Metadata about the calling client, recorded on new sessions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub user_agent: String,
    pub client_ip: String,
}

impl ClientInfo {
    pub fn new(user_agent: impl Into<String>, client_ip: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            client_ip: client_ip.into(),
        }
    }
}

/// Input of the login operation
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub credentials: LoginRequest,
    pub client: ClientInfo,
}

/// Input of the access token renewal operation
#[derive(Debug, Clone)]
pub struct RenewAccessTokenParams {
    pub request: RenewAccessTokenRequest,
    pub client: ClientInfo,
}
