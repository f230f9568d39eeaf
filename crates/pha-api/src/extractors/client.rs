//! Client metadata extractor
//!
//! Collects the user agent and client IP recorded on new sessions.

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use pha_service::dto::ClientInfo;

const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Caller metadata: `User-Agent` and the client IP
///
/// The IP is the first hop of `X-Forwarded-For` when it parses as an IP
/// address, otherwise the peer address of the connection. Missing values are
/// empty strings.
#[derive(Debug, Clone, Default)]
pub struct Client(pub ClientInfo);

#[async_trait]
impl<S> FromRequestParts<S> for Client
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        let client_ip = forwarded_for(&parts.headers)
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            })
            .unwrap_or_default();

        Ok(Client(ClientInfo::new(user_agent, client_ip)))
    }
}

/// First hop of `X-Forwarded-For`, normalized through `IpAddr`
fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(FORWARDED_FOR_HEADER)?.to_str().ok()?;
    let first = value.split(',').next()?.trim();
    first.parse::<IpAddr>().ok().map(|ip| ip.to_string())
}
