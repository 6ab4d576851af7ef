pub mod https;

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::DomainError;
use std::time::Duration;

pub use https::HttpsTransport;

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: Bytes,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound DoH exchange with a per-call deadline.
///
/// HTTP error statuses are returned as `Ok` replies; only failures that
/// produced no HTTP response at all (timeouts, DNS/TCP/TLS errors) are
/// `Err`.
#[async_trait]
pub trait DohTransport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        dns_b64: &str,
        timeout: Duration,
    ) -> Result<HttpReply, DomainError>;
}
