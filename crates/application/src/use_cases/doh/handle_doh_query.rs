use crate::ports::DohResolver;
use bytes::Bytes;
use ferrous_doh_domain::dns_wire::encode_b64url;
use ferrous_doh_domain::{DohRequest, DohResponse, DomainError};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// A DoH query as received over HTTP.
#[derive(Debug, Clone)]
pub enum DohPayload {
    /// `GET ?dns=` value, already base64url.
    Encoded(String),
    /// `POST` body with `application/dns-message`.
    Raw(Bytes),
}

impl DohPayload {
    /// Both forms enter the resolver as base64url so they share cache keys.
    pub fn into_b64(self) -> String {
        match self {
            Self::Encoded(s) => s,
            Self::Raw(body) => encode_b64url(&body),
        }
    }
}

pub struct HandleDohQueryUseCase {
    resolver: Arc<dyn DohResolver>,
}

impl HandleDohQueryUseCase {
    pub fn new(resolver: Arc<dyn DohResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, payload: DohPayload) -> Result<DohResponse, DomainError> {
        if matches!(&payload, DohPayload::Raw(body) if body.is_empty()) {
            return Err(DomainError::InvalidDnsMessage("empty request body".to_string()));
        }

        let start = Instant::now();
        let request = DohRequest::new(payload.into_b64());

        match self.resolver.resolve(&request).await {
            Ok(response) => {
                debug!(
                    cache = response.cache_status.as_str(),
                    class = ?response.class,
                    provider = response.provider.as_deref().unwrap_or("-"),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "DoH query answered"
                );
                Ok(response)
            }
            Err(e) => {
                warn!(error = %e, elapsed_ms = start.elapsed().as_millis() as u64, "DoH query failed");
                Err(e)
            }
        }
    }
}
